use thiserror::Error;

/// Errors produced by mapping validation, encoding, and query rewriting.
///
/// `DesignatorExhaustion` and `InvalidMapping` are configuration-time
/// failures and block the field from becoming usable. The per-value kinds
/// (`InvalidValue`, `ValueTooLong`) reject a single document or query and
/// leave the field intact. `UnsupportedPattern` is surfaced to the query
/// layer, which decides between a slow fallback and an outright rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkFieldError {
    /// A value or predicate contains a character outside the field's alphabet.
    #[error("character {ch:?} is not in the field's alphabet")]
    InvalidValue { ch: char },

    /// A value or predicate exceeds the mapping's maximum length.
    #[error("value is {len} characters long, the mapping allows at most {max}")]
    ValueTooLong { len: usize, max: usize },

    /// The designator alphabet cannot cover every reachable chunk token.
    #[error("designator alphabet has {available} symbols, the keyspace needs {needed}")]
    DesignatorExhaustion { needed: usize, available: usize },

    /// A mapping parameter is degenerate (zero chunk length, duplicate
    /// designator symbols, and similar).
    #[error("invalid mapping: {reason}")]
    InvalidMapping { reason: String },

    /// The wildcard pattern cannot be rewritten into a bounded conjunction
    /// of token lookups.
    #[error("pattern {pattern:?} has wildcards before its final character")]
    UnsupportedPattern { pattern: String },
}
