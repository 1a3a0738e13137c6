use crate::codec::chunker::chunks;
use crate::codec::encoder::token;
use crate::codec::ChunkCodec;
use crate::error::ChunkFieldError;
use crate::query::predicate::MatchPredicate;

/// One per-chunk constraint of a rewritten predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenConstraint {
    /// The document must carry exactly this token.
    Term(String),
    /// The document must carry at least one of these tokens.
    AnyOf(Vec<String>),
}

impl TokenConstraint {
    /// Tokens this constraint may probe.
    pub fn terms(&self) -> &[String] {
        match self {
            TokenConstraint::Term(t) => std::slice::from_ref(t),
            TokenConstraint::AnyOf(ts) => ts,
        }
    }
}

/// A rewritten predicate: a conjunction of per-chunk token lookups that the
/// host engine evaluates as ordinary exact term probes, never as a scan
/// over the term dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenExpr {
    /// Unconstrained; matches every document. Produced for empty operands.
    All,
    /// Every constraint must hold. Positions not mentioned are free.
    And(Vec<TokenConstraint>),
}

impl TokenExpr {
    /// The per-chunk constraints, empty for [`TokenExpr::All`].
    pub fn constraints(&self) -> &[TokenConstraint] {
        match self {
            TokenExpr::All => &[],
            TokenExpr::And(cs) => cs,
        }
    }

    /// Total number of tokens the expression may probe.
    pub fn term_count(&self) -> usize {
        self.constraints().iter().map(|c| c.terms().len()).sum()
    }
}

/// Rewrite a predicate into chunk-token lookups.
///
/// Chunks wholly inside the operand pin the stored chunk with its plain
/// full-content token. The final constrained chunk is where exact and
/// prefix semantics part ways: an exact match demands the terminal token,
/// pinning the stored value's length as well as its content, while a
/// prefix match accepts either continuation past the boundary (plain
/// prefix token) or a value ending exactly on it (terminal token). Chunks
/// past the operand stay unconstrained, which is what makes a trailing
/// wildcard free.
pub fn rewrite(
    codec: &ChunkCodec,
    predicate: &MatchPredicate,
) -> Result<TokenExpr, ChunkFieldError> {
    let mapping = codec.mapping();
    let table = codec.table();
    let folded = mapping.fold_and_check(predicate.value())?;
    if folded.is_empty() {
        return Ok(TokenExpr::All);
    }

    let parts = chunks(&folded, mapping.chunk_length);
    let mut constraints = Vec::with_capacity(parts.len());
    for chunk in parts {
        let len = chunk.len();
        if !chunk.last {
            constraints.push(TokenConstraint::Term(token(
                table.prefix(chunk.position, len),
                chunk.content,
            )));
            continue;
        }
        match predicate {
            MatchPredicate::Exact(_) => {
                constraints.push(TokenConstraint::Term(token(
                    table.terminal(chunk.position),
                    chunk.content,
                )));
            }
            MatchPredicate::Prefix(_) => {
                constraints.push(TokenConstraint::AnyOf(vec![
                    token(table.prefix(chunk.position, len), chunk.content),
                    token(table.terminal(chunk.position), chunk.content),
                ]));
            }
        }
    }
    Ok(TokenExpr::And(constraints))
}

/// Classify a wildcard pattern and rewrite it in one step.
pub fn rewrite_pattern(codec: &ChunkCodec, pattern: &str) -> Result<TokenExpr, ChunkFieldError> {
    let predicate = MatchPredicate::from_pattern(codec.mapping(), pattern)?;
    rewrite(codec, &predicate)
}
