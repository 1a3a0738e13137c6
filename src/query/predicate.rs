use crate::error::ChunkFieldError;
use crate::mapping::FieldMapping;

/// Match predicate over the logical field value.
///
/// A closed set: the rewrite step is a total function over these cases,
/// with pattern shapes outside it rejected up front by [`from_pattern`].
///
/// [`from_pattern`]: MatchPredicate::from_pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchPredicate {
    /// The stored value equals the operand, content and length.
    Exact(String),
    /// The stored value starts with the operand; the suffix is free.
    Prefix(String),
}

impl MatchPredicate {
    /// Classify a wildcard pattern against the mapping's metacharacters.
    ///
    /// No metacharacters means an exact match. A single `wildcard_any` in
    /// final position means a prefix match over the stem. Every other
    /// shape (embedded or leading `wildcard_any`, any `wildcard_one`) is
    /// not expressible as a bounded conjunction of token lookups and is
    /// rejected; the caller chooses between the host engine's slow path
    /// and refusing the query.
    pub fn from_pattern(
        mapping: &FieldMapping,
        pattern: &str,
    ) -> Result<Self, ChunkFieldError> {
        let unsupported = || ChunkFieldError::UnsupportedPattern {
            pattern: pattern.to_string(),
        };

        // wildcard_one constrains length, which token conjunctions cannot.
        if pattern.chars().any(|c| c == mapping.wildcard_one) {
            return Err(unsupported());
        }

        match pattern
            .char_indices()
            .find(|&(_, c)| c == mapping.wildcard_any)
        {
            None => Ok(MatchPredicate::Exact(pattern.to_string())),
            Some((idx, c)) if idx + c.len_utf8() == pattern.len() => {
                Ok(MatchPredicate::Prefix(pattern[..idx].to_string()))
            }
            Some(_) => Err(unsupported()),
        }
    }

    /// The operand string.
    pub fn value(&self) -> &str {
        match self {
            MatchPredicate::Exact(v) | MatchPredicate::Prefix(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pattern_is_exact() {
        let mapping = FieldMapping::default();
        assert_eq!(
            MatchPredicate::from_pattern(&mapping, "0011").unwrap(),
            MatchPredicate::Exact("0011".to_string())
        );
    }

    #[test]
    fn test_trailing_wildcard_is_prefix() {
        let mapping = FieldMapping::default();
        assert_eq!(
            MatchPredicate::from_pattern(&mapping, "0011*").unwrap(),
            MatchPredicate::Prefix("0011".to_string())
        );
    }

    #[test]
    fn test_bare_wildcard_is_empty_prefix() {
        let mapping = FieldMapping::default();
        assert_eq!(
            MatchPredicate::from_pattern(&mapping, "*").unwrap(),
            MatchPredicate::Prefix(String::new())
        );
    }

    #[test]
    fn test_embedded_wildcard_rejected() {
        let mapping = FieldMapping::default();
        for pattern in ["ab*cd", "*abcd", "a*b*", "ab**"] {
            assert_eq!(
                MatchPredicate::from_pattern(&mapping, pattern),
                Err(ChunkFieldError::UnsupportedPattern {
                    pattern: pattern.to_string()
                }),
                "pattern {pattern:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_single_char_wildcard_rejected() {
        let mapping = FieldMapping::default();
        assert!(MatchPredicate::from_pattern(&mapping, "ab?d").is_err());
        assert!(MatchPredicate::from_pattern(&mapping, "abc?").is_err());
    }

    #[test]
    fn test_custom_metacharacters() {
        let mapping = FieldMapping {
            wildcard_any: '%',
            wildcard_one: '_',
            ..FieldMapping::default()
        };
        assert_eq!(
            MatchPredicate::from_pattern(&mapping, "ab%").unwrap(),
            MatchPredicate::Prefix("ab".to_string())
        );
        // '*' is an ordinary character under this mapping.
        assert_eq!(
            MatchPredicate::from_pattern(&mapping, "ab*").unwrap(),
            MatchPredicate::Exact("ab*".to_string())
        );
        assert!(MatchPredicate::from_pattern(&mapping, "a_b").is_err());
    }
}
