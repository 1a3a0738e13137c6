use crate::codec::chunker::chunks;
use crate::error::ChunkFieldError;
use crate::mapping::{DesignatorTable, FieldMapping};

/// Stateless encoder for one field's chunk tokens.
///
/// Owns the validated mapping and its designator table; encoding and
/// rewriting are pure functions over it, so one codec can serve any number
/// of documents and queries concurrently.
#[derive(Debug, Clone)]
pub struct ChunkCodec {
    mapping: FieldMapping,
    table: DesignatorTable,
}

impl ChunkCodec {
    /// Validate a mapping and build its codec. Fails with the mapping's
    /// configuration errors, blocking field creation.
    pub fn new(mapping: FieldMapping) -> Result<Self, ChunkFieldError> {
        let table = mapping.validate()?;
        Ok(Self { mapping, table })
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    pub fn table(&self) -> &DesignatorTable {
        &self.table
    }

    /// Encode a raw value into the tokens to store against a document.
    pub fn encode(&self, value: &str) -> Result<Vec<String>, ChunkFieldError> {
        encode(&self.mapping, &self.table, value)
    }
}

/// Encode a raw value into chunk tokens.
///
/// A chunk of length `L` yields exactly `L` tokens: one per prefix length,
/// where the longest one is tagged with the plain full-chunk designator for
/// inner chunks and the terminal designator for the value's final chunk.
/// Total output is therefore bounded by the value's own length.
pub fn encode(
    mapping: &FieldMapping,
    table: &DesignatorTable,
    value: &str,
) -> Result<Vec<String>, ChunkFieldError> {
    let folded = mapping.fold_and_check(value)?;
    let mut tokens = Vec::with_capacity(folded.chars().count());

    for chunk in chunks(&folded, mapping.chunk_length) {
        let len = chunk.len();
        let mut prefix_len = 0;
        for (idx, ch) in chunk.content.char_indices() {
            prefix_len += 1;
            let end = idx + ch.len_utf8();
            let designator = if chunk.last && prefix_len == len {
                table.terminal(chunk.position)
            } else {
                table.prefix(chunk.position, prefix_len)
            };
            tokens.push(token(designator, &chunk.content[..end]));
        }
    }

    Ok(tokens)
}

/// Assemble a token string: designator symbol followed by the literal prefix.
#[inline]
pub(crate) fn token(designator: char, content: &str) -> String {
    let mut out = String::with_capacity(designator.len_utf8() + content.len());
    out.push(designator);
    out.push_str(content);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowercase_codec() -> ChunkCodec {
        ChunkCodec::new(FieldMapping {
            designator_alphabet: "abcdefghijklmnopqrstuvwxyz".to_string(),
            max_length: Some(16),
            ..FieldMapping::default()
        })
        .unwrap()
    }

    #[test]
    fn test_encode_emits_one_token_per_character() {
        let codec = lowercase_codec();
        let tokens = codec.encode("0000111122223333").unwrap();
        assert_eq!(tokens.len(), 16);
    }

    #[test]
    fn test_full_chunk_tokens() {
        let codec = lowercase_codec();
        let tokens = codec.encode("0000111122223333").unwrap();
        // Inner chunks carry their full content under the leading symbols;
        // the final chunk carries it under its terminal designator instead.
        assert!(tokens.contains(&"a0000".to_string()));
        assert!(tokens.contains(&"b1111".to_string()));
        assert!(tokens.contains(&"c2222".to_string()));
        assert!(!tokens.contains(&"d3333".to_string()));
        let terminal = codec.table().terminal(3);
        assert!(tokens.contains(&token(terminal, "3333")));
    }

    #[test]
    fn test_short_final_chunk() {
        let codec = lowercase_codec();
        let tokens = codec.encode("000011").unwrap();
        assert_eq!(tokens.len(), 6);
        // Final chunk "11" at position 1: one prefix token, one terminal.
        assert!(tokens.contains(&token(codec.table().prefix(1, 1), "1")));
        assert!(tokens.contains(&token(codec.table().terminal(1), "11")));
        assert!(!tokens.contains(&token(codec.table().prefix(1, 2), "11")));
    }

    #[test]
    fn test_empty_value() {
        let codec = lowercase_codec();
        assert!(codec.encode("").unwrap().is_empty());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let codec = lowercase_codec();
        let first = codec.encode("0011223344").unwrap();
        let second = codec.encode("0011223344").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_case_folding_applies_before_encoding() {
        let codec = ChunkCodec::new(FieldMapping {
            case_folding: crate::mapping::CaseFolding::Lower,
            max_length: Some(16),
            ..FieldMapping::default()
        })
        .unwrap();
        assert_eq!(codec.encode("ABCD").unwrap(), codec.encode("abcd").unwrap());
    }

    #[test]
    fn test_too_long_value_rejected() {
        let codec = lowercase_codec();
        let err = codec.encode("00001111222233334").unwrap_err();
        assert_eq!(err, ChunkFieldError::ValueTooLong { len: 17, max: 16 });
    }

    #[test]
    fn test_alphabet_violation_rejected() {
        let codec = ChunkCodec::new(FieldMapping {
            alphabet: Some("0123456789abcdef".to_string()),
            max_length: Some(16),
            ..FieldMapping::default()
        })
        .unwrap();
        let err = codec.encode("00zz").unwrap_err();
        assert_eq!(err, ChunkFieldError::InvalidValue { ch: 'z' });
    }
}
