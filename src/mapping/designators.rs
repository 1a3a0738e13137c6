use crate::error::ChunkFieldError;
use crate::mapping::config::FieldMapping;

/// What a designator symbol stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A prefix of `len` characters of the chunk at some position.
    Prefix { len: usize },
    /// The full content of a value's final chunk.
    Terminal,
}

/// Immutable assignment of designator symbols to chunk tokens.
///
/// Layout is slot-major over the designator alphabet: full-chunk prefixes
/// occupy the first `max_chunks` symbols in position order, each shorter
/// prefix length takes the next row, and the terminal row comes last
/// (`symbol = alphabet[slot * max_chunks + position]`). No two reachable
/// tokens share a symbol, so a term lookup can never match a token from a
/// different position or prefix length.
#[derive(Debug, Clone)]
pub struct DesignatorTable {
    symbols: Vec<char>,
    chunk_length: usize,
    max_chunks: usize,
}

impl DesignatorTable {
    /// Build the table for a mapping, validating the keyspace.
    pub fn new(mapping: &FieldMapping) -> Result<Self, ChunkFieldError> {
        if mapping.chunk_length == 0 {
            return Err(ChunkFieldError::InvalidMapping {
                reason: "chunk_length must be at least 1".to_string(),
            });
        }
        if mapping.max_length == Some(0) {
            return Err(ChunkFieldError::InvalidMapping {
                reason: "max_length must be at least 1".to_string(),
            });
        }
        let symbols: Vec<char> = mapping.designator_alphabet.chars().collect();
        let mut distinct = symbols.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() != symbols.len() {
            return Err(ChunkFieldError::InvalidMapping {
                reason: "designator alphabet contains duplicate symbols".to_string(),
            });
        }

        let max_chunks = mapping.max_chunks();
        let needed = (mapping.chunk_length + 1) * max_chunks.max(1);
        if symbols.len() < needed {
            return Err(ChunkFieldError::DesignatorExhaustion {
                needed,
                available: symbols.len(),
            });
        }

        Ok(Self {
            symbols,
            chunk_length: mapping.chunk_length,
            max_chunks: max_chunks.max(1),
        })
    }

    /// Symbol tagging a prefix of `len` characters of the chunk at `position`.
    #[inline]
    pub fn prefix(&self, position: usize, len: usize) -> char {
        debug_assert!(len >= 1 && len <= self.chunk_length);
        debug_assert!(position < self.max_chunks);
        self.symbols[(self.chunk_length - len) * self.max_chunks + position]
    }

    /// Symbol tagging the full content of a value's final chunk at `position`.
    #[inline]
    pub fn terminal(&self, position: usize) -> char {
        debug_assert!(position < self.max_chunks);
        self.symbols[self.chunk_length * self.max_chunks + position]
    }

    /// Reverse lookup: which token does a symbol stand for?
    pub fn describe(&self, symbol: char) -> Option<(usize, TokenKind)> {
        let assigned = (self.chunk_length + 1) * self.max_chunks;
        let idx = self.symbols[..assigned].iter().position(|&c| c == symbol)?;
        let slot = idx / self.max_chunks;
        let position = idx % self.max_chunks;
        let kind = if slot == self.chunk_length {
            TokenKind::Terminal
        } else {
            TokenKind::Prefix {
                len: self.chunk_length - slot,
            }
        };
        Some((position, kind))
    }

    pub fn chunk_length(&self) -> usize {
        self.chunk_length
    }

    pub fn max_chunks(&self) -> usize {
        self.max_chunks
    }
}
