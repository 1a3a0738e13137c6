/// One chunk of a partitioned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// 0-based index among the partition, left to right.
    pub position: usize,
    /// `chunk_length` characters, except possibly for the final chunk.
    pub content: &'a str,
    /// Whether this is the value's final chunk.
    pub last: bool,
}

impl Chunk<'_> {
    /// Chunk length in characters.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Partition a value into consecutive, non-overlapping chunks of
/// `chunk_length` characters. The final chunk may be shorter; an empty
/// value yields no chunks.
pub fn chunks(value: &str, chunk_length: usize) -> Vec<Chunk<'_>> {
    debug_assert!(chunk_length > 0);
    if value.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(value.len().div_ceil(chunk_length));
    let mut start = 0;
    let mut position = 0;
    let mut taken = 0;
    for (idx, _) in value.char_indices() {
        if taken == chunk_length {
            out.push(Chunk {
                position,
                content: &value[start..idx],
                last: false,
            });
            position += 1;
            start = idx;
            taken = 0;
        }
        taken += 1;
    }
    out.push(Chunk {
        position,
        content: &value[start..],
        last: true,
    });
    out
}
