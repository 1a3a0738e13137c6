pub mod chunker;
pub mod encoder;

pub use chunker::{chunks, Chunk};
pub use encoder::{encode, ChunkCodec};
