//! Tests driving the crate through persisted mapping files, the way a host
//! engine declares chunked fields.

use hashsplit::codec::ChunkCodec;
use hashsplit::index::MemoryIndex;
use hashsplit::mapping::{MappingFile, TokenKind};
use hashsplit::query::{rewrite, MatchPredicate};
use std::path::PathBuf;

fn fixture(name: &str) -> MappingFile {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    MappingFile::load(&path).unwrap()
}

fn codec_from(name: &str, field: &str) -> ChunkCodec {
    let file = fixture(name);
    ChunkCodec::new(file.field(field).unwrap().clone()).unwrap()
}

#[test]
fn basic_mapping_round_trips_an_exact_query() {
    let codec = codec_from("basic-mapping.json", "hash");

    let mut index = MemoryIndex::new();
    index.add(0, &codec.encode("0011223344556677").unwrap());

    let hit = rewrite(
        &codec,
        &MatchPredicate::Exact("0011223344556677".to_string()),
    )
    .unwrap();
    assert_eq!(index.eval(&hit).len(), 1);

    let miss = rewrite(
        &codec,
        &MatchPredicate::Exact("0011223344556688".to_string()),
    )
    .unwrap();
    assert!(index.eval(&miss).is_empty());
}

#[test]
fn basic_mapping_enforces_its_alphabet() {
    let codec = codec_from("basic-mapping.json", "hash");
    assert!(codec.encode("00112233445566gg").is_err());
}

#[test]
fn lowercase_mapping_assigns_expected_term_strings() {
    let codec = codec_from("chunklength4-lowercase-mapping.json", "hash");

    let mut index = MemoryIndex::new();
    index.add(0, &codec.encode("0000111122223333").unwrap());

    // Second chunk's full value sits under the second alphabet symbol.
    assert_eq!(index.lookup("b1111").len(), 1);
    // Full-chunk designator with truncated content is a different token.
    assert!(index.lookup("a000").is_empty());
    // Unassigned symbol.
    assert!(index.lookup("z9999").is_empty());
}

#[test]
fn lowercase_mapping_keyspace_is_fully_assigned() {
    let file = fixture("chunklength4-lowercase-mapping.json");
    let table = file.field("hash").unwrap().validate().unwrap();

    assert_eq!(table.max_chunks(), 4);
    // 4 prefix rows plus the terminal row over 4 positions.
    for (idx, symbol) in ('a'..='t').enumerate() {
        let (position, kind) = table.describe(symbol).unwrap();
        assert_eq!(position, idx % 4);
        match kind {
            TokenKind::Prefix { len } => assert_eq!(len, 4 - idx / 4),
            TokenKind::Terminal => assert_eq!(idx / 4, 4),
        }
    }
    assert!(table.describe('u').is_none());
}

#[test]
fn lowercase_mapping_folds_queries() {
    let codec = codec_from("chunklength4-lowercase-mapping.json", "hash");

    let mut index = MemoryIndex::new();
    index.add(0, &codec.encode("AAAABBBB").unwrap());

    let hit = rewrite(&codec, &MatchPredicate::Exact("aaaabbbb".to_string())).unwrap();
    assert_eq!(index.eval(&hit).len(), 1);
}
