//! # hashsplit - chunk-token encoding for hash fields
//!
//! hashsplit makes exact, prefix, and trailing-wildcard matching over
//! fixed-format strings (content hashes, digests, opaque IDs) fast inside
//! an inverted-index engine. Near-random strings defeat native wildcard
//! evaluation, which walks the whole term dictionary; hashsplit instead
//! stores a bounded set of per-chunk tokens for each value and rewrites
//! queries into conjunctions of ordinary exact term lookups.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`mapping`] - Field configuration and the designator keyspace
//! - [`codec`] - Value partitioning and index-time token encoding
//! - [`query`] - Predicate classification, query rewriting, API builders
//! - [`index`] - In-memory inverted index for evaluating rewritten queries
//! - [`output`] - Terminal rendering for the CLI
//! - [`error`] - The typed error contract
//!
//! ## Quick Start
//!
//! ```ignore
//! use hashsplit::codec::ChunkCodec;
//! use hashsplit::index::MemoryIndex;
//! use hashsplit::mapping::FieldMapping;
//! use hashsplit::query::rewrite_pattern;
//!
//! let codec = ChunkCodec::new(FieldMapping::default()).unwrap();
//!
//! // Index time: store the returned tokens against the document.
//! let mut index = MemoryIndex::new();
//! index.add(1, &codec.encode("0011223344556677").unwrap());
//!
//! // Query time: rewrite a pattern and evaluate it as term lookups.
//! let expr = rewrite_pattern(&codec, "0011*").unwrap();
//! assert!(index.eval(&expr).contains(1));
//! ```
//!
//! ## Guarantees
//!
//! Encoding emits at most one token per character of the value, so index
//! growth is bounded by the corpus itself, and a rewritten query probes a
//! handful of terms regardless of dictionary size. The rewrite is sound
//! and complete for exact and prefix semantics: no false positives, no
//! missed documents. Patterns with wildcards anywhere but the final
//! position are rejected up front rather than silently degraded.

pub mod codec;
pub mod error;
pub mod index;
pub mod mapping;
pub mod output;
pub mod query;
