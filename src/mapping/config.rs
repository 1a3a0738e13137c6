use crate::error::ChunkFieldError;
use crate::mapping::designators::DesignatorTable;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default designator alphabet: lowercase then uppercase ASCII letters.
pub const DEFAULT_DESIGNATOR_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn default_chunk_length() -> usize {
    4
}

fn default_designator_alphabet() -> String {
    DEFAULT_DESIGNATOR_ALPHABET.to_string()
}

fn default_wildcard_one() -> char {
    '?'
}

fn default_wildcard_any() -> char {
    '*'
}

/// Case folding applied to stored and queried values before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFolding {
    #[default]
    None,
    Lower,
    Upper,
}

impl CaseFolding {
    /// Fold a raw value.
    pub fn apply(self, value: &str) -> String {
        match self {
            CaseFolding::None => value.to_string(),
            CaseFolding::Lower => value.to_lowercase(),
            CaseFolding::Upper => value.to_uppercase(),
        }
    }
}

/// Per-field configuration for chunk-token encoding.
///
/// A mapping is fixed for the lifetime of a field's index: the token
/// generation rule depends on every parameter here, so changing one means
/// re-encoding all previously stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Number of characters per chunk.
    #[serde(default = "default_chunk_length")]
    pub chunk_length: usize,

    /// Accepted input characters; unrestricted when absent.
    #[serde(default)]
    pub alphabet: Option<String>,

    /// Ordered symbols used to tag chunk positions and prefix lengths.
    #[serde(default = "default_designator_alphabet")]
    pub designator_alphabet: String,

    /// Folding applied to stored and queried values before encoding.
    #[serde(default)]
    pub case_folding: CaseFolding,

    /// Maximum accepted value length. When absent, the largest length the
    /// designator alphabet can cover is used.
    #[serde(default)]
    pub max_length: Option<usize>,

    /// Single-character wildcard metacharacter. Never rewritable; patterns
    /// containing it are rejected rather than silently degraded.
    #[serde(default = "default_wildcard_one")]
    pub wildcard_one: char,

    /// Free-suffix wildcard metacharacter, rewritable in final position.
    #[serde(default = "default_wildcard_any")]
    pub wildcard_any: char,
}

impl Default for FieldMapping {
    fn default() -> Self {
        Self {
            chunk_length: default_chunk_length(),
            alphabet: None,
            designator_alphabet: default_designator_alphabet(),
            case_folding: CaseFolding::default(),
            max_length: None,
            wildcard_one: default_wildcard_one(),
            wildcard_any: default_wildcard_any(),
        }
    }
}

impl FieldMapping {
    /// Effective maximum value length: configured, or inferred as the
    /// largest length the designator alphabet can tag.
    pub fn effective_max_length(&self) -> usize {
        match self.max_length {
            Some(n) => n,
            None => {
                if self.chunk_length == 0 {
                    return 0;
                }
                // One designator row per prefix length plus the terminal row.
                let rows = self.chunk_length + 1;
                (self.designator_alphabet.chars().count() / rows) * self.chunk_length
            }
        }
    }

    /// Number of chunk positions reachable within the maximum length.
    pub fn max_chunks(&self) -> usize {
        if self.chunk_length == 0 {
            return 0;
        }
        self.effective_max_length().div_ceil(self.chunk_length)
    }

    /// Validate the mapping and build its designator table.
    ///
    /// Runs when the field is declared; a mapping that fails here never
    /// becomes usable, so exhaustion is not deferred to the first encode.
    pub fn validate(&self) -> Result<DesignatorTable, ChunkFieldError> {
        DesignatorTable::new(self)
    }

    /// Case-fold a value and check it against the alphabet and length
    /// limits. Shared by the write path and the query path.
    pub fn fold_and_check(&self, value: &str) -> Result<String, ChunkFieldError> {
        let folded = self.case_folding.apply(value);
        let len = folded.chars().count();
        let max = self.effective_max_length();
        if len > max {
            return Err(ChunkFieldError::ValueTooLong { len, max });
        }
        if let Some(alphabet) = &self.alphabet {
            if let Some(ch) = folded.chars().find(|&ch| !alphabet.contains(ch)) {
                return Err(ChunkFieldError::InvalidValue { ch });
            }
        }
        Ok(folded)
    }
}

/// A persisted mapping document: field name to mapping, stored as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingFile {
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldMapping>,
}

impl MappingFile {
    /// Load a mapping document from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read mapping file {}", path.display()))?;
        let file: MappingFile =
            serde_json::from_str(&content).context("failed to parse mapping file")?;
        Ok(file)
    }

    /// Look up the mapping for a field.
    pub fn field(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.get(name)
    }
}
