pub mod config;
pub mod designators;

pub use config::{CaseFolding, FieldMapping, MappingFile, DEFAULT_DESIGNATOR_ALPHABET};
pub use designators::{DesignatorTable, TokenKind};
