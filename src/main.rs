use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use hashsplit::codec::ChunkCodec;
use hashsplit::index::MemoryIndex;
use hashsplit::mapping::{FieldMapping, MappingFile};
use hashsplit::output;
use hashsplit::query::rewrite_pattern;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hashsplit")]
#[command(about = "Chunk-token encoding for exact, prefix, and wildcard hash lookups")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the index tokens for a value
    Encode {
        /// Raw field value
        value: String,

        /// Mapping file (JSON); defaults to the built-in mapping
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// Field name within the mapping file
        #[arg(short, long, default_value = "hash")]
        field: String,
    },
    /// Rewrite an exact or wildcard pattern into token lookups
    Rewrite {
        /// Pattern; a trailing wildcard makes it a prefix match
        pattern: String,

        #[arg(short, long)]
        mapping: Option<PathBuf>,

        #[arg(short, long, default_value = "hash")]
        field: String,
    },
    /// Validate a mapping file and print its designator keyspace
    Check {
        /// Mapping file (JSON)
        mapping: PathBuf,

        /// Only check this field
        #[arg(short, long)]
        field: Option<String>,
    },
    /// Index values from a file and run a pattern against them
    Search {
        /// Pattern; a trailing wildcard makes it a prefix match
        pattern: String,

        /// File with one value per line
        #[arg(short, long)]
        docs: PathBuf,

        #[arg(short, long)]
        mapping: Option<PathBuf>,

        #[arg(short, long, default_value = "hash")]
        field: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;

    match cli.command {
        Commands::Encode {
            value,
            mapping,
            field,
        } => {
            let codec = load_codec(mapping.as_deref(), &field)?;
            let tokens = codec.encode(&value)?;
            output::print_tokens(&tokens, color)?;
        }
        Commands::Rewrite {
            pattern,
            mapping,
            field,
        } => {
            let codec = load_codec(mapping.as_deref(), &field)?;
            let expr = rewrite_pattern(&codec, &pattern)?;
            output::print_expr(&expr, color)?;
        }
        Commands::Check { mapping, field } => {
            check_mapping(&mapping, field.as_deref(), color)?;
        }
        Commands::Search {
            pattern,
            docs,
            mapping,
            field,
        } => {
            search(&pattern, &docs, mapping.as_deref(), &field, color)?;
        }
    }

    Ok(())
}

/// Load a field's mapping and build its codec, or fall back to the default
/// mapping when no file is given.
fn load_codec(mapping_path: Option<&Path>, field: &str) -> Result<ChunkCodec> {
    let mapping = match mapping_path {
        Some(path) => {
            let file = MappingFile::load(path)?;
            file.field(field)
                .with_context(|| format!("mapping file has no field {field:?}"))?
                .clone()
        }
        None => FieldMapping::default(),
    };
    ChunkCodec::new(mapping)
        .with_context(|| format!("mapping for field {field:?} is not usable"))
}

fn check_mapping(path: &Path, only_field: Option<&str>, color: bool) -> Result<()> {
    let file = MappingFile::load(path)?;
    if file.fields.is_empty() {
        bail!("mapping file declares no fields");
    }
    if let Some(f) = only_field {
        if file.field(f).is_none() {
            bail!("mapping file has no field {f:?}");
        }
    }

    for (name, mapping) in &file.fields {
        if only_field.is_some_and(|f| f != name) {
            continue;
        }
        let table = mapping
            .validate()
            .with_context(|| format!("mapping for field {name:?} is not usable"))?;
        println!("field {name}: ok");
        output::print_keyspace(&table, color)?;
    }
    Ok(())
}

fn search(
    pattern: &str,
    docs: &Path,
    mapping_path: Option<&Path>,
    field: &str,
    color: bool,
) -> Result<()> {
    let codec = load_codec(mapping_path, field)?;
    let content = fs::read_to_string(docs)
        .with_context(|| format!("failed to read values from {}", docs.display()))?;

    let mut index = MemoryIndex::new();
    let mut values = Vec::new();
    for line in content.lines() {
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        match codec.encode(value) {
            Ok(tokens) => {
                index.add(values.len() as u32, &tokens);
                values.push(value.to_string());
            }
            Err(err) => eprintln!("skipping {value:?}: {err}"),
        }
    }

    let expr = rewrite_pattern(&codec, pattern)?;
    output::print_expr(&expr, color)?;

    let hits = index.eval(&expr);
    eprintln!(
        "{} of {} values matched ({} distinct terms indexed)",
        hits.len(),
        index.doc_count(),
        index.term_count()
    );
    for doc_id in hits {
        println!("{}", values[doc_id as usize]);
    }
    Ok(())
}
