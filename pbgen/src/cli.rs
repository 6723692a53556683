//! Command-line interface.

use crate::output::write_files;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use pbgen_codegen::{Generator, GeneratorConfig, Templates};
use std::path::PathBuf;

/// Top-level command line.
#[derive(Debug, Parser)]
#[command(
    name = "pb-gen",
    version,
    about = "Generate typed Go record accessors from PocketBase collections"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate Go files from a PocketBase database or collections export
    Generate(GenerateArgs),
}

/// Arguments of the `generate` subcommand.
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the PocketBase SQLite database; takes precedence over --schema
    #[arg(short, long, env = "PB_GEN_DB")]
    pub db: Option<PathBuf>,

    /// Path to the PocketBase collections export
    #[arg(short, long, env = "PB_GEN_SCHEMA", default_value = "./pb_schema.json")]
    pub schema: PathBuf,

    /// Directory the generated files are written to
    #[arg(short, long, env = "PB_GEN_OUTPUT_DIR", default_value = "collections")]
    pub output_dir: PathBuf,

    /// Go package name of the generated files
    #[arg(short, long, env = "PB_GEN_PACKAGE", default_value = "collections")]
    pub package_name: String,

    /// Directory with template overrides
    #[arg(long, env = "PB_GEN_TEMPLATES")]
    pub templates: Option<PathBuf>,
}

impl Cli {
    /// Runs the selected subcommand.
    ///
    /// # Errors
    /// Returns an error if any step of the subcommand fails.
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Generate(args) => args.run(self.verbose).map(|_| ()),
        }
    }
}

impl GenerateArgs {
    /// Reads the schema, generates every file and writes them out.
    ///
    /// Nothing is written unless generation succeeds for every collection.
    ///
    /// # Errors
    /// Returns an error if reading, generation, or writing fails.
    pub fn run(&self, verbose: bool) -> anyhow::Result<Vec<PathBuf>> {
        let (schema, source) = match &self.db {
            Some(db) => (
                pbgen_schema::read_database(db)
                    .with_context(|| format!("failed to read database {}", db.display()))?,
                db,
            ),
            None => (
                pbgen_schema::read_schema(&self.schema)
                    .with_context(|| format!("failed to read schema {}", self.schema.display()))?,
                &self.schema,
            ),
        };

        tracing::info!(
            "found {} collections in {}",
            schema.collections.len(),
            source.display()
        );
        if verbose {
            for collection in &schema.collections {
                tracing::debug!(
                    "collection '{}' ({:?}, {} fields)",
                    collection.name,
                    collection.collection_type,
                    collection.fields.len()
                );
            }
        }

        let templates = match &self.templates {
            Some(dir) => Templates::from_dir(dir)
                .with_context(|| format!("failed to load templates from {}", dir.display()))?,
            None => Templates::default(),
        };
        let config = GeneratorConfig::new()
            .package_name(&self.package_name)
            .templates(templates);

        let files = Generator::new(config)?
            .generate(&schema)
            .context("code generation failed")?;

        write_files(&self.output_dir, &files)
    }
}
