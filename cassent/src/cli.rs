use std::path::PathBuf;

use cassent_codegen::Generation;
use cassent_schema::{Keyspace, SchemaProvider, SnapshotProvider};
use clap::Parser;
use eyre::{Context, Result};

use crate::language::Language;

/// Generate mapper-annotated entity sources from a keyspace schema snapshot.
#[derive(Parser)]
#[command(name = "cassent", version, about)]
pub struct Cli {
    /// Keyspace to generate entities for
    pub keyspace: String,

    /// Path to the keyspace snapshot file
    #[arg(short, long, default_value = "schema.toml")]
    pub schema: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Output package for generated entities
    #[arg(short, long, default_value = "")]
    pub package: String,

    /// Target language
    #[arg(short, long, value_enum, default_value = "kotlin")]
    pub language: Language,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Run entity generation
    pub fn run(&self) -> Result<()> {
        // The provider is acquired once here and held for the whole run.
        let provider = match SnapshotProvider::open(&self.schema) {
            Ok(provider) => provider,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        };

        let keyspace = match provider.keyspace(&self.keyspace) {
            Ok(keyspace) => keyspace,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        };

        let codegen = self.language.generator(&self.package);
        let generation = Generation::new(&keyspace, codegen.as_ref(), &self.package);

        if self.dry_run {
            self.run_preview(&generation)
        } else {
            self.run_generation(&generation, &keyspace)
        }
    }

    fn run_generation(&self, generation: &Generation, keyspace: &Keyspace) -> Result<()> {
        let report = generation
            .run(&self.dir)
            .wrap_err("Failed to generate entities")?;

        // Print header
        println!("Keyspace {}", keyspace.name);
        println!();

        // Print generation summary
        println!(
            "Generated {} entities ({} types, {} tables):",
            report.udts + report.tables,
            report.udts,
            report.tables
        );
        for path in &report.written {
            println!("  + {}", path.display());
        }

        Ok(())
    }

    fn run_preview(&self, generation: &Generation) -> Result<()> {
        let files = generation.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
