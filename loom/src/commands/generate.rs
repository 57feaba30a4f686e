use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use loomgen_core::Codes;
use loomgen_manifest::Manifest;

use super::UnwrapOrExit;
use crate::ops::{collect_codes, write_codes};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to loom.toml (defaults to ./loom.toml)
    #[arg(short, long, default_value = "loom.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();
        let codes = collect_codes(&manifest).wrap_err("Failed to generate code")?;

        if self.dry_run {
            Self::run_preview(&codes);
            Ok(())
        } else {
            self.run_generation(&codes)
        }
    }

    fn run_generation(&self, codes: &Codes) -> Result<()> {
        let result = write_codes(codes, &self.output)
            .wrap_err_with(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Generated {} file(s) in {}", result.written.len(), self.output.display());
        for path in &result.written {
            println!("  + {}", path.display());
        }

        if !result.skipped.is_empty() {
            println!();
            println!("Kept existing partial units:");
            for path in &result.skipped {
                println!("  = {}", path.display());
            }
        }

        Ok(())
    }

    fn run_preview(codes: &Codes) {
        for code in codes {
            println!("── {} ({}) ──", code.file_name(), code.language());
            println!("{}", code.statement());
        }

        println!("── Summary ──");
        println!("{} files would be generated", codes.len());
    }
}
