use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use loomgen_codegen::Namespace;
use loomgen_manifest::Manifest;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to loom.toml (defaults to ./loom.toml)
    #[arg(short, long, default_value = "loom.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.config).unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());

        let type_count = manifest.type_count();
        println!("  {} type{}:", type_count, plural(type_count));
        print_types(&manifest.namespace);

        if !manifest.tables.is_empty() {
            println!("\n  {} table{}:", manifest.tables.len(), plural(manifest.tables.len()));
            for table in &manifest.tables {
                println!(
                    "    {} ({} column{} over {})",
                    table.name,
                    table.columns.len(),
                    plural(table.columns.len()),
                    table.items_source
                );
            }
        }

        Ok(())
    }
}

fn print_types(root: &Namespace) {
    for (name, ns) in root.walk() {
        for ty in &ns.types {
            let partial = if ty.is_partial { ", partial" } else { "" };
            let emitted = ty.data_members().count();
            let skipped = ty.members.len() - emitted;
            println!("    {}.{} ({} member{}{})", name, ty.name, emitted, plural(emitted), partial);
            if skipped > 0 {
                println!("      {} method/event member{} not emitted", skipped, plural(skipped));
            }
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
