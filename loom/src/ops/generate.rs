use std::path::{Path, PathBuf};

use loomgen_codegen_csharp::{CodeDomCodeGenProvider, CodeGenProvider, GenArgs};
use loomgen_core::{Code, Codes, GeneratedFile, Language, Result, WriteResult};
use loomgen_manifest::Manifest;

const HEADER: &str = "<auto-generated>\nGenerated by loom. Changes to this file may be overwritten.\n</auto-generated>";

/// Files touched by a generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub written: Vec<PathBuf>,
    /// Partial units left alone because they already exist.
    pub skipped: Vec<PathBuf>,
}

/// Render every unit the manifest describes: the C# main and partial units,
/// then one Razor unit per table.
pub fn collect_codes(manifest: &Manifest) -> Result<Codes> {
    let args = GenArgs::default().header(HEADER);
    let mut codes = CodeDomCodeGenProvider::new().generate_behind_code(&manifest.namespace, &args)?;

    for table in &manifest.tables {
        codes.push(Code::new(&table.name, Language::BLAZOR, table.render()?, false)?);
    }
    Ok(codes)
}

/// Write units under `output`, keeping existing partial units.
pub fn write_codes(codes: &Codes, output: &Path) -> Result<GenerateResult> {
    let mut result = GenerateResult::default();
    for code in codes {
        let path = code.path(output);
        match code.write(output)? {
            WriteResult::Written => {
                tracing::debug!(path = %path.display(), "wrote unit");
                result.written.push(path);
            }
            WriteResult::Skipped => {
                tracing::debug!(path = %path.display(), "kept existing unit");
                result.skipped.push(path);
            }
        }
    }
    Ok(result)
}
