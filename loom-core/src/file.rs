//! Persisting rendered units.

use std::path::{Path, PathBuf};

use crate::{Code, Error, Result};

/// Something rendered that lands in a single file under an output directory.
pub trait GeneratedFile {
    /// Where the file goes under `base`.
    fn path(&self, base: &Path) -> PathBuf;

    fn rules(&self) -> FileRules;

    fn render(&self) -> String;

    /// Write under `base`, honouring [`FileRules::overwrite`]. Missing parent
    /// directories are created.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let keep_existing = self.rules().overwrite == Overwrite::IfMissing;
        if keep_existing && path.exists() {
            return Ok(WriteResult::Skipped);
        }
        persist(&path, &self.render())?;
        Ok(WriteResult::Written)
    }
}

/// Main units are regenerated on every run; partial units belong to the user
/// once they exist.
impl GeneratedFile for Code {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    fn rules(&self) -> FileRules {
        let overwrite = if self.is_partial() {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };
        FileRules { overwrite }
    }

    fn render(&self) -> String {
        self.statement().to_string()
    }
}

fn persist(path: &Path, contents: &str) -> Result<()> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(io_err)?;
    }
    std::fs::write(path, contents).map_err(io_err)
}

/// Outcome of [`GeneratedFile::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    Written,
    /// Left alone: the file exists and may not be overwritten.
    Skipped,
}

#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

/// Policy for a file that is already on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Replace it.
    #[default]
    Always,
    /// Keep it; only write when nothing is there yet.
    IfMissing,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::Language;

    #[test]
    fn test_persist_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.txt");

        persist(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_main_code_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let code = Code::new("Main", Language::CSHARP, "class A {}", false).unwrap();
        fs::write(temp.path().join("Main.cs"), "old").unwrap();

        let result = code.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(temp.path().join("Main.cs")).unwrap(),
            "class A {}"
        );
    }

    #[test]
    fn test_partial_code_skips_existing() {
        let temp = TempDir::new().unwrap();
        let code = Code::new("Partial", Language::CSHARP, "generated", true).unwrap();

        assert_eq!(code.write(temp.path()).unwrap(), WriteResult::Written);

        let path = temp.path().join("Partial.partial.tmp.cs");
        fs::write(&path, "edited").unwrap();

        assert_eq!(code.write(temp.path()).unwrap(), WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "edited");
    }
}
