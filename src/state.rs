//! Persisted selection state, one identifier per line.
//!
//! State is read once at session start and written once at commit;
//! concurrent sessions on the same category are unsupported.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::AppError;
use crate::models::Category;

/// Reads and writes `{category}.conf` files in a workspace directory.
pub struct SelectionStore {
    dir: PathBuf,
}

impl SelectionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the state file for a category.
    pub fn path(&self, category: Category) -> PathBuf {
        self.dir.join(category.state_file())
    }

    /// The persisted identifiers, in file order. A missing file is the
    /// first-run state and yields an empty list.
    pub fn read(&self, category: Category) -> Result<Vec<String>, AppError> {
        let path = self.path(category);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(AppError::StateRead { path, source }),
        };
        Ok(content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Replace the category's state file with the given identifiers,
    /// one per line in caller order. The write goes through a temporary
    /// file renamed into place, so a failure never truncates prior state.
    pub fn write(&self, category: Category, identifiers: &[String]) -> Result<(), AppError> {
        let path = self.path(category);
        let to_error = |source: std::io::Error| AppError::StateWrite {
            path: path.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(to_error)?;
        for identifier in identifiers {
            writeln!(tmp, "{identifier}").map_err(to_error)?;
        }
        tmp.persist(&path).map_err(|err| to_error(err.error))?;
        Ok(())
    }
}
