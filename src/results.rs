use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::QuizError;
use crate::model::ResultRecord;

/// Flat result history persisted as one JSON array.
///
/// Every append is a read-modify-write of the whole file. Two concurrent
/// writers can lose an update (last writer wins); the deployment is one user
/// per process, so this is an accepted limitation.
#[derive(Debug, Clone)]
pub struct ResultsStore {
    path: PathBuf,
}

impl ResultsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All recorded results in file order. A missing file is an empty
    /// history, not an error.
    pub fn list_all(&self) -> Result<Vec<ResultRecord>, QuizError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)
            .map_err(|e| QuizError::storage("read", &self.path, e))?;
        serde_json::from_str(&content).map_err(|e| QuizError::storage("read", &self.path, e))
    }

    /// Exact-match filter on the `user` field. Anonymous records only match
    /// an explicit "Invité" query.
    pub fn list_for_user(&self, user: &str) -> Result<Vec<ResultRecord>, QuizError> {
        let mut records = self.list_all()?;
        records.retain(|r| r.user == user);
        Ok(records)
    }

    /// Reads the current history, appends `record`, writes the full list
    /// back.
    pub fn append(&self, record: ResultRecord) -> Result<(), QuizError> {
        let mut records = self.list_all()?;
        records.push(record);

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| QuizError::storage("write", &self.path, e))?;
            }
        }
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| QuizError::storage("write", &self.path, e))?;
        atomic_write(&self.path, &json)
    }
}

fn atomic_write(path: &Path, content: &str) -> Result<(), QuizError> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| QuizError::storage("write", &tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| QuizError::storage("write", path, e))?;
    Ok(())
}

/// Per-user data directory, falling back to the working directory when the
/// platform offers none.
pub fn default_results_path() -> PathBuf {
    match ProjectDirs::from("", "", "chapquiz") {
        Some(dirs) => dirs.data_dir().join("results.json"),
        None => PathBuf::from("results.json"),
    }
}
