use super::{encode_users, DataStore};
use crate::error::{Result, UserStoreError};
use crate::model::User;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Store backed by a single JSON file.
pub struct FileStore {
    path: PathBuf,
    pretty: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file writes land on; a symlinked store resolves to its target.
    fn target_path(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }

    fn tmp_path(target: &Path) -> PathBuf {
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("store");
        dir.join(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        let bytes = fs::read(&self.path).map_err(|e| UserStoreError::file(&self.path, e))?;
        debug!(path = %self.path.display(), bytes = bytes.len(), "read store");
        Ok(bytes)
    }

    fn save_users(&mut self, users: &[User]) -> Result<()> {
        let content = encode_users(users, self.pretty)?;

        // Atomic write: the store is either the old array or the new one
        let target = self.target_path();
        let tmp_path = Self::tmp_path(&target);
        if let Err(e) = fs::write(&tmp_path, &content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(UserStoreError::file(&tmp_path, e));
        }
        if let Ok(meta) = fs::metadata(&target) {
            if let Err(e) = fs::set_permissions(&tmp_path, meta.permissions()) {
                let _ = fs::remove_file(&tmp_path);
                return Err(UserStoreError::file(&tmp_path, e));
            }
        }
        if let Err(e) = fs::rename(&tmp_path, &target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(UserStoreError::file(&target, e));
        }

        debug!(
            path = %self.path.display(),
            records = users.len(),
            bytes = content.len(),
            "rewrote store"
        );
        Ok(())
    }
}
