//! Save/load persistence for settings and the score table
//!
//! Features:
//! - Pretty JSON documents
//! - Backup rotation (tmp → save, old save → backup)
//! - Corruption recovery from the backup

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure reading or writing a store file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Path of the rotated backup for `path`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write `value` to `path`, keeping the previous file as a backup
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| StoreError::json(path, e))?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, json).map_err(|e| StoreError::io(&tmp, e))?;

    if path.exists() {
        let backup = backup_path(path);
        // Some platforms refuse to rename over an existing file
        let _ = fs::remove_file(&backup);
        fs::rename(path, &backup).map_err(|e| StoreError::io(&backup, e))?;
    }
    fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };
    serde_json::from_str(&text)
        .map(Some)
        .map_err(|e| StoreError::json(path, e))
}

/// Read `path`, falling back to its backup if the main file is corrupt.
/// `Ok(None)` means neither file exists.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    match read_json(path) {
        Err(StoreError::Json { .. }) | Ok(None) => {
            let backup = backup_path(path);
            match read_json(&backup) {
                Ok(Some(value)) => {
                    log::warn!("Recovered {} from backup", path.display());
                    Ok(Some(value))
                }
                // Report the primary failure, not the backup's
                _ => read_json(path),
            }
        }
        other => other,
    }
}

/// Load `path` or fall back to `T::default()`, logging why
pub fn load_or_default<T: DeserializeOwned + Default>(path: &Path, what: &str) -> T {
    match load_json(path) {
        Ok(Some(value)) => {
            log::info!("Loaded {what} from {}", path.display());
            value
        }
        Ok(None) => {
            log::info!("No saved {what}, using defaults");
            T::default()
        }
        Err(e) => {
            log::warn!("Failed to load {what}: {e}; using defaults");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::tempdir;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Doc {
        value: u32,
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let loaded: Option<Doc> = load_json(&dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("doc.json");
        save_json(&path, &Doc { value: 3 }).unwrap();
        assert_eq!(load_json::<Doc>(&path).unwrap(), Some(Doc { value: 3 }));
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn test_second_save_rotates_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.json");
        save_json(&path, &Doc { value: 1 }).unwrap();
        save_json(&path, &Doc { value: 2 }).unwrap();
        assert_eq!(load_json::<Doc>(&path).unwrap(), Some(Doc { value: 2 }));
        assert_eq!(
            load_json::<Doc>(&backup_path(&path)).unwrap(),
            Some(Doc { value: 1 })
        );
    }

    #[test]
    fn test_corrupt_file_recovers_from_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.json");
        save_json(&path, &Doc { value: 1 }).unwrap();
        save_json(&path, &Doc { value: 2 }).unwrap();
        fs::write(&path, "{ broken").unwrap();
        assert_eq!(load_json::<Doc>(&path).unwrap(), Some(Doc { value: 1 }));
    }

    #[test]
    fn test_corrupt_without_backup_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "{ broken").unwrap();
        assert!(matches!(
            load_json::<Doc>(&path),
            Err(StoreError::Json { .. })
        ));
        let doc: Doc = load_or_default(&path, "doc");
        assert_eq!(doc, Doc::default());
    }
}
