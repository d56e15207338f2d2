use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tempfile::NamedTempFile;

use crate::repository::traits::KeyValueStore;

const DEFAULT_DIR_NAME: &str = ".wordday";
const BLOB_EXTENSION: &str = "json";

/// One file per key under `base_dir`.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        fs::create_dir_all(&path)
            .with_context(|| format!("could not create data directory {}", path.display()))?;

        Ok(FileKeyValueStore { base_dir: path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn blob_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(anyhow!("Invalid store key: '{}'", key));
        }
        Ok(self.base_dir.join(format!("{}.{}", key, BLOB_EXTENSION)))
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(DEFAULT_DIR_NAME))
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.blob_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("could not read {}", path.display())),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.blob_path(key)?;

        // Uniquely named sibling, removed on drop unless persisted.
        let mut file = NamedTempFile::new_in(&self.base_dir).with_context(|| {
            format!("could not create temp file in {}", self.base_dir.display())
        })?;
        file.write_all(value)?;
        file.as_file().sync_all()?;

        file.persist(&path)
            .map_err(|e| e.error)
            .with_context(|| format!("could not replace {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("could not remove {}", path.display())),
        }
    }
}
