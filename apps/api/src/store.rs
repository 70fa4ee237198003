use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Background I/O task failed: {0}")]
    Task(String),
}

/// Flat-file JSON store. One document per dataset under a base directory.
///
/// Reads treat an absent file as "no data"; writes replace the whole file
/// through a temporary sibling so readers never observe a partial document.
#[derive(Debug, Clone)]
pub struct DataStore {
    base_dir: PathBuf,
}

impl DataStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn path_of(&self, file: &str) -> PathBuf {
        self.base_dir.join(file)
    }

    pub fn exists(&self, file: &str) -> bool {
        self.path_of(file).is_file()
    }

    /// Loads `file` as `T`, or `T::default()` when the file is absent.
    pub fn load<T>(&self, file: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        Ok(self.load_optional(file)?.unwrap_or_default())
    }

    /// Loads `file` as `T`, or `None` when the file is absent.
    pub fn load_optional<T>(&self, file: &str) -> Result<Option<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let path = self.path_of(file);
        let handle = match fs::File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} not found, treating as empty", path.display());
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        serde_json::from_reader(BufReader::new(handle))
            .map(Some)
            .map_err(|source| StoreError::Json { path, source })
    }

    /// Raw JSON document, `None` when absent. Used by pass-through endpoints.
    pub fn load_value(&self, file: &str) -> Result<Option<Value>, StoreError> {
        self.load_optional(file)
    }

    /// Pretty-prints `data` into `file`, replacing any previous content atomically.
    pub fn save<T>(&self, file: &str, data: &T) -> Result<PathBuf, StoreError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path_of(file);
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.base_dir).map_err(io_err)?;
        let tmp = tempfile::NamedTempFile::new_in(&self.base_dir).map_err(io_err)?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, data).map_err(|source| {
                StoreError::Json {
                    path: path.clone(),
                    source,
                }
            })?;
            writer.flush().map_err(io_err)?;
        }
        tmp.persist(&path).map_err(|e| io_err(e.error))?;

        debug!("wrote {}", path.display());
        Ok(path)
    }

    pub async fn load_async<T>(&self, file: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default + Send + 'static,
    {
        let store = self.clone();
        let file = file.to_string();
        spawn_io(move || store.load(&file)).await
    }

    pub async fn load_value_async(&self, file: &str) -> Result<Option<Value>, StoreError> {
        let store = self.clone();
        let file = file.to_string();
        spawn_io(move || store.load_value(&file)).await
    }
}

/// Runs blocking file I/O off the async executor.
pub async fn spawn_io<T, F>(task: F) -> Result<T, StoreError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
}
