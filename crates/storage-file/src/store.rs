use log::{debug, info};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::{OnceCell, RwLock};

use balancebook_core::errors::{Error, Result};

use crate::document::StoreDocument;
use crate::errors::FileStorageError;

const TMP_SUFFIX: &str = "tmp";

/// Owned handle on the document, optionally backed by a JSON file.
///
/// Nothing is read from disk until the first operation. Every write is applied
/// to a copy of the document, persisted, and only then swapped in, so a failed
/// write leaves both the file and the in-memory state as they were. Disk I/O
/// runs on the blocking thread pool.
pub struct FileStore {
    path: Option<PathBuf>,
    state: OnceCell<RwLock<StoreDocument>>,
}

impl FileStore {
    /// A store that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: OnceCell::new(),
        }
    }

    /// A store persisted to `path`. A missing file is treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            state: OnceCell::new(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub async fn read<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&StoreDocument) -> T,
    {
        let state = self.state().await?;
        let document = state.read().await;
        Ok(f(&document))
    }

    pub async fn write<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut StoreDocument) -> Result<T>,
    {
        let state = self.state().await?;
        let mut document = state.write().await;

        let mut draft = document.clone();
        let value = f(&mut draft)?;
        if let Some(path) = &self.path {
            let data = serde_json::to_string_pretty(&draft).map_err(FileStorageError::from)?;
            let path = path.clone();
            tokio::task::spawn_blocking(move || persist(&path, &data))
                .await
                .map_err(FileStorageError::from)??;
        }
        *document = draft;
        Ok(value)
    }

    async fn state(&self) -> Result<&RwLock<StoreDocument>> {
        self.state
            .get_or_try_init(|| async {
                let document = match &self.path {
                    Some(path) => {
                        let path = path.clone();
                        tokio::task::spawn_blocking(move || load(&path))
                            .await
                            .map_err(FileStorageError::from)??
                    }
                    None => StoreDocument::default(),
                };
                Ok::<_, Error>(RwLock::new(document))
            })
            .await
    }
}

fn load(path: &Path) -> Result<StoreDocument> {
    if !path.exists() {
        info!("No data file at {}, starting empty", path.display());
        return Ok(StoreDocument::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    if raw.trim().is_empty() {
        return Ok(StoreDocument::default());
    }
    let document: StoreDocument =
        serde_json::from_str(&raw).map_err(|source| FileStorageError::Corrupt {
            path: path.display().to_string(),
            source,
        })?;
    info!(
        "Loaded {} accounts, {} snapshots and {} notes from {}",
        document.accounts.len(),
        document.weekly_records.len(),
        document.weekly_notes.len(),
        path.display()
    );
    Ok(document)
}

fn persist(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }
    }

    let tmp = tmp_path(path);
    write_file(&tmp, data).map_err(|source| io_error(&tmp, source))?;
    fs::rename(&tmp, path).map_err(|source| io_error(path, source))?;
    debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

fn write_file(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.sync_all()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn io_error(path: &Path, source: std::io::Error) -> FileStorageError {
    FileStorageError::Io {
        path: path.display().to_string(),
        source,
    }
}
