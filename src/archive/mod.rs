pub mod codec;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{error::ArchiveError, meals::model::Meal};
use codec::{Codec, MealCodec};

/// Single-record meal store.
#[async_trait]
pub trait MealArchive: Send + Sync {
    async fn save(&self, meal: &Meal) -> Result<(), ArchiveError>;
    /// `Ok(None)` when nothing has been archived yet.
    async fn load(&self) -> Result<Option<Meal>, ArchiveError>;
    async fn remove(&self) -> Result<(), ArchiveError>;
}

/// Archive file named `meals` inside the documents directory.
/// Writers hold `write_lock` across the temp write and the rename.
#[derive(Debug, Clone)]
pub struct FileArchive {
    path: PathBuf,
    codec: MealCodec,
    write_lock: Arc<Mutex<()>>,
}

impl FileArchive {
    pub const FILE_NAME: &'static str = "meals";

    pub fn new(documents_dir: impl AsRef<Path>) -> Self {
        Self {
            path: documents_dir.as_ref().join(Self::FILE_NAME),
            codec: MealCodec,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ArchiveError {
    let path = path.to_path_buf();
    move |source| ArchiveError::Io { path, source }
}

#[async_trait]
impl MealArchive for FileArchive {
    async fn save(&self, meal: &Meal) -> Result<(), ArchiveError> {
        let bytes = self.codec.encode(meal)?;
        let _guard = self.write_lock.lock().await;
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(io_err(dir))?;
        }
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(io_err(&tmp))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(io_err(&self.path))?;
        info!(path = %self.path().display(), bytes = bytes.len(), "meal archived");
        Ok(())
    }

    async fn load(&self) -> Result<Option<Meal>, ArchiveError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => self.codec.decode(&bytes).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path().display(), "no archived meal");
                Ok(None)
            }
            Err(e) => Err(io_err(&self.path)(e)),
        }
    }

    async fn remove(&self) -> Result<(), ArchiveError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                info!(path = %self.path().display(), "archived meal removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_err(&self.path)(e)),
        }
    }
}

/// Keeps the encoded record in memory. Used by tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct InMemoryArchive {
    slot: tokio::sync::Mutex<Option<Vec<u8>>>,
}

#[cfg(test)]
#[async_trait]
impl MealArchive for InMemoryArchive {
    async fn save(&self, meal: &Meal) -> Result<(), ArchiveError> {
        *self.slot.lock().await = Some(MealCodec.encode(meal)?);
        Ok(())
    }

    async fn load(&self) -> Result<Option<Meal>, ArchiveError> {
        match self.slot.lock().await.as_deref() {
            Some(bytes) => MealCodec.decode(bytes).map(Some),
            None => Ok(None),
        }
    }

    async fn remove(&self) -> Result<(), ArchiveError> {
        *self.slot.lock().await = None;
        Ok(())
    }
}
