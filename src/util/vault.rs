use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use async_trait::async_trait;
use tracing::debug;

use crate::error::WriteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Modified,
}

#[async_trait]
pub trait Vault: Send + Sync {
    async fn ensure_folder(&self, path: &str) -> Result<(), WriteError>;

    async fn upsert_file(&self, path: &str, content: &str) -> Result<Upsert, WriteError>;
}

pub struct FsVault {
    root: PathBuf,
}

impl FsVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, WriteError> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes || path.is_empty() {
            return Err(WriteError::InvalidPath(path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl Vault for FsVault {
    async fn ensure_folder(&self, path: &str) -> Result<(), WriteError> {
        let full = self.resolve(path)?;

        match tokio::fs::create_dir_all(&full).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::AlreadyExists && full.is_dir() => Ok(()),
            Err(source) => Err(WriteError::Folder { path: full, source }),
        }
    }

    async fn upsert_file(&self, path: &str, content: &str) -> Result<Upsert, WriteError> {
        let full = self.resolve(path)?;
        let outcome = if tokio::fs::metadata(&full).await.is_ok_and(|m| m.is_file()) {
            Upsert::Modified
        } else {
            Upsert::Created
        };

        tokio::fs::write(&full, content)
            .await
            .map_err(|source| WriteError::File {
                path: full.clone(),
                source,
            })?;

        debug!("{:?} {}", outcome, full.display());
        Ok(outcome)
    }
}

#[cfg(test)]
pub mod memory {
    use std::{
        collections::{BTreeMap, BTreeSet},
        io,
        sync::Mutex,
    };

    use super::*;

    #[derive(Default)]
    pub struct MemoryVault {
        pub folders: Mutex<BTreeSet<String>>,
        pub files: Mutex<BTreeMap<String, String>>,
        pub fail_on: Option<String>,
    }

    impl MemoryVault {
        pub fn failing_on(path: &str) -> Self {
            Self {
                fail_on: Some(path.to_string()),
                ..Default::default()
            }
        }

        pub fn file(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(path).cloned()
        }

        pub fn paths(&self) -> Vec<String> {
            self.files.lock().unwrap().keys().cloned().collect()
        }
    }

    #[async_trait]
    impl Vault for MemoryVault {
        async fn ensure_folder(&self, path: &str) -> Result<(), WriteError> {
            self.folders.lock().unwrap().insert(path.to_string());
            Ok(())
        }

        async fn upsert_file(&self, path: &str, content: &str) -> Result<Upsert, WriteError> {
            if self.fail_on.as_deref() == Some(path) {
                return Err(WriteError::File {
                    path: path.into(),
                    source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
                });
            }

            let previous = self
                .files
                .lock()
                .unwrap()
                .insert(path.to_string(), content.to_string());
            Ok(match previous {
                Some(_) => Upsert::Modified,
                None => Upsert::Created,
            })
        }
    }
}
