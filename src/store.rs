#![cfg(feature = "web")]

use log::error;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::error::DataSourceError;
use crate::loader::load_students;
use crate::record::StudentTable;

/// The student table for one running server, read on first use and shared after.
///
/// A failed read leaves the store empty so the next request tries again.
pub struct StudentStore {
    path: PathBuf,
    table: OnceCell<Arc<StudentTable>>,
}

impl StudentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StudentStore {
            path: path.into(),
            table: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get(&self) -> Result<Arc<StudentTable>, DataSourceError> {
        self.table
            .get_or_try_init(|| async move {
                let path = self.path.clone();
                let loaded = tokio::task::spawn_blocking(move || load_students(&path))
                    .await
                    .map_err(|e| DataSourceError::Io {
                        path: self.path.clone(),
                        source: std::io::Error::other(e),
                    })?;
                loaded.map(Arc::new).inspect_err(|e| {
                    error!("could not load {}: {}", self.path.display(), e);
                })
            })
            .await
            .cloned()
    }
}
