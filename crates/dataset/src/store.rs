use crate::error::DatasetError;
use crate::loader;
use core_types::Dataset;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Identity of one loaded snapshot: the canonical path plus the file's
/// modification time. A rewritten file gets a new key and loads fresh.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SnapshotKey {
    path: PathBuf,
    modified: SystemTime,
}

/// Explicit memoization layer for loaded datasets.
///
/// Replaces the hidden process-wide cache of the original product with an
/// owned store: the first access for a given file loads and caches, every
/// repeated access returns the same `Arc` snapshot. There is no file
/// watching; a snapshot lives until `clear` or process exit.
#[derive(Debug, Default)]
pub struct DatasetStore {
    snapshots: HashMap<SnapshotKey, Arc<Dataset>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached snapshot for `path`, loading it on first access.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Dataset>, DatasetError> {
        let canonical = path.canonicalize()?;
        let modified = std::fs::metadata(&canonical)?.modified()?;
        let key = SnapshotKey { path: canonical, modified };

        if let Some(snapshot) = self.snapshots.get(&key) {
            tracing::debug!(path = %key.path.display(), "dataset cache hit");
            return Ok(Arc::clone(snapshot));
        }

        tracing::info!(path = %key.path.display(), "loading dataset");
        let snapshot = Arc::new(loader::load_dataset(&key.path)?);
        self.snapshots.insert(key, Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drops every cached snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_sales_csv(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("meridian-{}-{}.csv", name, std::process::id()));
        fs::write(
            &path,
            "InvoiceNo,InvoiceDate,ValueNp,ClientType,DistributorName,ProductName\n\
             INV-1,2024-01-05,120.50,Retail,Acme,Widget\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn repeated_loads_return_the_same_snapshot() {
        let path = write_sales_csv("store-hit");
        let mut store = DatasetStore::new();

        let first = store.load(&path).unwrap();
        let second = store.load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn clear_forgets_cached_snapshots() {
        let path = write_sales_csv("store-clear");
        let mut store = DatasetStore::new();

        let first = store.load(&path).unwrap();
        store.clear();
        let second = store.load(&path).unwrap();
        fs::remove_file(&path).ok();

        // Same content, but a fresh snapshot instance.
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut store = DatasetStore::new();
        let err = store.load(Path::new("/nonexistent/meridian-sales.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
