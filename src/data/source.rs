use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::error::DataError;
use super::loader::load_file;
use super::model::Dataset;
use super::normalize::UnknownGender;

/// Owned handle to the dataset file that reads it at most once.
///
/// The first successful [`LazyDataset::get`] parses the file and keeps the
/// result; every later call hands back the same `Arc` without touching the
/// filesystem. Concurrent first callers block on the cell, so the parse
/// still runs exactly once. A failed load is not stored.
#[derive(Debug)]
pub struct LazyDataset {
    path: PathBuf,
    unknown_gender: UnknownGender,
    cell: OnceCell<Arc<Dataset>>,
}

impl LazyDataset {
    pub fn new(path: impl Into<PathBuf>, unknown_gender: UnknownGender) -> Self {
        Self {
            path: path.into(),
            unknown_gender,
            cell: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self) -> Result<&Arc<Dataset>, DataError> {
        self.cell
            .get_or_try_init(|| load_file(&self.path, self.unknown_gender).map(Arc::new))
    }

    /// Whether the dataset has already been loaded.
    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    const CSV: &str = "gender,intensity,activity_type,duration_minutes,calories_burned\n\
                       F,Low,Yoga,30,120\nM,High,Running,10,80\n";

    #[test]
    fn second_get_does_not_reread_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitness.csv");
        std::fs::write(&path, CSV).unwrap();

        let lazy = LazyDataset::new(&path, UnknownGender::Reject);
        assert!(!lazy.is_loaded());
        let first = Arc::clone(lazy.get().unwrap());
        assert!(lazy.is_loaded());

        std::fs::remove_file(&path).unwrap();
        let second = lazy.get().unwrap();
        assert!(Arc::ptr_eq(&first, second));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitness.csv");
        let lazy = LazyDataset::new(&path, UnknownGender::Reject);

        assert!(matches!(lazy.get(), Err(DataError::Load { .. })));
        assert!(!lazy.is_loaded());

        std::fs::write(&path, CSV).unwrap();
        assert_eq!(lazy.get().unwrap().len(), 2);
    }

    #[test]
    fn concurrent_first_access_yields_one_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fitness.csv");
        std::fs::write(&path, CSV).unwrap();
        let lazy = LazyDataset::new(&path, UnknownGender::Reject);

        let loaded: Vec<Arc<Dataset>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| Arc::clone(lazy.get().unwrap())))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for ds in &loaded[1..] {
            assert!(Arc::ptr_eq(&loaded[0], ds));
        }
    }
}
