//! Unique output paths for concurrent render jobs

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out `<dir>/<stem>_<n>` base paths from an atomic counter
///
/// Safe to share between worker threads; no two calls return the same path.
#[derive(Debug)]
pub struct OutputAllocator {
    dir: PathBuf,
    stem: String,
    next: AtomicUsize,
}

impl OutputAllocator {
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
            next: AtomicUsize::new(0),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Next unused output base path (no extension)
    pub fn allocate(&self) -> PathBuf {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        self.dir.join(format!("{}_{}", self.stem, n))
    }

    /// Number of paths handed out so far
    pub fn allocated(&self) -> usize {
        self.next.load(Ordering::Relaxed)
    }
}

/// Ground-truth text path for an output base
pub fn gt_path(base: &Path) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(".gt.txt");
    PathBuf::from(name)
}
