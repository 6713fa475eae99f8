//! Configuration types for tree building

/// How directory levels are scheduled during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Depth-first on the calling thread.
    Sequential,
    /// One rayon task per directory entry, joined before aggregation.
    #[default]
    Concurrent,
}

/// Configuration for tree building behavior.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    pub mode: ScanMode,
    /// Number of worker threads for concurrent scans.
    /// 0 = rayon's global pool (one thread per core)
    /// N = dedicated pool with N threads
    pub parallel_workers: usize,
}

impl ScanConfig {
    pub fn sequential() -> Self {
        Self {
            mode: ScanMode::Sequential,
            parallel_workers: 1,
        }
    }

    /// Map a `--jobs` value: 1 scans sequentially, 0 uses the global pool,
    /// anything else sizes a dedicated pool.
    pub fn from_jobs(jobs: usize) -> Self {
        if jobs == 1 {
            Self::sequential()
        } else {
            Self {
                mode: ScanMode::Concurrent,
                parallel_workers: jobs,
            }
        }
    }
}
