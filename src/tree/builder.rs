//! TreeBuilder - scans a directory into an aggregated size tree

use std::fs::{self, DirEntry, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use super::classify::classify;
use super::config::{ScanConfig, ScanMode};
use super::error::ScanError;
use super::node::SizeTreeNode;

/// Builds a [`SizeTreeNode`] tree for a directory.
///
/// Only the root can fail. Anything that goes wrong below it (vanished
/// files, unreadable subdirectories, broken symlinks) is recorded as a
/// zero-sized error node and the scan carries on with the siblings.
pub struct TreeBuilder {
    config: ScanConfig,
}

impl TreeBuilder {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn build(&self, root: &Path) -> Result<SizeTreeNode, ScanError> {
        let meta = fs::metadata(root).map_err(|e| ScanError::from_io(root.to_path_buf(), e))?;
        if !meta.is_dir() {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        match self.config.mode {
            ScanMode::Sequential => build_dir(root, false),
            ScanMode::Concurrent => self.build_concurrent(root),
        }
    }

    fn build_concurrent(&self, root: &Path) -> Result<SizeTreeNode, ScanError> {
        if self.config.parallel_workers == 0 {
            return build_dir(root, true);
        }

        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.parallel_workers)
            .build()
        {
            Ok(pool) => pool.install(|| build_dir(root, true)),
            Err(e) => {
                // Fall back to rayon's global pool if custom pool creation fails
                warn!(workers = self.config.parallel_workers, error = %e, "falling back to global thread pool");
                build_dir(root, true)
            }
        }
    }
}

/// Scan one directory level and recurse into subdirectories.
///
/// With `parallel` set, every entry is a separate rayon task. `collect`
/// joins them in enumeration order, so the children come out the same
/// regardless of which task finishes first.
fn build_dir(path: &Path, parallel: bool) -> Result<SizeTreeNode, ScanError> {
    let entries = read_entries(path).map_err(|e| ScanError::from_io(path.to_path_buf(), e))?;

    let children: Vec<SizeTreeNode> = if parallel {
        entries.par_iter().map(|e| build_entry(e, true)).collect()
    } else {
        entries.iter().map(|e| build_entry(e, false)).collect()
    };

    Ok(SizeTreeNode::directory(path.to_path_buf(), children))
}

/// Read the direct entries of `path` in enumeration order.
fn read_entries(path: &Path) -> io::Result<Vec<DirEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path)? {
        match entry {
            Ok(e) => entries.push(e),
            Err(e) => warn!(dir = %path.display(), error = %e, "skipping unreadable directory entry"),
        }
    }
    Ok(entries)
}

fn build_entry(entry: &DirEntry, parallel: bool) -> SizeTreeNode {
    let path = entry.path();

    match entry.file_type() {
        Ok(ft) if ft.is_dir() => match build_dir(&path, parallel) {
            Ok(node) => node,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "directory scan failed");
                SizeTreeNode::error(path)
            }
        },
        Ok(_) => build_leaf(path),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot read file type");
            SizeTreeNode::error(path)
        }
    }
}

fn build_leaf(path: PathBuf) -> SizeTreeNode {
    match leaf_metadata(&path) {
        Ok(meta) => {
            let classification = classify(&path, &meta);
            SizeTreeNode::leaf(path, meta.len(), classification)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "cannot read metadata");
            SizeTreeNode::error(path)
        }
    }
}

/// The entry's own metadata. Symlinks keep their own size but must resolve,
/// so a dangling link is reported as an error.
fn leaf_metadata(path: &Path) -> io::Result<Metadata> {
    let meta = fs::symlink_metadata(path)?;
    if meta.file_type().is_symlink() {
        fs::metadata(path)?;
    }
    Ok(meta)
}
