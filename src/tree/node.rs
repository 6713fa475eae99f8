//! Size tree node types

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Classification of a scanned entry. Drives rendering color and whether the
/// renderer descends into the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Directory,
    Symlink,
    Executable,
    Image,
    Archive,
    Error,
    Plain,
}

/// One entry of a completed scan.
///
/// Nodes are immutable once built: a directory's `size_bytes` is the sum of
/// its direct children's sizes, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeTreeNode {
    path: PathBuf,
    size_bytes: u64,
    classification: Classification,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<SizeTreeNode>,
}

impl SizeTreeNode {
    /// Create a leaf node for a file, symlink or other non-directory entry.
    pub fn leaf(path: PathBuf, size_bytes: u64, classification: Classification) -> Self {
        Self {
            path,
            size_bytes,
            classification,
            children: Vec::new(),
        }
    }

    /// Create an error node: zero size, no children.
    pub fn error(path: PathBuf) -> Self {
        Self::leaf(path, 0, Classification::Error)
    }

    /// Create a directory node from its children, aggregating their sizes.
    ///
    /// A directory without children is classified `Plain`, matching how the
    /// tree has always been displayed: an empty directory shows as a plain
    /// zero-sized entry.
    pub fn directory(path: PathBuf, children: Vec<SizeTreeNode>) -> Self {
        let size_bytes = children.iter().map(|c| c.size_bytes).sum();
        let classification = if children.is_empty() {
            Classification::Plain
        } else {
            Classification::Directory
        };
        Self {
            path,
            size_bytes,
            classification,
            children,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn children(&self) -> &[SizeTreeNode] {
        &self.children
    }

    pub fn is_dir(&self) -> bool {
        self.classification == Classification::Directory
    }

    /// Last path component, or the whole path when it has none (`.`, `/`).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Pre-order iterator over this node and all descendants.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// Pre-order traversal, children visited in stored order.
pub struct Iter<'a> {
    stack: Vec<&'a SizeTreeNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a SizeTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
