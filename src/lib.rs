//! Frisk - recursive directory sizes shown as a colorized tree

pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{RenderConfig, TreeRenderer, format_size, print_json};
pub use tree::{Classification, ScanConfig, ScanError, ScanMode, SizeTreeNode, TreeBuilder};
