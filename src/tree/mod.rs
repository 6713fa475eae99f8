//! Directory scanning into a size tree
//!
//! `TreeBuilder` walks a directory and returns a `SizeTreeNode` whose
//! directory sizes are aggregated bottom-up. It supports two modes:
//!
//! - `ScanMode::Sequential`: depth-first on the calling thread
//! - `ScanMode::Concurrent`: fans out one rayon task per entry and joins
//!   each directory level before aggregating

mod builder;
mod classify;
mod config;
mod error;
mod node;

pub use builder::TreeBuilder;
pub use classify::{ARCHIVE_SUFFIXES, IMAGE_SUFFIXES, classify};
pub use config::{ScanConfig, ScanMode};
pub use error::ScanError;
pub use node::{Classification, Iter, SizeTreeNode};
