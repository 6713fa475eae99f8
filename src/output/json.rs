//! JSON output formatting

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::tree::{Classification, SizeTreeNode};

use super::config::RenderConfig;
use super::size::format_size;

/// Serializable view of the printed part of a tree.
#[derive(Debug, Serialize)]
pub struct JsonNode<'a> {
    pub name: String,
    pub path: &'a Path,
    pub classification: Classification,
    pub size_bytes: u64,
    pub size_human: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonNode<'a>>,
}

impl<'a> JsonNode<'a> {
    /// Build the view with the same ignore-list and depth limit as the
    /// console renderer. Returns `None` when the root itself is ignored.
    pub fn from_tree(node: &'a SizeTreeNode, config: &RenderConfig) -> Option<Self> {
        Self::build(node, config, config.max_depth)
    }

    fn build(node: &'a SizeTreeNode, config: &RenderConfig, remaining: Option<usize>) -> Option<Self> {
        let name = node.name();
        if config.is_ignored(&name) {
            return None;
        }

        let children = if node.is_dir() && remaining != Some(0) {
            node.children()
                .iter()
                .filter_map(|c| Self::build(c, config, remaining.map(|d| d - 1)))
                .collect()
        } else {
            Vec::new()
        };

        Some(Self {
            name,
            path: node.path(),
            classification: node.classification(),
            size_bytes: node.size_bytes(),
            size_human: format_size(node.size_bytes()),
            children,
        })
    }
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &SizeTreeNode, config: &RenderConfig) -> io::Result<()> {
    let json = match JsonNode::from_tree(node, config) {
        Some(view) => serde_json::to_string_pretty(&view).map_err(io::Error::other)?,
        None => "null".to_string(),
    };
    println!("{}", json);
    Ok(())
}
