//! Output configuration types

/// Names hidden from output unless overridden on the command line.
pub const DEFAULT_IGNORE: &str = ".git,node_modules";

/// Configuration for tree rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Levels to descend below the root. `None` means unlimited.
    pub max_depth: Option<usize>,
    /// Exact file names whose nodes (and subtrees) are not printed.
    pub ignore: Vec<String>,
    pub compact: bool,
    pub use_color: bool,
}

impl RenderConfig {
    /// Split a comma-separated ignore list, trimming and dropping empty names.
    pub fn parse_ignore_list(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Convert a signed depth argument; any negative value means unlimited.
    pub fn depth_from_arg(depth: i64) -> Option<usize> {
        usize::try_from(depth).ok()
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|i| i == name)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            ignore: Self::parse_ignore_list(DEFAULT_IGNORE),
            compact: false,
            use_color: true,
        }
    }
}
