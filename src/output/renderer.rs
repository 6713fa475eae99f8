//! Tree renderer for colorized console output
//!
//! Prints a completed `SizeTreeNode` in stored child order, one line per
//! node, skipping ignored names and stopping at the depth limit.

use std::io::{self, Write};

use termcolor::{Buffer, ColorChoice, StandardStream, WriteColor};

use crate::tree::SizeTreeNode;

use super::config::RenderConfig;
use super::size::format_size;
use super::style::{Style, style_for};

/// Box-drawing pieces for one indentation level.
struct Connectors {
    branch: &'static str,
    last: &'static str,
    vertical: &'static str,
    blank: &'static str,
}

const WIDE: Connectors = Connectors {
    branch: "├─ ",
    last: "└─ ",
    vertical: "│  ",
    blank: "   ",
};

const COMPACT: Connectors = Connectors {
    branch: "├ ",
    last: "└ ",
    vertical: "│ ",
    blank: "  ",
};

/// Leading indent for every line below the root.
const MARGIN: &str = "  ";

pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render without color codes.
    pub fn format(&self, root: &SizeTreeNode) -> io::Result<String> {
        let mut buffer = Buffer::no_color();
        self.write(&mut buffer, root)?;
        Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
    }

    /// Render to stdout; returns the number of lines printed.
    pub fn print(&self, root: &SizeTreeNode) -> io::Result<usize> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let lines = self.write(&mut stdout, root)?;
        stdout.flush()?;
        Ok(lines)
    }

    /// Render to any color-capable writer; returns the number of lines written.
    pub fn write<W: WriteColor>(&self, out: &mut W, root: &SizeTreeNode) -> io::Result<usize> {
        let mut last_flags = Vec::new();
        self.write_node(out, root, self.config.max_depth, &mut last_flags)
    }

    /// `last_flags[i]` records whether the ancestor at depth `i + 1` (or the
    /// node itself, for the final entry) is the last of its siblings.
    fn write_node<W: WriteColor>(
        &self,
        out: &mut W,
        node: &SizeTreeNode,
        remaining: Option<usize>,
        last_flags: &mut Vec<bool>,
    ) -> io::Result<usize> {
        let name = node.name();
        if self.config.is_ignored(&name) {
            return Ok(0);
        }

        self.write_line(out, node, &name, last_flags)?;
        let mut lines = 1;

        if !node.is_dir() || remaining == Some(0) {
            return Ok(lines);
        }

        let children = node.children();
        for (i, child) in children.iter().enumerate() {
            last_flags.push(i == children.len() - 1);
            lines += self.write_node(out, child, remaining.map(|d| d - 1), last_flags)?;
            last_flags.pop();
        }
        Ok(lines)
    }

    fn write_line<W: WriteColor>(
        &self,
        out: &mut W,
        node: &SizeTreeNode,
        name: &str,
        last_flags: &[bool],
    ) -> io::Result<()> {
        out.reset()?;
        write!(out, "{}", self.prefix(last_flags))?;

        out.set_color(&style_for(node.classification()).color_spec())?;
        write!(out, "{}", name)?;
        if node.is_dir() {
            write!(out, "/")?;
        }
        out.reset()?;

        write!(out, " » {}", format_size(node.size_bytes()))?;

        out.set_color(&Style::DIM.color_spec())?;
        write!(out, " ({} bytes)", node.size_bytes())?;
        out.reset()?;
        writeln!(out)
    }

    fn prefix(&self, last_flags: &[bool]) -> String {
        let Some((&is_last, ancestors)) = last_flags.split_last() else {
            return String::new();
        };
        let c = if self.config.compact { &COMPACT } else { &WIDE };

        let mut prefix = String::from(MARGIN);
        for &ancestor_last in ancestors {
            prefix.push_str(if ancestor_last { c.blank } else { c.vertical });
        }
        prefix.push_str(if is_last { c.last } else { c.branch });
        prefix
    }
}
