//! Tree formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `size` - Human-readable byte formatting
//! - `style` - Classification to color mapping
//! - `renderer` - Colorized tree renderer for console output
//! - `json` - JSON output

mod config;
mod json;
mod renderer;
mod size;
mod style;

pub use config::{DEFAULT_IGNORE, RenderConfig};
pub use json::{JsonNode, print_json};
pub use renderer::TreeRenderer;
pub use size::format_size;
pub use style::{Style, style_for};
