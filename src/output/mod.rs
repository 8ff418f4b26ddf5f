//! HTML and JSON output for walked trees
//!
//! # Module Structure
//!
//! - `config` - layout, link-target, and title configuration
//! - `html` - tree-to-markup serialization
//! - `page` - full-document assembly around the serialized tree
//! - `json` - JSON dump of the walked tree

mod config;
mod html;
mod json;
mod page;

pub use config::{DEFAULT_OUTPUT_FILE, DEFAULT_TITLE, Layout, LinkMode, OutputConfig};
pub use html::{HtmlRenderer, escape};
pub use json::print_json;
