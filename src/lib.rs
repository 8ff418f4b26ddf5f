//! Canopy - renders a directory tree as a browsable static HTML page

pub mod icons;
pub mod output;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use icons::IconMap;
pub use output::{HtmlRenderer, Layout, LinkMode, OutputConfig, print_json};
pub use tree::{IgnoreSet, TreeNode, TreeWalker, WalkerConfig};
