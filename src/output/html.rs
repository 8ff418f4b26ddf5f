//! Tree-to-markup serialization
//!
//! This module provides `HtmlRenderer` which serializes a walked
//! `TreeNode` tree into the nested `<ul>` markup embedded in the page.

use crate::tree::TreeNode;

use super::config::{Layout, OutputConfig};

/// Renders a walked tree into nested-list markup and wraps it into the
/// final document (see `render_page` in the `page` module).
pub struct HtmlRenderer {
    config: OutputConfig,
}

impl HtmlRenderer {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Serialize a directory node into a nested `<ul>` tree.
    ///
    /// The walker already orders each directory's children with all
    /// subdirectories before all files; serialization preserves that order.
    pub fn render_tree(&self, node: &TreeNode) -> String {
        let mut out = String::new();
        self.render_children(node, &mut out);
        out
    }

    fn render_children(&self, node: &TreeNode, out: &mut String) {
        out.push_str("<ul>\n");
        if let TreeNode::Dir { children, .. } = node {
            for child in children {
                self.render_node(child, out);
            }
        }
        out.push_str("</ul>\n");
    }

    fn render_node(&self, node: &TreeNode, out: &mut String) {
        match node {
            TreeNode::Dir { name, .. } => {
                out.push_str("<li class=\"folder\"><span class=\"folder-name\">📁 ");
                out.push_str(&escape(name));
                out.push_str("</span>\n");
                self.render_children(node, out);
                out.push_str("</li>\n");
            }
            TreeNode::File { name, rel_path } => {
                let target = self.config.link_target(rel_path);
                out.push_str("<li class=\"file\"><span class=\"file-icon\">");
                out.push_str(self.config.icons.glyph_for(name));
                out.push_str("</span> <a ");
                if self.config.layout == Layout::Flat {
                    // No viewer frame: the link navigates directly.
                    out.push_str(&format!("href=\"{}\"", escape(&target)));
                } else {
                    out.push_str(&format!("href=\"#\" data-path=\"{}\"", escape(&target)));
                }
                out.push('>');
                out.push_str(&escape(name));
                out.push_str("</a></li>\n");
            }
            TreeNode::Unreadable => {
                out.push_str("<li class=\"error\">Error reading directory</li>\n");
            }
        }
    }
}

/// Escape text for HTML body and double-quoted attribute positions.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
