//! JSON output

use std::io::{self, Write};

use crate::tree::TreeNode;

/// Print the walked tree as pretty-printed JSON on stdout.
pub fn print_json(tree: &TreeNode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, tree).map_err(io::Error::other)?;
    writeln!(handle)?;
    Ok(())
}
