//! Directory tree walking logic

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use glob::Pattern;
use serde::Serialize;

/// One node of a walked directory tree.
///
/// `rel_path` is the node's path relative to the walk root, joined with
/// forward slashes regardless of the host separator, so it can be used
/// directly as a link target.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        rel_path: String,
    },
    Dir {
        name: String,
        rel_path: String,
        children: Vec<TreeNode>,
    },
    /// Placeholder left in a directory's position when its listing failed.
    Unreadable,
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } | TreeNode::Dir { name, .. } => name,
            TreeNode::Unreadable => "",
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Count nested (directories, files) beneath this node.
    pub fn counts(&self) -> (usize, usize) {
        let mut dirs = 0;
        let mut files = 0;
        if let TreeNode::Dir { children, .. } = self {
            for child in children {
                match child {
                    TreeNode::File { .. } => files += 1,
                    TreeNode::Dir { .. } => {
                        let (d, f) = child.counts();
                        dirs += d + 1;
                        files += f;
                    }
                    TreeNode::Unreadable => {}
                }
            }
        }
        (dirs, files)
    }
}

/// Names the default IgnoreSet excludes from traversal.
pub const DEFAULT_IGNORES: &[&str] = &[".git", "node_modules", "target", ".ds_store", "thumbs.db"];

/// Names excluded from traversal entirely. Matched case-insensitively
/// against entry base names only; no pattern support.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut set = Self::empty();
        for name in DEFAULT_IGNORES {
            set.insert(name);
        }
        set
    }

    pub fn insert(&mut self, name: &str) {
        self.names.insert(name.to_lowercase());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub ignore: IgnoreSet,
    /// Extra glob patterns matched against entry base names.
    pub ignore_patterns: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            ignore: IgnoreSet::with_defaults(),
            ignore_patterns: Vec::new(),
        }
    }
}

/// Walks a directory tree into an owned [`TreeNode`] structure.
///
/// Every filesystem failure is recovered locally: an unlistable directory
/// becomes an [`TreeNode::Unreadable`] child in its position, an entry that
/// cannot be stat'ed is skipped, and each failure is reported on stderr.
/// The walk itself never aborts.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `path` and return its directory node. `rel_base` is the
    /// accumulated relative path prefix, empty at the root call.
    pub fn walk(&self, path: &Path, rel_base: &str) -> TreeNode {
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());

        let entries = match fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                eprintln!(
                    "canopy: error reading directory {}: {}",
                    path.display(),
                    err
                );
                return TreeNode::Dir {
                    name,
                    rel_path: rel_base.to_string(),
                    children: vec![TreeNode::Unreadable],
                };
            }
        };

        // Partition into directories and files, keeping listing order within
        // each group. No sort key beyond the partition: same-type order is
        // whatever read_dir returned.
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    eprintln!("canopy: error reading entry in {}: {}", path.display(), err);
                    continue;
                }
            };
            let entry_name = entry.file_name().to_string_lossy().to_string();
            if self.should_ignore(&entry_name) {
                continue;
            }
            let entry_path = entry.path();
            // Follows symlinks, so a link to a directory is walked like one.
            // A dangling link is skipped here; its siblings still appear.
            let metadata = match fs::metadata(&entry_path) {
                Ok(metadata) => metadata,
                Err(err) => {
                    eprintln!(
                        "canopy: error accessing {}: {}",
                        entry_path.display(),
                        err
                    );
                    continue;
                }
            };
            let rel_path = join_rel(rel_base, &entry_name);
            if metadata.is_dir() {
                dirs.push((entry_path, rel_path));
            } else {
                files.push(TreeNode::File {
                    name: entry_name,
                    rel_path,
                });
            }
        }

        let mut children = Vec::with_capacity(dirs.len() + files.len());
        for (dir_path, rel_path) in dirs {
            children.push(self.walk(&dir_path, &rel_path));
        }
        children.extend(files);

        TreeNode::Dir {
            name,
            rel_path: rel_base.to_string(),
            children,
        }
    }

    fn should_ignore(&self, name: &str) -> bool {
        if self.config.ignore.contains(name) {
            return true;
        }
        self.config
            .ignore_patterns
            .iter()
            .any(|pattern| glob_match(pattern, name))
    }
}

/// Join a relative path prefix and a base name with a forward slash.
fn join_rel(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}

fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
