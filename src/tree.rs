//! Declarative filesystem tree.
//!
//! Generators assemble a [`TreeNode`] in memory; the builder materializes it.
//! The directory/file distinction is a tagged variant so it stays exhaustive
//! under `match`.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::errors::{ForgeError, ForgeResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// Directory with named children, ordered for deterministic traversal.
    Directory(BTreeMap<String, TreeNode>),
    /// File with fixed content and an optional executable bit.
    File { content: String, executable: bool },
}

impl TreeNode {
    pub fn dir() -> Self {
        TreeNode::Directory(BTreeMap::new())
    }

    pub fn file(content: impl Into<String>) -> Self {
        TreeNode::File {
            content: content.into(),
            executable: false,
        }
    }

    /// File that the builder marks executable on materialization.
    pub fn script(content: impl Into<String>) -> Self {
        TreeNode::File {
            content: content.into(),
            executable: true,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    pub fn is_file(&self) -> bool {
        matches!(self, TreeNode::File { .. })
    }

    /// Insert a node at a relative path, creating intermediate directories.
    ///
    /// Every path must be relative and free of `.`/`..` components; anything
    /// else would let a generator write outside the target root.
    pub fn insert(&mut self, rel_path: impl AsRef<Path>, node: TreeNode) -> ForgeResult<()> {
        let rel_path = rel_path.as_ref();
        let components = validate_components(rel_path)?;
        self.insert_components(rel_path, &components, node)
    }

    /// Shorthand for inserting an empty directory.
    pub fn insert_dir(&mut self, rel_path: impl AsRef<Path>) -> ForgeResult<()> {
        self.insert(rel_path, TreeNode::dir())
    }

    fn insert_components(
        &mut self,
        full: &Path,
        components: &[String],
        node: TreeNode,
    ) -> ForgeResult<()> {
        let children = match self {
            TreeNode::Directory(children) => children,
            TreeNode::File { .. } => return Err(ForgeError::PathCollision(full.to_path_buf())),
        };
        let (head, rest) = components
            .split_first()
            .ok_or_else(|| ForgeError::PathEscape(full.to_path_buf()))?;

        if rest.is_empty() {
            // Re-inserting a directory over a directory is a no-op;
            // everything else must agree exactly.
            if let Some(existing) = children.get_mut(head) {
                return existing.merge_at(full, node);
            }
            children.insert(head.clone(), node);
            return Ok(());
        }

        let child = children.entry(head.clone()).or_insert_with(TreeNode::dir);
        child.insert_components(full, rest, node)
    }

    /// Merge another tree into this one.
    ///
    /// Directories merge recursively. Two files merge only if content and
    /// executable flag are identical; any disagreement is a `PathCollision`
    /// naming the offending path.
    pub fn merge(&mut self, other: TreeNode) -> ForgeResult<()> {
        self.merge_at(Path::new(""), other)
    }

    fn merge_at(&mut self, at: &Path, other: TreeNode) -> ForgeResult<()> {
        match (self, other) {
            (TreeNode::Directory(children), TreeNode::Directory(other_children)) => {
                for (name, other_child) in other_children {
                    let child_path = at.join(&name);
                    if let Some(child) = children.get_mut(&name) {
                        child.merge_at(&child_path, other_child)?;
                    } else {
                        children.insert(name, other_child);
                    }
                }
                Ok(())
            }
            (this, other) => {
                if *this == other {
                    Ok(())
                } else {
                    Err(ForgeError::PathCollision(at.to_path_buf()))
                }
            }
        }
    }

    /// Add an empty `.gitkeep` file to every directory without children, so
    /// the materialized structure survives a git checkout.
    pub fn add_gitkeep(&mut self) {
        if let TreeNode::Directory(children) = self {
            if children.is_empty() {
                children.insert(".gitkeep".to_string(), TreeNode::file(""));
                return;
            }
            for child in children.values_mut() {
                child.add_gitkeep();
            }
        }
    }

    /// All nodes in sorted order, parents before children. The root itself is
    /// not yielded.
    pub fn walk(&self) -> Vec<(PathBuf, &TreeNode)> {
        let mut out = Vec::new();
        self.walk_into(PathBuf::new(), &mut out);
        out
    }

    fn walk_into<'a>(&'a self, prefix: PathBuf, out: &mut Vec<(PathBuf, &'a TreeNode)>) {
        if let TreeNode::Directory(children) = self {
            for (name, child) in children {
                let path = prefix.join(name);
                out.push((path.clone(), child));
                child.walk_into(path, out);
            }
        }
    }

    /// Number of file nodes in the tree.
    pub fn file_count(&self) -> usize {
        self.walk().iter().filter(|(_, n)| n.is_file()).count()
    }
}

/// Split a relative path into validated components.
fn validate_components(path: &Path) -> ForgeResult<Vec<String>> {
    if path.as_os_str().is_empty() {
        return Err(ForgeError::PathEscape(path.to_path_buf()));
    }
    let mut parts = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(name) => match name.to_str() {
                Some(s) => parts.push(s.to_string()),
                None => return Err(ForgeError::PathEscape(path.to_path_buf())),
            },
            // CurDir, ParentDir, RootDir, Prefix all escape or alias the root
            _ => return Err(ForgeError::PathEscape(path.to_path_buf())),
        }
    }
    if parts.is_empty() {
        return Err(ForgeError::PathEscape(path.to_path_buf()));
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_nested_path_when_insert_then_creates_intermediate_dirs() {
        let mut tree = TreeNode::dir();
        tree.insert("a/b/c.txt", TreeNode::file("x")).unwrap();

        let walked: Vec<_> = tree.walk().into_iter().map(|(p, _)| p).collect();
        assert_eq!(
            walked,
            vec![
                PathBuf::from("a"),
                PathBuf::from("a/b"),
                PathBuf::from("a/b/c.txt")
            ]
        );
    }

    #[test]
    fn given_parent_traversal_when_insert_then_path_escape() {
        let mut tree = TreeNode::dir();
        let result = tree.insert("../evil.txt", TreeNode::file(""));
        assert!(matches!(result, Err(ForgeError::PathEscape(_))));
    }

    #[test]
    fn given_absolute_path_when_insert_then_path_escape() {
        let mut tree = TreeNode::dir();
        let result = tree.insert("/etc/passwd", TreeNode::file(""));
        assert!(matches!(result, Err(ForgeError::PathEscape(_))));
    }

    #[test]
    fn given_identical_files_when_merge_then_ok() {
        let mut a = TreeNode::dir();
        a.insert("x/f.txt", TreeNode::file("same")).unwrap();
        let mut b = TreeNode::dir();
        b.insert("x/f.txt", TreeNode::file("same")).unwrap();

        assert!(a.merge(b).is_ok());
    }

    #[test]
    fn given_conflicting_files_when_merge_then_path_collision() {
        let mut a = TreeNode::dir();
        a.insert("x/f.txt", TreeNode::file("one")).unwrap();
        let mut b = TreeNode::dir();
        b.insert("x/f.txt", TreeNode::file("two")).unwrap();

        match a.merge(b) {
            Err(ForgeError::PathCollision(p)) => assert_eq!(p, PathBuf::from("x/f.txt")),
            other => panic!("expected PathCollision, got {:?}", other),
        }
    }

    #[test]
    fn given_file_vs_directory_when_merge_then_path_collision() {
        let mut a = TreeNode::dir();
        a.insert("x", TreeNode::file("f")).unwrap();
        let mut b = TreeNode::dir();
        b.insert("x/child.txt", TreeNode::file("")).unwrap();

        assert!(matches!(a.merge(b), Err(ForgeError::PathCollision(_))));
    }

    #[test]
    fn given_empty_dirs_when_add_gitkeep_then_gitkeep_files_added() {
        let mut tree = TreeNode::dir();
        tree.insert_dir("empty").unwrap();
        tree.insert("full/f.txt", TreeNode::file("x")).unwrap();

        tree.add_gitkeep();

        let paths: Vec<_> = tree.walk().into_iter().map(|(p, _)| p).collect();
        assert!(paths.contains(&PathBuf::from("empty/.gitkeep")));
        assert!(!paths.contains(&PathBuf::from("full/.gitkeep")));
    }
}
