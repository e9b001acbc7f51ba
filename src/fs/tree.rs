//! In-Memory File System Tree
//!
//! An owned hierarchy of [`FsNode`]s rooted at `/`. Every lookup walks from
//! the root by exact name; there are no links, so the tree stays acyclic.

use super::path::{segments, split_parent};
use super::types::*;

/// In-memory virtual file system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemTree {
    root: FsNode,
}

impl FileSystemTree {
    /// Create a tree holding only an empty root directory.
    pub fn new() -> Self {
        Self {
            root: FsNode::directory(),
        }
    }

    pub fn root(&self) -> &FsNode {
        &self.root
    }

    /// Find the node at an absolute path.
    ///
    /// A missing segment and a segment that descends through a file both
    /// yield [`FsError::NotFound`].
    pub fn lookup(&self, path: &str) -> Result<&FsNode, FsError> {
        let mut current = &self.root;
        for part in segments(path) {
            current = current
                .entries()
                .and_then(|entries| entries.get(part))
                .ok_or_else(|| not_found(path))?;
        }
        Ok(current)
    }

    /// Mutable counterpart of [`lookup`](Self::lookup).
    pub fn lookup_mut(&mut self, path: &str) -> Result<&mut FsNode, FsError> {
        let mut current = &mut self.root;
        for part in segments(path) {
            current = current
                .entries_mut()
                .and_then(|entries| entries.get_mut(part))
                .ok_or_else(|| not_found(path))?;
        }
        Ok(current)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    /// List a directory with type information, sorted by name.
    pub fn read_dir(&self, path: &str) -> Result<Vec<DirEntry>, FsError> {
        let node = self.lookup(path)?;
        let entries = node.entries().ok_or_else(|| FsError::NotDirectory {
            path: path.to_string(),
        })?;
        Ok(entries
            .iter()
            .map(|(name, node)| DirEntry {
                name: name.clone(),
                kind: node.kind(),
            })
            .collect())
    }

    /// Read the content of a file.
    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        self.lookup(path)?.content().ok_or_else(|| not_found(path))
    }

    /// Insert `node` as `name` inside the directory at `parent`.
    ///
    /// Returns the node previously stored under that name, if any.
    pub fn insert(
        &mut self,
        parent: &str,
        name: &str,
        node: FsNode,
    ) -> Result<Option<FsNode>, FsError> {
        validate_entry_name(name)?;
        let dir = self.lookup_mut(parent)?;
        let entries = dir.entries_mut().ok_or_else(|| FsError::NotDirectory {
            path: parent.to_string(),
        })?;
        Ok(entries.insert(name.to_string(), node))
    }

    /// Detach and return the node at `path`.
    pub fn remove(&mut self, path: &str) -> Result<FsNode, FsError> {
        let (parent, name) = split_parent(path).ok_or(FsError::RootRemoval)?;
        let dir = self.lookup_mut(&parent).map_err(|_| not_found(path))?;
        dir.entries_mut()
            .and_then(|entries| entries.remove(&name))
            .ok_or_else(|| not_found(path))
    }

    /// Create a directory and any missing ancestors.
    pub fn create_dir_all(&mut self, path: &str) -> Result<(), FsError> {
        let mut current = &mut self.root;
        let mut walked = String::new();
        for part in segments(path) {
            validate_entry_name(part)?;
            walked.push('/');
            walked.push_str(part);
            let entries = current.entries_mut().ok_or_else(|| FsError::NotDirectory {
                path: walked.clone(),
            })?;
            current = entries
                .entry(part.to_string())
                .or_insert_with(FsNode::directory);
        }
        if current.is_directory() {
            Ok(())
        } else {
            Err(FsError::AlreadyExists { path: walked })
        }
    }

    /// Write a file, creating parent directories as needed.
    pub fn write_file(&mut self, path: &str, content: impl Into<String>) -> Result<(), FsError> {
        let (parent, name) = split_parent(path).ok_or_else(|| FsError::AlreadyExists {
            path: "/".to_string(),
        })?;
        self.create_dir_all(&parent)?;
        if let Ok(existing) = self.lookup(path) {
            if existing.is_directory() {
                return Err(FsError::AlreadyExists {
                    path: path.to_string(),
                });
            }
        }
        self.insert(&parent, &name, FsNode::file(content))?;
        Ok(())
    }

    /// Every path in the tree, root first, depth-first in name order.
    pub fn all_paths(&self) -> Vec<String> {
        let mut out = vec!["/".to_string()];
        collect_paths(&self.root, "", &mut out);
        out
    }
}

impl Default for FileSystemTree {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &str) -> FsError {
    FsError::NotFound {
        path: path.to_string(),
    }
}

fn collect_paths(node: &FsNode, prefix: &str, out: &mut Vec<String>) {
    if let Some(entries) = node.entries() {
        for (name, child) in entries {
            let path = format!("{}/{}", prefix, name);
            out.push(path.clone());
            collect_paths(child, &path, out);
        }
    }
}
