//! File System Types
//!
//! Node and error types for the in-memory shell filesystem.

use std::collections::BTreeMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    /// Path is missing, or one of its intermediate segments is a file.
    #[error("no such path '{path}'")]
    NotFound { path: String },

    #[error("not a directory '{path}'")]
    NotDirectory { path: String },

    #[error("invalid entry name '{name}'")]
    InvalidName { name: String },

    #[error("entry already exists '{path}'")]
    AlreadyExists { path: String },

    #[error("the root directory cannot be removed")]
    RootRemoval,
}

/// Kind of a node, used to tag listings for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Directory,
    File,
}

/// A single node of the tree.
///
/// Directory entries are keyed by name and kept sorted, so listings are
/// deterministic regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    Directory { entries: BTreeMap<String, FsNode> },
    File { content: String },
}

impl FsNode {
    /// Create an empty directory node
    pub fn directory() -> Self {
        FsNode::Directory {
            entries: BTreeMap::new(),
        }
    }

    /// Create a file node with the given content
    pub fn file(content: impl Into<String>) -> Self {
        FsNode::File {
            content: content.into(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            FsNode::Directory { .. } => NodeKind::Directory,
            FsNode::File { .. } => NodeKind::File,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File { .. })
    }

    /// Entries of a directory, `None` for files.
    pub fn entries(&self) -> Option<&BTreeMap<String, FsNode>> {
        match self {
            FsNode::Directory { entries } => Some(entries),
            FsNode::File { .. } => None,
        }
    }

    pub fn entries_mut(&mut self) -> Option<&mut BTreeMap<String, FsNode>> {
        match self {
            FsNode::Directory { entries } => Some(entries),
            FsNode::File { .. } => None,
        }
    }

    /// Content of a file, `None` for directories.
    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File { content } => Some(content),
            FsNode::Directory { .. } => None,
        }
    }
}

/// Directory entry with type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}

impl DirEntry {
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Check that `name` can be stored as a single directory entry.
pub fn validate_entry_name(name: &str) -> Result<(), FsError> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(FsError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
