//! Seed filesystem
//!
//! The static layout every shell session starts from. Each call to
//! [`seeded_tree`] builds a fresh tree, so sessions never share state.

use super::tree::FileSystemTree;
use super::types::FsError;

/// Default home directory of the seed layout.
pub const DEFAULT_HOME: &str = "/home/user";

/// Directories created even when they hold no files.
pub const SEED_DIRS: &[&str] = &["/etc", "/usr", "/home/user/documents", "/home/user/workspace"];

/// Files of the seed layout, as (absolute path, content).
pub const SEED_FILES: &[(&str, &str)] = &[
    (
        "/home/user/profile.txt",
        "Name: GUA-D-CUAG\nRole: Orchestration Engine\nStatus: Online",
    ),
    (
        "/home/user/documents/report.txt",
        "This is a simulated report document.\nIt contains important findings and data.",
    ),
    (
        "/home/user/documents/notes.md",
        "# Project Notes\n- Initial setup complete\n- Review meeting scheduled",
    ),
    (
        "/home/user/workspace/project_config.json",
        "{\n  \"project\": \"CUA Engine\",\n  \"version\": \"1.0.0\",\n  \"status\": \"development\"\n}",
    ),
];

/// Build a tree from directory and file lists.
pub fn build_tree(dirs: &[&str], files: &[(&str, &str)]) -> Result<FileSystemTree, FsError> {
    let mut fs = FileSystemTree::new();
    for dir in dirs {
        fs.create_dir_all(dir)?;
    }
    for (path, content) in files {
        fs.write_file(path, *content)?;
    }
    Ok(fs)
}

/// A fresh copy of the default seed layout.
pub fn seeded_tree() -> FileSystemTree {
    build_tree(SEED_DIRS, SEED_FILES).unwrap_or_default()
}
