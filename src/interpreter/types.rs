//! Interpreter Types
//!
//! The part of a shell session that commands read from.

use crate::commands::SessionEffect;
use crate::fs::FileSystemTree;

/// Filesystem and directory state of one shell session.
#[derive(Debug, Clone)]
pub struct SessionEnv {
    pub fs: FileSystemTree,
    /// Absolute path of an existing directory
    pub cwd: String,
    /// Target of a bare `cd`
    pub home: String,
}

impl SessionEnv {
    /// Start in `home`, or at the root when `home` is not a directory of `fs`.
    pub fn new(fs: FileSystemTree, home: impl Into<String>) -> Self {
        let home = home.into();
        let cwd = if fs.lookup(&home).map(|n| n.is_directory()).unwrap_or(false) {
            home.clone()
        } else {
            tracing::warn!(home = %home, "home directory missing from filesystem, starting at /");
            "/".to_string()
        };
        Self { fs, cwd, home }
    }

    /// Apply a directory change. Screen effects are left to the display owner.
    pub fn apply(&mut self, effect: &SessionEffect) {
        if let SessionEffect::ChangeDirectory(path) = effect {
            if self.fs.lookup(path).map(|n| n.is_directory()).unwrap_or(false) {
                self.cwd = path.clone();
            }
        }
    }
}
