//! Path resolution
//!
//! Pure string normalization of shell paths. Nothing here touches the tree;
//! existence is checked separately with [`FileSystemTree::lookup`].
//!
//! [`FileSystemTree::lookup`]: super::FileSystemTree::lookup

/// Split a path into its non-empty segments.
///
/// Repeated, leading and trailing slashes collapse away. `.` and `..` are
/// returned as-is; use [`resolve`] to interpret them.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|p| !p.is_empty())
}

/// Resolve `input` against `cwd` into a normalized absolute path.
///
/// `cwd` is expected to be absolute. `..` at the root stays at the root.
pub fn resolve(cwd: &str, input: &str) -> String {
    let combined = if input.starts_with('/') {
        input.to_string()
    } else {
        format!("{}/{}", cwd, input)
    };

    let mut stack: Vec<&str> = Vec::new();
    for part in segments(&combined) {
        match part {
            "." => {}
            ".." => {
                stack.pop();
            }
            _ => stack.push(part),
        }
    }

    if stack.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", stack.join("/"))
    }
}

/// Join a directory path and a single entry name.
pub fn join(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir.trim_end_matches('/'), name)
    }
}

/// Split an absolute path into its parent directory and final name.
///
/// Returns `None` for the root, which has no parent.
pub fn split_parent(path: &str) -> Option<(String, String)> {
    let normalized = resolve("/", path);
    if normalized == "/" {
        return None;
    }
    let pos = normalized.rfind('/')?;
    let parent = if pos == 0 {
        "/".to_string()
    } else {
        normalized[..pos].to_string()
    };
    Some((parent, normalized[pos + 1..].to_string()))
}
