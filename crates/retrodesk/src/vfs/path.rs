//! Lexical path resolution.
//!
//! Resolution is purely lexical: `.` and `..` are folded away without
//! touching the tree, and popping past root is a silent no-op. Existence
//! is an orthogonal concern checked by lookup.

use std::path::{Component, Path, PathBuf};

/// Resolve a target string against the current working directory.
///
/// If the target is absolute, resolution starts from root and `cwd` is
/// ignored. An empty or `.` target returns `cwd` unchanged.
///
/// # Example
///
/// ```
/// use std::path::{Path, PathBuf};
/// use retrodesk::vfs::resolve;
///
/// assert_eq!(resolve(Path::new("/home"), "documents"), PathBuf::from("/home/documents"));
/// assert_eq!(resolve(Path::new("/home"), "/etc"), PathBuf::from("/etc"));
/// assert_eq!(resolve(Path::new("/home"), "../.."), PathBuf::from("/"));
/// ```
pub fn resolve(cwd: &Path, target: &str) -> PathBuf {
    if target.is_empty() || target == "." {
        return cwd.to_path_buf();
    }

    let path = Path::new(target);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    normalize(&joined)
}

/// Normalize a path by resolving `.` and `..` components.
///
/// Ensures paths like `/.` become `/` and `/tmp/../home` becomes `/home`.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push("/");
            }
            Component::Normal(name) => {
                result.push(name);
            }
            Component::ParentDir => {
                // pop() at "/" returns false, which is exactly the
                // popping-past-root no-op the contract asks for
                result.pop();
            }
            Component::CurDir => {}
            Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() {
        result.push("/");
    }

    result
}
