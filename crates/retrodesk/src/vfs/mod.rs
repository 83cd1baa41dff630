//! Virtual filesystem for Retrodesk
//!
//! A static, hand-authored tree of directories and files behind one shared
//! handle. Every operation is total: failures come back as [`VfsError`]
//! values whose `Display` strings are the exact messages the terminal
//! prints, so the command layer never needs fallible-call handling.
//!
//! The only mutation is [`Vfs::unlock`], which removes a file's lock in
//! place; the change is immediately visible to every holder of the `Arc`.

mod node;
mod path;

pub use node::{default_tree, FileNode, Lock, OpenAction, VfsNode};
pub use path::resolve;

use std::path::{Component, Path, PathBuf};

use thiserror::Error;
use tokio::sync::RwLock;

/// VFS operation failures.
///
/// All variants render as the human-readable text shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VfsError {
    #[error("No such path: {0}")]
    NoSuchPath(String),

    #[error("No such directory: {0}")]
    NoSuchDirectory(String),

    #[error("No such file: {0}")]
    NoSuchFile(String),

    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("{0} is not a file")]
    NotAFile(String),

    #[error("{0} is locked. Use: unlock {0} <password>")]
    Locked(String),

    #[error("{0} is already unlocked.")]
    AlreadyUnlocked(String),

    #[error("Incorrect password.")]
    IncorrectPassword,
}

/// Node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

impl NodeKind {
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory)
    }

    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }
}

/// Owned summary of a node, returned by [`Vfs::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub kind: NodeKind,
    pub hidden: bool,
    pub locked: bool,
    pub action: Option<OpenAction>,
    pub url: Option<String>,
}

/// Directory entry, returned by [`Vfs::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    /// Entry name (not full path).
    pub name: String,
    pub kind: NodeKind,
    pub locked: bool,
    pub action: Option<OpenAction>,
}

/// File contents plus the tags the dispatch layer branches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileView {
    pub content: String,
    pub action: Option<OpenAction>,
    pub url: Option<String>,
}

/// The shared virtual filesystem.
///
/// Constructed once at desktop mount and shared as `Arc<Vfs>` between the
/// terminal and every file-browser window. The lock is never held across
/// an await.
pub struct Vfs {
    root: RwLock<VfsNode>,
}

impl Default for Vfs {
    fn default() -> Self {
        Self::new(default_tree())
    }
}

impl Vfs {
    /// Create a VFS over the given root node.
    pub fn new(root: VfsNode) -> Self {
        Self {
            root: RwLock::new(root),
        }
    }

    /// Look up a path and return an owned summary of the node.
    ///
    /// Fails with `NoSuchPath` if a segment is missing, if a mid-path node
    /// is not a directory, or if any node on the way is hidden and
    /// `allow_hidden` is false.
    pub async fn lookup(&self, path: &Path, allow_hidden: bool) -> Result<NodeInfo, VfsError> {
        let root = self.root.read().await;
        let node = walk(&root, path, allow_hidden)
            .ok_or_else(|| VfsError::NoSuchPath(path.display().to_string()))?;
        Ok(info(node))
    }

    /// Read a directory's entries, directories first, alphabetical within
    /// each group. Hidden entries are excluded unless `allow_hidden` (used
    /// only by the trash browser).
    pub async fn read_dir(
        &self,
        cwd: &Path,
        target: Option<&str>,
        allow_hidden: bool,
    ) -> Result<Vec<EntryInfo>, VfsError> {
        let path = resolve(cwd, target.unwrap_or("."));
        let root = self.root.read().await;
        let node = walk(&root, &path, allow_hidden)
            .ok_or_else(|| VfsError::NoSuchPath(path.display().to_string()))?;

        let VfsNode::Directory { children, .. } = node else {
            return Err(VfsError::NotADirectory(path.display().to_string()));
        };

        let mut entries: Vec<EntryInfo> = children
            .iter()
            .filter(|(_, child)| allow_hidden || !child.hidden())
            .map(|(name, child)| EntryInfo {
                name: name.clone(),
                kind: kind_of(child),
                locked: matches!(child, VfsNode::File(f) if f.lock.is_some()),
                action: child.action(),
            })
            .collect();

        entries.sort_by(|a, b| {
            b.kind
                .is_dir()
                .cmp(&a.kind.is_dir())
                .then_with(|| a.name.cmp(&b.name))
        });

        Ok(entries)
    }

    /// List child names of a directory (the terminal `ls` view).
    pub async fn list(
        &self,
        cwd: &Path,
        target: Option<&str>,
        allow_hidden: bool,
    ) -> Result<Vec<String>, VfsError> {
        let entries = self.read_dir(cwd, target, allow_hidden).await?;
        Ok(entries.into_iter().map(|e| e.name).collect())
    }

    /// Validate a directory change and return the resolved path.
    ///
    /// The caller persists the result as the new cwd.
    pub async fn change_dir(&self, cwd: &Path, target: &str) -> Result<PathBuf, VfsError> {
        let path = resolve(cwd, target);
        let root = self.root.read().await;
        let node = walk(&root, &path, false)
            .ok_or_else(|| VfsError::NoSuchDirectory(path.display().to_string()))?;

        if !node.is_dir() {
            return Err(VfsError::NotADirectory(path.display().to_string()));
        }
        Ok(path)
    }

    /// Read a file's contents and action tags.
    ///
    /// `target` is kept as typed for the lock message so the user sees the
    /// name they wrote, not the resolved path.
    pub async fn read_file(&self, cwd: &Path, target: &str) -> Result<FileView, VfsError> {
        let path = resolve(cwd, target);
        let root = self.root.read().await;
        let node = walk(&root, &path, false)
            .ok_or_else(|| VfsError::NoSuchFile(path.display().to_string()))?;

        let VfsNode::File(file) = node else {
            return Err(VfsError::NotAFile(path.display().to_string()));
        };

        if file.lock.is_some() {
            return Err(VfsError::Locked(target.to_string()));
        }

        Ok(FileView {
            content: file.content.clone(),
            action: file.action,
            url: file.url.clone(),
        })
    }

    /// Remove a file's lock if the password matches.
    ///
    /// Plaintext exact-match comparison, intentionally toy. On success the
    /// lock is removed in place and the change is visible to every future
    /// lookup against this instance; there is no re-lock.
    pub async fn unlock(
        &self,
        cwd: &Path,
        target: &str,
        password: &str,
    ) -> Result<String, VfsError> {
        let path = resolve(cwd, target);
        let mut root = self.root.write().await;
        let Some(VfsNode::File(file)) = walk_mut(&mut root, &path) else {
            return Err(VfsError::NoSuchFile(target.to_string()));
        };

        let Some(lock) = &file.lock else {
            return Err(VfsError::AlreadyUnlocked(target.to_string()));
        };

        if lock.password != password {
            tracing::warn!(file = %target, "unlock failed: incorrect password");
            return Err(VfsError::IncorrectPassword);
        }

        file.lock = None;
        tracing::info!(file = %target, "file unlocked");
        Ok(format!("{target} unlocked."))
    }
}

fn kind_of(node: &VfsNode) -> NodeKind {
    if node.is_dir() {
        NodeKind::Directory
    } else {
        NodeKind::File
    }
}

fn info(node: &VfsNode) -> NodeInfo {
    match node {
        VfsNode::Directory { hidden, action, .. } => NodeInfo {
            kind: NodeKind::Directory,
            hidden: *hidden,
            locked: false,
            action: *action,
            url: None,
        },
        VfsNode::File(f) => NodeInfo {
            kind: NodeKind::File,
            hidden: f.hidden,
            locked: f.lock.is_some(),
            action: f.action,
            url: f.url.clone(),
        },
    }
}

fn walk<'a>(root: &'a VfsNode, path: &Path, allow_hidden: bool) -> Option<&'a VfsNode> {
    let mut cur = root;
    for component in path.components() {
        match component {
            Component::Normal(name) => {
                let VfsNode::Directory { children, .. } = cur else {
                    return None;
                };
                let next = children.get(name.to_str()?)?;
                if next.hidden() && !allow_hidden {
                    return None;
                }
                cur = next;
            }
            Component::RootDir => {}
            // resolve() already folded these away
            _ => {}
        }
    }
    Some(cur)
}

fn walk_mut<'a>(root: &'a mut VfsNode, path: &Path) -> Option<&'a mut VfsNode> {
    let mut cur = root;
    for component in path.components() {
        match component {
            Component::Normal(name) => {
                let VfsNode::Directory { children, .. } = cur else {
                    return None;
                };
                let next = children.get_mut(name.to_str()?)?;
                if next.hidden() {
                    return None;
                }
                cur = next;
            }
            Component::RootDir => {}
            _ => {}
        }
    }
    Some(cur)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn home() -> PathBuf {
        PathBuf::from("/home")
    }

    #[tokio::test]
    async fn list_excludes_hidden_by_default() {
        let vfs = Vfs::default();
        let names = vfs.list(&home(), None, false).await.unwrap();
        assert!(!names.contains(&"trash".to_string()));

        let names = vfs.list(&home(), None, true).await.unwrap();
        assert!(names.contains(&"trash".to_string()));
    }

    #[tokio::test]
    async fn list_orders_directories_before_files() {
        let vfs = Vfs::default();
        let names = vfs.list(&home(), None, false).await.unwrap();
        assert_eq!(names, vec!["documents", "games", "secret.txt"]);
    }

    #[tokio::test]
    async fn list_of_missing_path_reports_resolved_path() {
        let vfs = Vfs::default();
        let err = vfs.list(&home(), Some("nope"), false).await.unwrap_err();
        assert_eq!(err, VfsError::NoSuchPath("/home/nope".to_string()));
    }

    #[tokio::test]
    async fn list_of_file_is_not_a_directory() {
        let vfs = Vfs::default();
        let err = vfs
            .list(&home(), Some("secret.txt"), false)
            .await
            .unwrap_err();
        assert_eq!(err, VfsError::NotADirectory("/home/secret.txt".to_string()));
    }

    #[tokio::test]
    async fn change_dir_resolves_and_validates() {
        let vfs = Vfs::default();
        let path = vfs.change_dir(&home(), "documents").await.unwrap();
        assert_eq!(path, PathBuf::from("/home/documents"));

        let err = vfs.change_dir(&home(), "secret.txt").await.unwrap_err();
        assert_eq!(err, VfsError::NotADirectory("/home/secret.txt".to_string()));

        let err = vfs.change_dir(&home(), "missing").await.unwrap_err();
        assert_eq!(err, VfsError::NoSuchDirectory("/home/missing".to_string()));
    }

    #[tokio::test]
    async fn hidden_directory_is_unreachable_without_allow() {
        let vfs = Vfs::default();
        let err = vfs.change_dir(&home(), "trash").await.unwrap_err();
        assert_eq!(err, VfsError::NoSuchDirectory("/home/trash".to_string()));

        // the trash browser walks with allow_hidden
        let info = vfs
            .lookup(Path::new("/home/trash"), true)
            .await
            .unwrap();
        assert!(info.kind.is_dir());
        assert!(info.hidden);
    }

    #[tokio::test]
    async fn mid_path_file_is_not_found() {
        let vfs = Vfs::default();
        let err = vfs
            .list(&home(), Some("secret.txt/inner"), false)
            .await
            .unwrap_err();
        assert_eq!(
            err,
            VfsError::NoSuchPath("/home/secret.txt/inner".to_string())
        );
    }

    #[tokio::test]
    async fn locked_file_read_mentions_unlock() {
        let vfs = Vfs::default();
        let err = vfs.read_file(&home(), "secret.txt").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "secret.txt is locked. Use: unlock secret.txt <password>"
        );
    }

    #[tokio::test]
    async fn wrong_password_leaves_file_locked() {
        let vfs = Vfs::default();
        let err = vfs.unlock(&home(), "secret.txt", "wrong").await.unwrap_err();
        assert_eq!(err, VfsError::IncorrectPassword);

        let err = vfs.read_file(&home(), "secret.txt").await.unwrap_err();
        assert!(matches!(err, VfsError::Locked(_)));
    }

    #[tokio::test]
    async fn unlock_then_read_succeeds() {
        let vfs = Vfs::default();
        let msg = vfs
            .unlock(&home(), "secret.txt", "safepassword")
            .await
            .unwrap();
        assert_eq!(msg, "secret.txt unlocked.");

        let view = vfs.read_file(&home(), "secret.txt").await.unwrap();
        assert!(view.content.starts_with("Nice try"));
        assert_eq!(view.action, Some(OpenAction::Congrats));

        let err = vfs
            .unlock(&home(), "secret.txt", "safepassword")
            .await
            .unwrap_err();
        assert_eq!(err, VfsError::AlreadyUnlocked("secret.txt".to_string()));
    }

    #[tokio::test]
    async fn unlock_is_visible_through_shared_handle() {
        let vfs = Arc::new(Vfs::default());
        let reader = Arc::clone(&vfs);

        vfs.unlock(&home(), "secret.txt", "safepassword")
            .await
            .unwrap();

        // a different holder of the Arc sees the mutation
        assert!(reader.read_file(&home(), "secret.txt").await.is_ok());
    }

    #[tokio::test]
    async fn unlock_of_directory_is_no_such_file() {
        let vfs = Vfs::default();
        let err = vfs.unlock(&home(), "games", "pw").await.unwrap_err();
        assert_eq!(err, VfsError::NoSuchFile("games".to_string()));
    }

    #[tokio::test]
    async fn read_dir_carries_kind_and_lock_flags() {
        let vfs = Vfs::default();
        let entries = vfs.read_dir(&home(), None, false).await.unwrap();
        let secret = entries.iter().find(|e| e.name == "secret.txt").unwrap();
        assert!(secret.kind.is_file());
        assert!(secret.locked);

        let games = entries.iter().find(|e| e.name == "games").unwrap();
        assert!(games.kind.is_dir());
    }
}
