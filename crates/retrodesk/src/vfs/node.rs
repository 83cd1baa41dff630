//! VFS node types and the hand-authored portfolio tree.

use std::collections::HashMap;

/// UI action attached to a node.
///
/// Opening a tagged node triggers a desktop action instead of (or in
/// addition to) displaying content. The shell maps each tag to a window;
/// the tag lives on the node so no dispatch layer has to special-case
/// names or paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenAction {
    /// Open the resume window (and the PDF, where a front end supports it).
    Resume,
    /// Show the trash unlock code.
    TrashCode,
    /// Launch the Snake game window.
    Snake,
    /// Launch the phishing mini-game window.
    PhishFish,
    /// Show the congratulations window.
    Congrats,
}

/// A lock on a file. Presence means locked; [`crate::vfs::Vfs::unlock`]
/// removes it in place, irreversibly for the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lock {
    /// Plaintext password, compared exactly. Intentionally toy: this is a
    /// puzzle in a fictional desktop, not an access-control mechanism.
    pub password: String,
}

/// A file in the virtual tree.
#[derive(Debug, Clone, Default)]
pub struct FileNode {
    pub content: String,
    pub hidden: bool,
    pub lock: Option<Lock>,
    pub action: Option<OpenAction>,
    /// Out-of-band asset (e.g. a PDF) a front end may open alongside.
    pub url: Option<String>,
}

/// A node in the virtual filesystem tree.
#[derive(Debug, Clone)]
pub enum VfsNode {
    Directory {
        children: HashMap<String, VfsNode>,
        hidden: bool,
        /// Launcher tag: opening this directory opens a window instead of
        /// navigating into it (the game folders).
        action: Option<OpenAction>,
    },
    File(FileNode),
}

impl VfsNode {
    /// Visible directory with the given children.
    pub fn dir(children: impl IntoIterator<Item = (&'static str, VfsNode)>) -> Self {
        VfsNode::Directory {
            children: children
                .into_iter()
                .map(|(name, node)| (name.to_string(), node))
                .collect(),
            hidden: false,
            action: None,
        }
    }

    /// Plain visible file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        VfsNode::File(FileNode {
            content: content.into(),
            ..FileNode::default()
        })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, VfsNode::Directory { .. })
    }

    pub fn hidden(&self) -> bool {
        match self {
            VfsNode::Directory { hidden, .. } => *hidden,
            VfsNode::File(f) => f.hidden,
        }
    }

    pub fn action(&self) -> Option<OpenAction> {
        match self {
            VfsNode::Directory { action, .. } => *action,
            VfsNode::File(f) => f.action,
        }
    }

    fn with_hidden(mut self) -> Self {
        match &mut self {
            VfsNode::Directory { hidden, .. } => *hidden = true,
            VfsNode::File(f) => f.hidden = true,
        }
        self
    }

    fn with_action(mut self, action: OpenAction) -> Self {
        match &mut self {
            VfsNode::Directory { action: a, .. } => *a = Some(action),
            VfsNode::File(f) => f.action = Some(action),
        }
        self
    }

    fn with_lock(mut self, password: &str) -> Self {
        debug_assert!(!password.is_empty(), "a lock always carries a password");
        if let VfsNode::File(f) = &mut self {
            f.lock = Some(Lock {
                password: password.to_string(),
            });
        }
        self
    }

    fn with_url(mut self, url: &str) -> Self {
        if let VfsNode::File(f) = &mut self {
            f.url = Some(url.to_string());
        }
        self
    }
}

/// The seeded portfolio tree.
///
/// `/home/games/{snake,phishfish}` are launcher directories, the resume
/// lives under `/home/documents`, the trash is hidden (reachable only by
/// the trash browser), and `secret.txt` is the password puzzle.
pub fn default_tree() -> VfsNode {
    VfsNode::dir([(
        "home",
        VfsNode::dir([
            (
                "games",
                VfsNode::dir([
                    ("snake", VfsNode::dir([]).with_action(OpenAction::Snake)),
                    (
                        "phishfish",
                        VfsNode::dir([]).with_action(OpenAction::PhishFish),
                    ),
                ]),
            ),
            (
                "documents",
                VfsNode::dir([(
                    "resume.txt",
                    VfsNode::file("Resume\n")
                        .with_action(OpenAction::Resume)
                        .with_url("/assets/resume.pdf"),
                )]),
            ),
            (
                "trash",
                VfsNode::dir([(
                    "delete",
                    VfsNode::file("delete\n").with_action(OpenAction::TrashCode),
                )])
                .with_hidden(),
            ),
            (
                "secret.txt",
                VfsNode::file("Nice try \n\nUse: unlock secret.txt [password]\n")
                    .with_lock("safepassword")
                    .with_action(OpenAction::Congrats),
            ),
        ]),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tree_shape() {
        let root = default_tree();
        let VfsNode::Directory { children, .. } = &root else {
            panic!("root must be a directory");
        };
        let home = &children["home"];
        let VfsNode::Directory { children: home_children, .. } = home else {
            panic!("/home must be a directory");
        };
        assert!(home_children["trash"].hidden());
        assert!(!home_children["documents"].hidden());

        let VfsNode::File(secret) = &home_children["secret.txt"] else {
            panic!("secret.txt must be a file");
        };
        assert!(secret.lock.is_some());
        assert_eq!(secret.action, Some(OpenAction::Congrats));
    }

    #[test]
    fn game_folders_are_launchers() {
        let root = default_tree();
        let VfsNode::Directory { children, .. } = &root else {
            unreachable!()
        };
        let VfsNode::Directory { children: home, .. } = &children["home"] else {
            unreachable!()
        };
        let VfsNode::Directory { children: games, .. } = &home["games"] else {
            panic!("/home/games must be a directory");
        };
        assert_eq!(games["snake"].action(), Some(OpenAction::Snake));
        assert_eq!(games["phishfish"].action(), Some(OpenAction::PhishFish));
    }
}
