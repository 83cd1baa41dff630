//! Per-browser navigation history.

use std::path::{Path, PathBuf};

/// Result of a back navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavPop {
    /// Moved back to this path.
    Moved(PathBuf),
    /// Already at the root of the history; the caller closes the window
    /// instead of popping.
    AtRoot,
}

/// Browser-style "back" history for one file-browser window.
///
/// Invariant: never empty. Pushing records a folder-open; popping the last
/// element is refused and reported as [`NavPop::AtRoot`].
#[derive(Debug, Clone)]
pub struct NavStack {
    stack: Vec<PathBuf>,
}

impl NavStack {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            stack: vec![root.into()],
        }
    }

    /// The directory currently shown.
    pub fn current(&self) -> &Path {
        self.stack.last().expect("nav stack is never empty")
    }

    /// Record a folder-open.
    pub fn push(&mut self, path: PathBuf) {
        self.stack.push(path);
    }

    /// Go back one entry, or report that the history is exhausted.
    pub fn back(&mut self) -> NavPop {
        if self.stack.len() <= 1 {
            return NavPop::AtRoot;
        }
        self.stack.pop();
        NavPop::Moved(self.current().to_path_buf())
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_pops_to_previous_path() {
        let mut nav = NavStack::new("/");
        nav.push(PathBuf::from("/home"));
        nav.push(PathBuf::from("/home/games"));

        assert_eq!(nav.back(), NavPop::Moved(PathBuf::from("/home")));
        assert_eq!(nav.current(), Path::new("/home"));
    }

    #[test]
    fn back_at_root_refuses_to_pop() {
        let mut nav = NavStack::new("/");
        assert_eq!(nav.back(), NavPop::AtRoot);
        assert_eq!(nav.current(), Path::new("/"));
        assert_eq!(nav.depth(), 1);
    }
}
