//! Retrodesk - simulated retro desktop engine
//!
//! The engine behind a nostalgia-themed desktop: an in-memory virtual
//! filesystem, a terminal command dispatcher, and a window manager with
//! z-order, drag offsets, and browser navigation stacks. Presentation is
//! left to front ends; this crate owns the state machines they render.
//!
//! # Example
//!
//! ```rust
//! use retrodesk::{Desktop, WindowId};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut desk = Desktop::new();
//!     desk.open_window(WindowId::Terminal);
//!
//!     let out = desk.run_command("cd documents").await;
//!     assert!(out.lines.is_empty());
//!
//!     let out = desk.run_command("pwd").await;
//!     assert_eq!(out.lines[0].value(), "/home/documents");
//! }
//! ```

mod clock;
mod desktop;
mod error;
mod stats;
pub mod terminal;
pub mod vfs;

pub use clock::{Clock, SystemClock};
pub use desktop::{
    Browser, Desktop, DragChrome, NavPop, NavStack, OpenOutcome, Point, WindowId, WindowManager,
    HOST, USER,
};
pub use error::{Error, Result};
pub use stats::{CatchStats, StatsStore};
pub use terminal::{prompt_path, TermLine, TermOutput, Terminal};

use std::path::PathBuf;
use std::sync::Arc;

use vfs::{Vfs, VfsNode};

/// Builder for a customized [`Desktop`].
pub struct DesktopBuilder {
    tree: Option<VfsNode>,
    clock: Option<Arc<dyn Clock>>,
    owner: String,
    cwd: PathBuf,
}

impl Default for DesktopBuilder {
    fn default() -> Self {
        Self {
            tree: None,
            clock: None,
            owner: USER.to_string(),
            cwd: PathBuf::from("/home"),
        }
    }
}

impl DesktopBuilder {
    /// Use a custom VFS tree instead of the default portfolio tree.
    pub fn tree(mut self, tree: VfsNode) -> Self {
        self.tree = Some(tree);
        self
    }

    /// Use a custom clock (tests pin the time this way).
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set the line `whoami` prints.
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    /// Set the terminal's starting directory.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Build the desktop session.
    pub fn build(self) -> Desktop {
        let vfs = Arc::new(self.tree.map(Vfs::new).unwrap_or_default());
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Desktop::from_parts(vfs, clock, self.owner, self.cwd)
    }
}

impl Desktop {
    /// Create a new DesktopBuilder for customized configuration.
    pub fn builder() -> DesktopBuilder {
        DesktopBuilder::default()
    }
}
