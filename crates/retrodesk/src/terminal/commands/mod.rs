//! Terminal command handlers
//!
//! Each handler implements the [`Command`] trait and receives a [`Context`]
//! bundling the VFS, the terminal's cwd, the window manager, and the clock.
//! Handlers are total: every outcome, including every failure, is returned
//! as terminal output.

mod files;
mod navigation;
mod system;
mod windows;

pub use files::{Cat, Ls, Unlock};
pub use navigation::{Cd, Pwd};
pub use system::{Help, Hint, Time, Whoami};
pub use windows::{Close, Open};

use async_trait::async_trait;
use std::path::PathBuf;

use super::TermOutput;
use crate::clock::Clock;
use crate::desktop::WindowManager;
use crate::vfs::Vfs;

/// Execution context for terminal commands.
pub struct Context<'a> {
    /// Command arguments (not including the command name).
    pub args: &'a [String],

    /// Current working directory (mutable; `cd` persists through this).
    pub cwd: &'a mut PathBuf,

    /// The shared virtual filesystem.
    pub vfs: &'a Vfs,

    /// Window open/close/focus state.
    pub windows: &'a mut WindowManager,

    /// Clock-string provider for the `time` command.
    pub clock: &'a dyn Clock,

    /// The `whoami` line.
    pub owner: &'a str,
}

/// Trait for terminal commands.
///
/// Handlers never fail: user-facing problems are communicated as returned
/// text, so the dispatcher needs no error handling of its own.
#[async_trait]
pub trait Command: Send + Sync {
    async fn run(&self, ctx: Context<'_>) -> TermOutput;
}
