//! Desktop shell
//!
//! Owns the window manager, the per-window drag chrome, the terminal's
//! cwd, and the finder/trash navigation stacks, and routes user input to
//! the terminal dispatcher or the window manager.

mod drag;
mod manager;
mod nav;

pub use drag::{DragChrome, Point};
pub use manager::{WindowId, WindowManager};
pub use nav::{NavPop, NavStack};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::clock::Clock;
use crate::terminal::{commands::Context, TermOutput, Terminal};
use crate::vfs::{NodeKind, OpenAction, Vfs};

/// Prompt user name shown by the terminal front end.
pub const USER: &str = "visitor";
/// Prompt host name shown by the terminal front end.
pub const HOST: &str = "retrodesk";

/// The two file-browser windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Finder,
    Trash,
}

impl Browser {
    fn window(self) -> WindowId {
        match self {
            Browser::Finder => WindowId::Finder,
            Browser::Trash => WindowId::Trash,
        }
    }

    /// Only the trash browser may see hidden nodes.
    fn allow_hidden(self) -> bool {
        matches!(self, Browser::Trash)
    }
}

/// What a browser double-click resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A tagged node opened this window.
    Window(WindowId),
    /// Navigated into this directory.
    Folder(PathBuf),
    /// A locked file; the front end shows the password popup.
    Locked,
    /// An untagged file; nothing to do in the browser view.
    Plain,
    /// The entry disappeared from under the view.
    Missing,
}

/// The desktop session: window state, terminal, browsers, clock.
pub struct Desktop {
    vfs: Arc<Vfs>,
    windows: WindowManager,
    chrome: [DragChrome; WindowId::ALL.len()],
    terminal: Terminal,
    cwd: PathBuf,
    finder_nav: NavStack,
    trash_nav: NavStack,
    clock: Arc<dyn Clock>,
    owner: String,
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Desktop {
    /// Desktop over the default portfolio tree and the system clock.
    pub fn new() -> Self {
        crate::DesktopBuilder::default().build()
    }

    pub(crate) fn from_parts(
        vfs: Arc<Vfs>,
        clock: Arc<dyn Clock>,
        owner: String,
        cwd: PathBuf,
    ) -> Self {
        Self {
            vfs,
            windows: WindowManager::new(),
            chrome: Default::default(),
            terminal: Terminal::new(),
            cwd,
            finder_nav: NavStack::new("/"),
            trash_nav: NavStack::new("/home/trash"),
            clock,
            owner,
        }
    }

    // --- window-control surface -------------------------------------------

    /// Open a window; resets its drag offset if it was closed.
    pub fn open_window(&mut self, id: WindowId) {
        let was_closed = !self.windows.is_open(id);
        self.windows.open(id);
        if was_closed {
            self.chrome[id.index()].reset();
        }
    }

    pub fn close_window(&mut self, id: WindowId) {
        self.windows.close(id);
    }

    pub fn bring_to_front(&mut self, id: WindowId) {
        self.windows.bring_to_front(id);
    }

    /// Desktop icon double-click.
    pub fn click_icon(&mut self, id: WindowId) {
        self.open_window(id);
    }

    /// Mouse-down anywhere inside a window's bounds.
    pub fn click_window(&mut self, id: WindowId) {
        self.windows.bring_to_front(id);
    }

    /// Mouse-down on the desktop background, outside every window.
    ///
    /// Focus goes to the terminal specifically, when it is open.
    pub fn click_background(&mut self) {
        if self.windows.is_open(WindowId::Terminal) {
            self.windows.bring_to_front(WindowId::Terminal);
        }
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    // --- drag chrome -------------------------------------------------------

    /// Titlebar mouse-down: focus the window and start a drag.
    pub fn titlebar_down(&mut self, id: WindowId, pointer: Point) {
        self.windows.bring_to_front(id);
        self.chrome[id.index()].begin(pointer);
    }

    pub fn drag_move(&mut self, id: WindowId, pointer: Point) {
        self.chrome[id.index()].drag_to(pointer);
    }

    pub fn drag_end(&mut self, id: WindowId) {
        self.chrome[id.index()].end();
    }

    /// Offset from the window's default centered position.
    pub fn window_offset(&self, id: WindowId) -> Point {
        self.chrome[id.index()].offset()
    }

    // --- terminal ----------------------------------------------------------

    /// Dispatch one submitted terminal line.
    pub async fn run_command(&mut self, line: &str) -> TermOutput {
        // commands may open windows; transitions need the same chrome
        // reset as shell-initiated opens
        let before: Vec<bool> = WindowId::ALL
            .iter()
            .map(|id| self.windows.is_open(*id))
            .collect();

        let output = self
            .terminal
            .run(
                line,
                Context {
                    args: &[],
                    cwd: &mut self.cwd,
                    vfs: &self.vfs,
                    windows: &mut self.windows,
                    clock: &*self.clock,
                    owner: &self.owner,
                },
            )
            .await;

        for id in WindowId::ALL {
            if !before[id.index()] && self.windows.is_open(id) {
                self.chrome[id.index()].reset();
            }
        }

        output
    }

    /// The terminal's working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Terminal prompt, with `/home` rendered as `~`.
    pub fn prompt(&self) -> String {
        format!(
            "{USER}@{HOST}:{}$",
            crate::terminal::prompt_path(&self.cwd)
        )
    }

    // --- file browsers -----------------------------------------------------

    /// The directory a browser window is currently showing.
    pub fn browser_path(&self, browser: Browser) -> &Path {
        match browser {
            Browser::Finder => self.finder_nav.current(),
            Browser::Trash => self.trash_nav.current(),
        }
    }

    /// List a browser's current directory for rendering.
    pub async fn browser_entries(
        &self,
        browser: Browser,
    ) -> Result<Vec<crate::vfs::EntryInfo>, crate::vfs::VfsError> {
        self.vfs
            .read_dir(self.browser_path(browser), None, browser.allow_hidden())
            .await
    }

    /// Double-click on an entry in a browser window.
    ///
    /// The single place that branches on a node's action tag: tagged nodes
    /// open their window, directories navigate, locked files surface the
    /// lock.
    pub async fn open_entry(&mut self, browser: Browser, name: &str) -> OpenOutcome {
        let path = self.browser_path(browser).join(name);
        let info = match self.vfs.lookup(&path, browser.allow_hidden()).await {
            Ok(info) => info,
            Err(_) => return OpenOutcome::Missing,
        };

        // the lock wins over the action tag: the congrats window is the
        // reward for unlocking, not a way around it
        if info.kind.is_file() && info.locked {
            return OpenOutcome::Locked;
        }

        if let Some(action) = info.action {
            let id = window_for(action);
            self.open_window(id);
            return OpenOutcome::Window(id);
        }

        match info.kind {
            NodeKind::Directory => {
                let nav = match browser {
                    Browser::Finder => &mut self.finder_nav,
                    Browser::Trash => &mut self.trash_nav,
                };
                nav.push(path.clone());
                OpenOutcome::Folder(path)
            }
            NodeKind::File => OpenOutcome::Plain,
        }
    }

    /// Browser back button; at the root of the history the window closes
    /// instead.
    pub fn back(&mut self, browser: Browser) -> NavPop {
        let nav = match browser {
            Browser::Finder => &mut self.finder_nav,
            Browser::Trash => &mut self.trash_nav,
        };
        let pop = nav.back();
        if pop == NavPop::AtRoot {
            self.windows.close(browser.window());
        }
        pop
    }

    // --- misc --------------------------------------------------------------

    /// Menu bar clock string.
    pub fn menu_clock(&self) -> String {
        self.clock.menu_string()
    }

    /// Handle to the shared VFS.
    pub fn vfs(&self) -> Arc<Vfs> {
        Arc::clone(&self.vfs)
    }
}

/// Map a node's action tag to the window it opens.
fn window_for(action: OpenAction) -> WindowId {
    match action {
        OpenAction::Resume => WindowId::Resume,
        OpenAction::TrashCode => WindowId::TrashCode,
        OpenAction::Snake => WindowId::Snake,
        OpenAction::PhishFish => WindowId::PhishFish,
        OpenAction::Congrats => WindowId::Congrats,
    }
}
