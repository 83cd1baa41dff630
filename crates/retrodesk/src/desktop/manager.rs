//! Window open/close and z-order state.

/// The closed set of window kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowId {
    About,
    Finder,
    Terminal,
    PhishFish,
    Calculator,
    Snake,
    Resume,
    Trash,
    TrashCode,
    Congrats,
}

impl WindowId {
    /// Every tracked window, in slot order.
    pub const ALL: [WindowId; 10] = [
        WindowId::About,
        WindowId::Finder,
        WindowId::Terminal,
        WindowId::PhishFish,
        WindowId::Calculator,
        WindowId::Snake,
        WindowId::Resume,
        WindowId::Trash,
        WindowId::TrashCode,
        WindowId::Congrats,
    ];

    /// Stable lowercase name, used by the terminal `open`/`close` commands.
    pub fn name(&self) -> &'static str {
        match self {
            WindowId::About => "about",
            WindowId::Finder => "finder",
            WindowId::Terminal => "terminal",
            WindowId::PhishFish => "phishfish",
            WindowId::Calculator => "calculator",
            WindowId::Snake => "snake",
            WindowId::Resume => "resume",
            WindowId::Trash => "trash",
            WindowId::TrashCode => "trashcode",
            WindowId::Congrats => "congrats",
        }
    }

    /// Case-insensitive reverse of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<WindowId> {
        let lower = name.to_lowercase();
        WindowId::ALL.iter().copied().find(|id| id.name() == lower)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy)]
struct WindowSlot {
    open: bool,
    z: u32,
}

/// Base of the initial z-index range; slots start at `BASE_Z + index`, so
/// no two windows ever start tied.
const BASE_Z: u32 = 10;

/// Per-window open flag and z-order.
///
/// All slots exist for the life of the desktop session. `z` only ever
/// increases, via [`bring_to_front`](Self::bring_to_front); closing a
/// window leaves every z value untouched, so the frontmost window is
/// always the open one with the maximum z.
#[derive(Debug)]
pub struct WindowManager {
    slots: [WindowSlot; WindowId::ALL.len()],
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    pub fn new() -> Self {
        let mut slots = [WindowSlot { open: false, z: 0 }; WindowId::ALL.len()];
        for id in WindowId::ALL {
            slots[id.index()].z = BASE_Z + id.index() as u32;
        }
        Self { slots }
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.slots[id.index()].open
    }

    pub fn z_index(&self, id: WindowId) -> u32 {
        self.slots[id.index()].z
    }

    /// Open a window and bring it to the front.
    pub fn open(&mut self, id: WindowId) {
        self.slots[id.index()].open = true;
        self.bring_to_front(id);
        tracing::debug!(window = %id, "window opened");
    }

    /// Close a window. Does not alter any z-index.
    pub fn close(&mut self, id: WindowId) {
        self.slots[id.index()].open = false;
        tracing::debug!(window = %id, "window closed");
    }

    /// Raise a window above every tracked window, open or not.
    pub fn bring_to_front(&mut self, id: WindowId) {
        let max = self.slots.iter().map(|s| s.z).max().unwrap_or(BASE_Z);
        self.slots[id.index()].z = max + 1;
        tracing::debug!(window = %id, z = max + 1, "brought to front");
    }

    /// The open window with the greatest z-index, if any window is open.
    pub fn front(&self) -> Option<WindowId> {
        WindowId::ALL
            .iter()
            .copied()
            .filter(|id| self.is_open(*id))
            .max_by_key(|id| self.z_index(*id))
    }

    /// All currently open windows, in slot order.
    pub fn open_windows(&self) -> Vec<WindowId> {
        WindowId::ALL
            .iter()
            .copied()
            .filter(|id| self.is_open(*id))
            .collect()
    }
}
