//! Titlebar drag state.
//!
//! A window renders centered by default; dragging accumulates an offset
//! from that position. The offset resets to origin whenever the window
//! transitions Closed to Open.

/// Screen-space point or offset, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Per-window drag offset and in-flight drag state.
#[derive(Debug, Default)]
pub struct DragChrome {
    offset: Point,
    /// Pointer position minus the offset at mouse-down; present while a
    /// drag is in flight.
    grab: Option<Point>,
}

impl DragChrome {
    /// Titlebar mouse-down: capture the pointer's delta from the window's
    /// current rendered position.
    pub fn begin(&mut self, pointer: Point) {
        self.grab = Some(Point::new(
            pointer.x - self.offset.x,
            pointer.y - self.offset.y,
        ));
    }

    /// Pointer move: update the offset while a drag is in flight.
    pub fn drag_to(&mut self, pointer: Point) {
        if let Some(grab) = self.grab {
            self.offset = Point::new(pointer.x - grab.x, pointer.y - grab.y);
        }
    }

    /// Mouse-up: stop tracking the pointer, keep the offset.
    pub fn end(&mut self) {
        self.grab = None;
    }

    /// Return to the default centered position.
    pub fn reset(&mut self) {
        self.offset = Point::default();
        self.grab = None;
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn dragging(&self) -> bool {
        self.grab.is_some()
    }
}
