//! Per-gesture session state.
//!
//! A session is an explicit object owned by the manager for exactly one
//! press-move*-release cycle. There is no ambient per-target callback
//! state: the global release broadcast simply discards the session.

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, RESIZE_HANDLE_SIZE};
use crate::geometry::{Point, Size, clamp_move, clamp_resize};
use crate::window::{Desktop, DesktopId, WindowId};

/// Which gesture the active session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Drag,
    Resize,
}

/// Move gesture: pointer presses on a title bar, window follows the
/// pointer delta.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    pub desktop: DesktopId,
    pub window: WindowId,
    /// Window (left, top) at press time.
    pub start_origin: Point,
    pub start_pointer: Point,
}

impl DragSession {
    /// Candidate position = start origin + pointer delta, clamped per axis
    /// against the desktop bounds using the window's current size.
    pub fn update(&self, desktop: &mut Desktop, pointer: Point) {
        let bounds = desktop.bounds();
        let Some(window) = desktop.window_mut(self.window) else {
            return;
        };
        let (dx, dy) = pointer.delta_from(self.start_pointer);
        let proposed = self.start_origin.offset(dx, dy);
        let accepted = clamp_move(window.rect(), proposed, bounds);
        window.set_origin(accepted);
    }
}

/// Corner-resize gesture: pointer presses on the bottom-right handle,
/// window size follows the handle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResizeSession {
    pub desktop: DesktopId,
    pub window: WindowId,
    /// Handle (left, top) in window-local coordinates at press time.
    pub start_handle: Point,
    pub start_pointer: Point,
}

impl ResizeSession {
    /// Candidate handle position = start + pointer delta, clamped per axis
    /// against the window's resulting right/bottom edge and the minimum
    /// size. An accepted axis moves the handle and the matching window
    /// extent together: width = handle.left + handle width, and likewise
    /// for height.
    pub fn update(&self, desktop: &mut Desktop, pointer: Point) {
        let bounds = desktop.bounds();
        let Some(window) = desktop.window_mut(self.window) else {
            return;
        };
        let (dx, dy) = pointer.delta_from(self.start_pointer);
        let proposed = self.start_handle.offset(dx, dy);
        let handle = Size::new(RESIZE_HANDLE_SIZE, RESIZE_HANDLE_SIZE);
        let min = Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        let accepted = clamp_resize(window.rect(), proposed, handle, min, bounds);
        window.set_size(Size::new(
            accepted.x + RESIZE_HANDLE_SIZE,
            accepted.y + RESIZE_HANDLE_SIZE,
        ));
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum GestureSession {
    Drag(DragSession),
    Resize(ResizeSession),
}

impl GestureSession {
    pub fn desktop(&self) -> DesktopId {
        match self {
            Self::Drag(drag) => drag.desktop,
            Self::Resize(resize) => resize.desktop,
        }
    }

    pub fn window(&self) -> WindowId {
        match self {
            Self::Drag(drag) => drag.window,
            Self::Resize(resize) => resize.window,
        }
    }

    pub fn kind(&self) -> SessionKind {
        match self {
            Self::Drag(_) => SessionKind::Drag,
            Self::Resize(_) => SessionKind::Resize,
        }
    }

    pub fn update(&self, desktop: &mut Desktop, pointer: Point) {
        match self {
            Self::Drag(drag) => drag.update(desktop, pointer),
            Self::Resize(resize) => resize.update(desktop, pointer),
        }
    }
}
