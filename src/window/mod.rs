pub mod desktop;
mod window_manager;

pub use desktop::Desktop;
pub use window_manager::{CursorHint, DesktopSpec, WindowManager, WindowSpec};

use crate::chrome;
use crate::geometry::{Point, Rect, Size};

/// Identifies a desktop within the manager, by setup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DesktopId(pub usize);

/// Identifies a window within its desktop, by setup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub usize);

/// Whether a window currently fills its desktop.
///
/// The saved rect is snapshotted when maximizing and consumed on restore,
/// so `Normal` always means "no snapshot outstanding" regardless of how
/// often the window has been maximized before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaximizeState {
    Normal,
    Maximized { saved: Rect },
}

/// A positioned, sized, stackable chrome-wrapped panel.
///
/// Geometry lives here, not in the host's layout: sessions and the
/// maximize toggle mutate this model transactionally and the host reads
/// it back to paint.
#[derive(Debug, Clone)]
pub struct Window {
    title: String,
    icon: Option<String>,
    rect: Rect,
    z: u32,
    maximize: MaximizeState,
}

impl Window {
    pub(crate) fn new(title: String, icon: Option<String>, rect: Rect) -> Self {
        Self {
            title,
            icon,
            rect,
            z: 0,
            maximize: MaximizeState::Normal,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Icon class derived from the window's class list at setup, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Stacking index among siblings; strictly highest on the most
    /// recently raised window.
    pub fn z(&self) -> u32 {
        self.z
    }

    pub fn maximize_state(&self) -> MaximizeState {
        self.maximize
    }

    pub fn is_maximized(&self) -> bool {
        matches!(self.maximize, MaximizeState::Maximized { .. })
    }

    /// Title bar strip in desktop coordinates.
    pub fn title_bar(&self) -> Rect {
        chrome::title_bar_rect(self.rect)
    }

    /// Resize handle in desktop coordinates. Derived from the current
    /// rect, so it is re-homed to the bottom-right corner by every
    /// accepted resize and by the maximize toggle.
    pub fn resize_handle(&self) -> Rect {
        chrome::resize_handle_rect(self.rect)
    }

    pub(crate) fn set_origin(&mut self, origin: Point) {
        self.rect.left = origin.x;
        self.rect.top = origin.y;
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.rect.width = size.width;
        self.rect.height = size.height;
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    pub(crate) fn set_z(&mut self, z: u32) {
        self.z = z;
    }

    pub(crate) fn set_maximize(&mut self, state: MaximizeState) {
        self.maximize = state;
    }
}
