use super::{MaximizeState, Window, WindowId};
use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::geometry::{Point, Rect, Size, clamp_into_bounds};

/// One bounded desktop area and the windows it owns.
///
/// The bounds are the movement and resize boundary for every window on
/// this desktop; the placement invariant (`0 <= left`, `0 <= top`,
/// `left + width <= bounds.width`, `top + height <= bounds.height`) holds
/// at all times, including mid-gesture.
#[derive(Debug, Clone)]
pub struct Desktop {
    bounds: Size,
    windows: Vec<Window>,
}

impl Desktop {
    pub(crate) fn new(bounds: Size) -> Self {
        Self {
            bounds,
            windows: Vec::new(),
        }
    }

    pub(crate) fn push_window(&mut self, window: Window) -> WindowId {
        self.windows.push(window);
        WindowId(self.windows.len() - 1)
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(id.0)
    }

    pub(crate) fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(id.0)
    }

    pub fn windows(&self) -> impl Iterator<Item = (WindowId, &Window)> {
        self.windows
            .iter()
            .enumerate()
            .map(|(index, window)| (WindowId(index), window))
    }

    /// Window ids back-to-front: paint in this order. Ties in z keep
    /// setup order.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut ids: Vec<WindowId> = (0..self.windows.len()).map(WindowId).collect();
        ids.sort_by_key(|id| self.windows[id.0].z());
        ids
    }

    /// Topmost window whose rect contains `point`, if any.
    pub fn topmost_at(&self, point: Point) -> Option<WindowId> {
        self.stacking_order()
            .into_iter()
            .rev()
            .find(|id| self.windows[id.0].rect().contains(point))
    }

    /// Assign `id` the strictly highest stacking index among siblings:
    /// current maximum plus one.
    ///
    /// Monotonic, not idempotent: raising the already-topmost window still
    /// increments, so interleaved raises across windows stay strictly
    /// ordered by recency.
    pub(crate) fn raise(&mut self, id: WindowId) {
        let max = self.windows.iter().map(Window::z).max().unwrap_or(0);
        let Some(window) = self.windows.get_mut(id.0) else {
            return;
        };
        window.set_z(max + 1);
        tracing::debug!(window = id.0, z = max + 1, "raised window");
    }

    /// Replace the boundary and re-fit every window into it.
    ///
    /// Maximized windows keep filling the desktop; normal windows are
    /// clamped into the new bounds, shrinking only as far as the minimum
    /// size. Callers must pass bounds that can hold a minimum-size window.
    pub(crate) fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
        let min = Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        for window in &mut self.windows {
            match window.maximize_state() {
                MaximizeState::Maximized { .. } => {
                    window.set_rect(Rect::new(0, 0, bounds.width, bounds.height));
                }
                MaximizeState::Normal => {
                    window.set_rect(clamp_into_bounds(window.rect(), bounds, min));
                }
            }
        }
        tracing::debug!(
            width = bounds.width,
            height = bounds.height,
            "desktop bounds updated"
        );
    }
}
