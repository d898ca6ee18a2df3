//! Window chrome regions: title bar, resize handle, and icon derivation.
//!
//! Chrome geometry is derived from the window rect rather than stored, so
//! the resize handle is always re-homed to the bottom-right corner the
//! moment a resize or maximize changes the window's size.

use crate::constants::{RESIZE_HANDLE_SIZE, TITLE_BAR_HEIGHT};
use crate::geometry::{Point, Rect};

/// Which chrome region a desktop-local point falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChromeHit {
    TitleBar,
    ResizeHandle,
    Body,
}

/// Title bar strip of `window`, in desktop coordinates.
pub fn title_bar_rect(window: Rect) -> Rect {
    Rect::new(window.left, window.top, window.width, TITLE_BAR_HEIGHT)
}

/// Resize handle square at the bottom-right corner of `window`, in desktop
/// coordinates. Equals
/// `(width - RESIZE_HANDLE_SIZE, height - RESIZE_HANDLE_SIZE)` in
/// window-local terms.
pub fn resize_handle_rect(window: Rect) -> Rect {
    Rect::new(
        window.right() - RESIZE_HANDLE_SIZE,
        window.bottom() - RESIZE_HANDLE_SIZE,
        RESIZE_HANDLE_SIZE,
        RESIZE_HANDLE_SIZE,
    )
}

/// Classify `point` against the chrome of `window`.
///
/// Returns `None` when the point misses the window entirely. The handle
/// wins over the title bar when they would ever overlap, matching the
/// handle sitting on top of the stacking order within the window.
pub fn hit_test(window: Rect, point: Point) -> Option<ChromeHit> {
    if !window.contains(point) {
        return None;
    }
    if resize_handle_rect(window).contains(point) {
        return Some(ChromeHit::ResizeHandle);
    }
    if title_bar_rect(window).contains(point) {
        return Some(ChromeHit::TitleBar);
    }
    Some(ChromeHit::Body)
}

/// Derive the icon class from a window's class list: the first
/// whitespace-separated class carrying the `icon-` prefix, if any.
pub fn icon_from_classes(classes: &str) -> Option<String> {
    classes
        .split_whitespace()
        .find(|class| class.starts_with("icon-"))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_sits_at_the_bottom_right_corner() {
        let window = Rect::new(100, 50, 200, 150);
        let handle = resize_handle_rect(window);
        assert_eq!(handle, Rect::new(284, 184, 16, 16));
        assert_eq!(handle.right(), window.right());
        assert_eq!(handle.bottom(), window.bottom());
    }

    #[test]
    fn hit_test_classifies_chrome_regions() {
        let window = Rect::new(0, 0, 200, 150);
        assert_eq!(hit_test(window, Point::new(10, 10)), Some(ChromeHit::TitleBar));
        assert_eq!(hit_test(window, Point::new(190, 140)), Some(ChromeHit::ResizeHandle));
        assert_eq!(hit_test(window, Point::new(100, 80)), Some(ChromeHit::Body));
        assert_eq!(hit_test(window, Point::new(250, 80)), None);
    }

    #[test]
    fn icon_class_is_first_icon_prefixed_token() {
        assert_eq!(
            icon_from_classes("window icon-terminal focused"),
            Some("icon-terminal".to_owned())
        );
        assert_eq!(icon_from_classes("window focused"), None);
        assert_eq!(icon_from_classes(""), None);
    }
}
