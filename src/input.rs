//! Pointer event vocabulary fed in by the hosting event loop.

use crate::geometry::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Primary button pressed.
    Down,
    /// Pointer moved. Captured by the active gesture session when one exists.
    Moved,
    /// Primary button released, wherever the pointer happens to be.
    Up,
    /// Double-activation as reported by the host event source.
    DoubleClick,
}

/// One pointer event in desktop-local coordinates.
///
/// The host is expected to deliver events in temporal order and with a
/// single pointer device: at most one press-move-release cycle is in
/// flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub const fn new(kind: PointerEventKind, position: Point) -> Self {
        Self { kind, position }
    }

    pub const fn down(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Moved, Point::new(x, y))
    }

    pub const fn up(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub const fn double_click(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::DoubleClick, Point::new(x, y))
    }
}
