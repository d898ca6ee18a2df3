//! Shared crate-wide constants.

/// Height of the title bar strip along a window's top edge, in pixels.
///
/// The title bar is the drag surface for move gestures and the target of
/// the maximize double-click.
pub const TITLE_BAR_HEIGHT: i32 = 24;

/// Edge length of the square resize handle anchored at a window's
/// bottom-right corner, in pixels.
pub const RESIZE_HANDLE_SIZE: i32 = 16;

/// Minimum window width a resize gesture may reach.
///
/// Without a floor a window could be dragged down to the bare handle
/// width, leaving nothing to grab. Resize proposals below this value are
/// rejected per axis like any other out-of-bounds proposal.
pub const MIN_WINDOW_WIDTH: i32 = 48;

/// Minimum window height a resize gesture may reach.
///
/// Keeps the title bar and the resize handle from overlapping, so the two
/// chrome hit regions stay distinct.
pub const MIN_WINDOW_HEIGHT: i32 = TITLE_BAR_HEIGHT + RESIZE_HANDLE_SIZE;

/// Offset applied per window index when cascading initial placement:
/// window `i` starts at `((i + 1) * CASCADE_STEP)` on both axes.
pub const CASCADE_STEP: i32 = 50;
