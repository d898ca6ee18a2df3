//! Desktop-metaphor window chrome for embedding hosts.
//!
//! One or more bounded desktop areas host rectangular windows; each
//! window gets a title bar, can be dragged, resized from its bottom-right
//! corner, raised above siblings on interaction, and toggled between
//! normal and maximized layout. The host owns rendering and the event
//! loop; this crate owns the interaction state machine and the geometry
//! model.
//!
//! The host describes its desktops with [`DesktopSpec`]/[`WindowSpec`],
//! builds a [`WindowManager`] with [`WindowManager::init`], feeds pointer
//! events through [`WindowManager::handle_event`], wires its
//! document-wide pointer release to [`WindowManager::release_all`], and
//! reads geometry and stacking order back to paint.

pub mod chrome;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
mod session;
pub mod tracing_sub;
pub mod window;

pub use error::SetupError;
pub use geometry::{Point, Rect, Size};
pub use input::{PointerEvent, PointerEventKind};
pub use session::SessionKind;
pub use window::{
    CursorHint, Desktop, DesktopId, DesktopSpec, MaximizeState, Window, WindowId, WindowManager,
    WindowSpec,
};
