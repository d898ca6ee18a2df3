use super::{Desktop, DesktopId, MaximizeState, Window, WindowId};
use crate::chrome::{self, ChromeHit};
use crate::constants::{CASCADE_STEP, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, RESIZE_HANDLE_SIZE};
use crate::error::SetupError;
use crate::geometry::{Point, Rect, Size, clamp_into_bounds};
use crate::input::{PointerEvent, PointerEventKind};
use crate::session::{DragSession, GestureSession, ResizeSession, SessionKind};

/// Declarative description of one desktop area and its windows, supplied
/// by the host in place of container enumeration.
#[derive(Debug, Clone)]
pub struct DesktopSpec {
    pub width: i32,
    pub height: i32,
    pub windows: Vec<WindowSpec>,
}

impl DesktopSpec {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            windows: Vec::new(),
        }
    }

    pub fn window(mut self, spec: WindowSpec) -> Self {
        self.windows.push(spec);
        self
    }
}

/// Declarative description of one window: its title attribute, class list
/// (for icon derivation), and initial size. Position is assigned by the
/// cascade at setup.
#[derive(Debug, Clone)]
pub struct WindowSpec {
    pub title: String,
    pub classes: String,
    pub width: i32,
    pub height: i32,
}

impl WindowSpec {
    pub fn new(title: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            title: title.into(),
            classes: String::new(),
            width,
            height,
        }
    }

    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = classes.into();
        self
    }
}

/// Cursor shape the host should show for a given pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    /// Over a title bar.
    Move,
    /// Over a bottom-right resize handle.
    ResizeSe,
}

/// Owns every desktop, the single active gesture session, and pointer
/// dispatch.
///
/// Mutual exclusion is structural: there is one session slot system-wide,
/// and starting a new session implicitly ends any prior one through the
/// same release contract the document-wide safety net uses.
#[derive(Debug)]
pub struct WindowManager {
    desktops: Vec<Desktop>,
    session: Option<GestureSession>,
}

impl WindowManager {
    /// Setup entry point: initialize all windows found under all desktop
    /// containers.
    ///
    /// Validates bounds and window sizes loudly, derives icon classes
    /// from each window's class list, attaches chrome, and assigns the
    /// cascading initial offset `((index + 1) * CASCADE_STEP)` on both
    /// axes, clamped into the desktop so the placement invariant holds
    /// from the first frame.
    pub fn init(specs: Vec<DesktopSpec>) -> Result<Self, SetupError> {
        let min = Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
        let mut desktops = Vec::with_capacity(specs.len());
        for (desktop_index, spec) in specs.into_iter().enumerate() {
            if spec.width < min.width || spec.height < min.height {
                return Err(SetupError::InvalidBounds {
                    desktop: desktop_index,
                    width: spec.width,
                    height: spec.height,
                });
            }
            let bounds = Size::new(spec.width, spec.height);
            let mut desktop = Desktop::new(bounds);
            for (window_index, window) in spec.windows.into_iter().enumerate() {
                if window.width < min.width || window.height < min.height {
                    return Err(SetupError::WindowTooSmall {
                        title: window.title,
                        width: window.width,
                        height: window.height,
                    });
                }
                if window.width > bounds.width || window.height > bounds.height {
                    return Err(SetupError::WindowTooLarge {
                        title: window.title,
                        width: window.width,
                        height: window.height,
                        max_width: bounds.width,
                        max_height: bounds.height,
                    });
                }
                let offset = (window_index as i32 + 1) * CASCADE_STEP;
                let rect = clamp_into_bounds(
                    Rect::new(offset, offset, window.width, window.height),
                    bounds,
                    min,
                );
                let icon = chrome::icon_from_classes(&window.classes);
                desktop.push_window(Window::new(window.title, icon, rect));
            }
            tracing::debug!(
                desktop = desktop_index,
                windows = desktop.len(),
                "initialized desktop"
            );
            desktops.push(desktop);
        }
        Ok(Self {
            desktops,
            session: None,
        })
    }

    pub fn desktop(&self, id: DesktopId) -> Option<&Desktop> {
        self.desktops.get(id.0)
    }

    pub fn desktops(&self) -> impl Iterator<Item = (DesktopId, &Desktop)> {
        self.desktops
            .iter()
            .enumerate()
            .map(|(index, desktop)| (DesktopId(index), desktop))
    }

    /// The in-flight gesture, if any.
    pub fn active_session(&self) -> Option<(DesktopId, WindowId, SessionKind)> {
        self.session
            .as_ref()
            .map(|session| (session.desktop(), session.window(), session.kind()))
    }

    /// Dispatch one pointer event delivered for `desktop`. Returns whether
    /// the event was consumed by window chrome.
    pub fn handle_event(&mut self, desktop: DesktopId, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => self.pointer_down(desktop, event.position),
            PointerEventKind::Moved => self.pointer_moved(desktop, event.position),
            PointerEventKind::Up => {
                let had_session = self.session.is_some();
                self.release_all();
                had_session
            }
            PointerEventKind::DoubleClick => self.double_click(desktop, event.position),
        }
    }

    /// Document-wide release safety net: end the active gesture session,
    /// wherever the release landed. Idempotent; with no session active it
    /// changes nothing.
    pub fn release_all(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(
                desktop = session.desktop().0,
                window = session.window().0,
                kind = ?session.kind(),
                "session ended"
            );
        }
    }

    /// Toggle `window` between normal and maximized layout.
    ///
    /// Normal: snapshot the rect and fill the desktop. Maximized: restore
    /// the snapshot (clamped, in case the bounds shrank meanwhile) and
    /// clear it. Any active session is ended first; the resize handle
    /// re-homes to the new bottom-right corner through its derivation.
    pub fn toggle_maximize(&mut self, desktop_id: DesktopId, window_id: WindowId) {
        self.release_all();
        let Some(desktop) = self.desktops.get_mut(desktop_id.0) else {
            tracing::warn!(desktop = desktop_id.0, "maximize toggle for unknown desktop");
            return;
        };
        let bounds = desktop.bounds();
        let Some(window) = desktop.window_mut(window_id) else {
            tracing::warn!(window = window_id.0, "maximize toggle for unknown window");
            return;
        };
        match window.maximize_state() {
            MaximizeState::Normal => {
                let saved = window.rect();
                window.set_rect(Rect::new(0, 0, bounds.width, bounds.height));
                window.set_maximize(MaximizeState::Maximized { saved });
                tracing::debug!(desktop = desktop_id.0, window = window_id.0, "maximized window");
            }
            MaximizeState::Maximized { saved } => {
                let min = Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
                window.set_rect(clamp_into_bounds(saved, bounds, min));
                window.set_maximize(MaximizeState::Normal);
                tracing::debug!(desktop = desktop_id.0, window = window_id.0, "restored window");
            }
        }
    }

    /// Update a desktop's boundary, re-fitting its windows (maximized
    /// windows keep filling the desktop). Bounds too small for a
    /// minimum-size window are rejected loudly.
    pub fn set_desktop_bounds(
        &mut self,
        desktop_id: DesktopId,
        width: i32,
        height: i32,
    ) -> Result<(), SetupError> {
        if width < MIN_WINDOW_WIDTH || height < MIN_WINDOW_HEIGHT {
            return Err(SetupError::InvalidBounds {
                desktop: desktop_id.0,
                width,
                height,
            });
        }
        let Some(desktop) = self.desktops.get_mut(desktop_id.0) else {
            tracing::warn!(desktop = desktop_id.0, "bounds update for unknown desktop");
            return Ok(());
        };
        desktop.set_bounds(Size::new(width, height));
        Ok(())
    }

    /// Cursor shape for `position`: `Move` over a title bar, `ResizeSe`
    /// over a resize handle, topmost window first. Pure query.
    pub fn cursor_hint(&self, desktop_id: DesktopId, position: Point) -> CursorHint {
        let Some(desktop) = self.desktops.get(desktop_id.0) else {
            return CursorHint::Default;
        };
        let Some(window_id) = desktop.topmost_at(position) else {
            return CursorHint::Default;
        };
        let Some(window) = desktop.window(window_id) else {
            return CursorHint::Default;
        };
        match chrome::hit_test(window.rect(), position) {
            Some(ChromeHit::ResizeHandle) => CursorHint::ResizeSe,
            Some(ChromeHit::TitleBar) => CursorHint::Move,
            _ => CursorHint::Default,
        }
    }

    fn pointer_down(&mut self, desktop_id: DesktopId, position: Point) -> bool {
        // A press begins a new cycle; any lingering session ends first.
        self.release_all();
        let Some(desktop) = self.desktops.get_mut(desktop_id.0) else {
            tracing::warn!(desktop = desktop_id.0, "pointer event for unknown desktop");
            return false;
        };
        let Some(window_id) = desktop.topmost_at(position) else {
            return false;
        };
        let Some(rect) = desktop.window(window_id).map(Window::rect) else {
            return false;
        };
        match chrome::hit_test(rect, position) {
            Some(ChromeHit::TitleBar) => {
                desktop.raise(window_id);
                self.session = Some(GestureSession::Drag(DragSession {
                    desktop: desktop_id,
                    window: window_id,
                    start_origin: rect.origin(),
                    start_pointer: position,
                }));
                tracing::debug!(
                    desktop = desktop_id.0,
                    window = window_id.0,
                    "drag session started"
                );
                true
            }
            Some(ChromeHit::ResizeHandle) => {
                desktop.raise(window_id);
                let start_handle = Point::new(
                    rect.width - RESIZE_HANDLE_SIZE,
                    rect.height - RESIZE_HANDLE_SIZE,
                );
                self.session = Some(GestureSession::Resize(ResizeSession {
                    desktop: desktop_id,
                    window: window_id,
                    start_handle,
                    start_pointer: position,
                }));
                tracing::debug!(
                    desktop = desktop_id.0,
                    window = window_id.0,
                    "resize session started"
                );
                true
            }
            // Body presses neither raise nor start a session.
            _ => false,
        }
    }

    fn pointer_moved(&mut self, desktop_id: DesktopId, position: Point) -> bool {
        // The active session captures all moves on its desktop; moves with
        // no session active are hover traffic and ignored here.
        let Some(session) = self.session else {
            return false;
        };
        if session.desktop() != desktop_id {
            return false;
        }
        let Some(desktop) = self.desktops.get_mut(desktop_id.0) else {
            return false;
        };
        session.update(desktop, position);
        true
    }

    fn double_click(&mut self, desktop_id: DesktopId, position: Point) -> bool {
        // The maximize toggle never runs under an active session.
        self.release_all();
        let Some(desktop) = self.desktops.get(desktop_id.0) else {
            tracing::warn!(desktop = desktop_id.0, "pointer event for unknown desktop");
            return false;
        };
        let Some(window_id) = desktop.topmost_at(position) else {
            return false;
        };
        let Some(window) = desktop.window(window_id) else {
            return false;
        };
        if chrome::hit_test(window.rect(), position) != Some(ChromeHit::TitleBar) {
            return false;
        }
        self.toggle_maximize(desktop_id, window_id);
        true
    }
}
