use thiserror::Error;

/// Setup-time validation failures.
///
/// Gesture handling never raises these; a spec that cannot satisfy the
/// placement invariants is an integration bug surfaced loudly at
/// initialization instead of deep inside an event handler.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("desktop {desktop} bounds {width}x{height} cannot hold a minimum-size window")]
    InvalidBounds {
        desktop: usize,
        width: i32,
        height: i32,
    },

    #[error("window {title:?} ({width}x{height}) does not fit its desktop ({max_width}x{max_height})")]
    WindowTooLarge {
        title: String,
        width: i32,
        height: i32,
        max_width: i32,
        max_height: i32,
    },

    #[error("window {title:?} ({width}x{height}) is below the minimum chrome size")]
    WindowTooSmall {
        title: String,
        width: i32,
        height: i32,
    },
}
