//! Fixed design parameters for snap transitions and release heuristics.
//!
//! These are tuning constants, not derived values. They are shared between
//! the release resolver and whatever host applies the staged transitions,
//! so they live here rather than inside either consumer.

/// Duration of an eased snap transition, in milliseconds.
pub const TRANSITION_DURATION_MS: u64 = 500;

/// Cubic-bezier control points (x1, y1, x2, y2) for the snap easing curve.
///
/// A strong ease-out: the panel covers most of the distance early and
/// settles gently into the snap point.
pub const TRANSITION_EASE: [f32; 4] = [0.32, 0.72, 0.0, 1.0];

/// Release velocity (px/ms) above which a moderate fling snaps to the
/// adjacent snap point instead of the nearest one by distance.
pub const VELOCITY_THRESHOLD: f32 = 0.4;

/// Release velocity (px/ms) above which a fling skips intermediate snap
/// points entirely: toward closing it dismisses (or returns to the first
/// point), toward opening it jumps straight to the last point.
///
/// Disabled by the sequential-snap configuration flag.
pub const FLING_VELOCITY_THRESHOLD: f32 = 2.0;

/// Fraction of the viewport extent a drag must stay under for the
/// adjacent-point fling rule to apply; longer drags fall through to
/// nearest-by-distance resolution.
pub const FLING_DISTANCE_FRACTION: f32 = 0.4;
