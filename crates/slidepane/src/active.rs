//! Active snap point tracking.
//!
//! The active snap point is owned by the caller (the surrounding drawer
//! component): the core reads it, derives its index by value equality, and
//! writes the newly chosen point back after every resolved snap. The handle
//! is a shared single-threaded cell so both sides see the same value
//! without a reactivity runtime.

use std::cell::Cell;
use std::rc::Rc;

use slidepane_core::SnapPoint;

/// Shared handle to the externally owned active snap point.
///
/// Clones share the same underlying value.
#[derive(Clone, Default)]
pub struct ActiveSnapPoint {
    inner: Rc<Cell<Option<SnapPoint>>>,
}

impl ActiveSnapPoint {
    pub fn new(initial: Option<SnapPoint>) -> Self {
        Self {
            inner: Rc::new(Cell::new(initial)),
        }
    }

    pub fn get(&self) -> Option<SnapPoint> {
        self.inner.get()
    }

    pub fn set(&self, value: Option<SnapPoint>) {
        self.inner.set(value);
    }
}

/// Values derived from the active snap point against the current
/// configuration. Recomputed on every dependency change, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActivePointSnapshot {
    /// Index of the active value within the snap points, by value equality.
    /// `None` when nothing is configured or nothing matches.
    pub index: Option<usize>,
    /// Whether the active point is the last (most open) configured one.
    pub is_last: bool,
    /// Whether the overlay should fade with drag progress right now.
    pub should_fade: bool,
}

/// Derives the active-point snapshot.
///
/// `snap_points` is `None` when the feature is not configured at all; in
/// that case fading is unconditionally on (the overlay tracks the whole
/// drag range). An out-of-range `fade_from_index` degrades to "no fade".
pub fn resolve_active_point(
    snap_points: Option<&[SnapPoint]>,
    fade_from_index: Option<usize>,
    active: Option<SnapPoint>,
) -> ActivePointSnapshot {
    let Some(points) = snap_points else {
        return ActivePointSnapshot {
            index: None,
            is_last: false,
            should_fade: true,
        };
    };

    let index = active.and_then(|value| points.iter().position(|&point| point == value));
    let is_last = matches!(index, Some(i) if i + 1 == points.len());
    let should_fade = match fade_from_index {
        Some(fade) if !points.is_empty() => points.get(fade).copied() == active && active.is_some(),
        _ => false,
    };

    ActivePointSnapshot {
        index,
        is_last,
        should_fade,
    }
}
