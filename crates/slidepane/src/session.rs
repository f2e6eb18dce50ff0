//! Drag session bookkeeping: distance normalization and release velocity.
//!
//! The release resolver wants a direction-normalized distance (positive =
//! toward opening) and a velocity in px/ms derived from how long the whole
//! gesture took. Hosts that already track pointer kinematics can build a
//! [`crate::ReleaseInput`] themselves; this is the stock derivation.

use web_time::Instant;

use slidepane_core::Direction;

use crate::release::ReleaseInput;

/// Release velocity in px/ms from total distance moved and elapsed time.
///
/// Non-positive elapsed time yields zero rather than a division blowup.
pub fn release_velocity(distance_moved: f32, elapsed_ms: f32) -> f32 {
    if elapsed_ms <= 0.0 {
        0.0
    } else {
        distance_moved.abs() / elapsed_ms
    }
}

/// Tracks one pointer drag from press to release.
#[derive(Clone, Debug)]
pub struct DragSession {
    direction: Direction,
    start_position: f32,
    current_position: f32,
    started_at: Instant,
}

impl DragSession {
    /// Begins a session at the pointer-down position along the drag axis.
    pub fn start(direction: Direction, position: f32) -> Self {
        Self {
            direction,
            start_position: position,
            current_position: position,
            started_at: Instant::now(),
        }
    }

    /// Records a pointer move.
    pub fn update(&mut self, position: f32) {
        self.current_position = position;
    }

    /// Direction-normalized distance dragged so far; positive = toward
    /// opening.
    ///
    /// Screen coordinates grow downward/rightward, so for `Bottom`/`Right`
    /// panels opening means the pointer position decreases.
    pub fn dragged_distance(&self) -> f32 {
        if self.direction.is_positive() {
            self.start_position - self.current_position
        } else {
            self.current_position - self.start_position
        }
    }

    /// Finishes the session, producing the inputs for release resolution.
    pub fn release(&self, dismissible: bool) -> ReleaseInput {
        let elapsed_ms = self.started_at.elapsed().as_secs_f32() * 1000.0;
        ReleaseInput {
            dragged_distance: self.dragged_distance(),
            velocity: release_velocity(self.dragged_distance(), elapsed_ms),
            dismissible,
        }
    }
}
