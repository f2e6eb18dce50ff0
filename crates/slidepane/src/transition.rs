//! Two-phase transition drive for resolved snaps.
//!
//! A resolved snap cannot be applied in the middle of the update cycle
//! that produced it; the panel's render target may not exist yet. Phase 1
//! ([`TransitionDriver::stage`]) records the intended target, phase 2
//! ([`TransitionDriver::flush`]) applies every staged snap in order once
//! the host confirms the visual targets are attached. A snap staged while
//! another is pending simply queues behind it; both apply, the later one
//! winning visually.

use std::collections::VecDeque;

use slidepane_core::{constants, Direction};

/// Timing parameters for an eased transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    /// Duration in milliseconds.
    pub duration_ms: u64,
    /// Cubic-bezier control points (x1, y1, x2, y2).
    pub ease: [f32; 4],
}

impl TransitionSpec {
    /// The fixed spec used for every discrete snap transition.
    pub fn snap() -> Self {
        Self {
            duration_ms: constants::TRANSITION_DURATION_MS,
            ease: constants::TRANSITION_EASE,
        }
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::snap()
    }
}

/// Visual target for the panel transform and its overlay opacity.
///
/// Implemented by the host; `transition: None` means apply immediately
/// with no easing (the live drag-follow phase), `Some` means animate.
pub trait DrawerSurface {
    /// Translates the panel to `offset` along the direction's axis.
    fn apply_transform(&mut self, direction: Direction, offset: f32, transition: Option<TransitionSpec>);

    /// Sets the overlay opacity.
    fn apply_overlay_opacity(&mut self, opacity: f32, transition: Option<TransitionSpec>);
}

/// A staged snap awaiting flush.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingSnap {
    /// Index the target offset resolved to, `None` when the offset is not
    /// in the current table.
    pub index: Option<usize>,
    /// Signed target offset along the drag axis.
    pub offset: f32,
    /// Overlay opacity to apply alongside the transform.
    pub overlay_opacity: f32,
}

/// Overlay opacity for a snap resolved to `index`.
///
/// Fully transparent only when the target rests strictly below the fade
/// boundary: not the boundary itself, not the last point. An unresolved
/// index counts as below every boundary. Opaque in every other case,
/// including when no fade boundary is configured.
pub(crate) fn overlay_opacity_for(
    index: Option<usize>,
    fade_from_index: Option<usize>,
    offsets_len: usize,
) -> f32 {
    let Some(fade) = fade_from_index else {
        return 1.0;
    };
    if offsets_len == 0 {
        return 1.0;
    }
    // Treat "not found" as -1, below every valid index.
    let index = index.map(|i| i as isize).unwrap_or(-1);
    let last = offsets_len as isize - 1;
    let fade = fade as isize;
    if index != last && index != fade && index < fade {
        0.0
    } else {
        1.0
    }
}

/// Queue of staged snaps, drained in order on flush.
#[derive(Default)]
pub(crate) struct TransitionDriver {
    pending: VecDeque<PendingSnap>,
}

impl TransitionDriver {
    pub(crate) fn stage(&mut self, snap: PendingSnap) {
        self.pending.push_back(snap);
    }

    pub(crate) fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Applies every staged snap in order: change notification, eased
    /// transform, eased overlay opacity.
    pub(crate) fn flush(
        &mut self,
        direction: Direction,
        offsets: &[f32],
        surface: &mut dyn DrawerSurface,
        mut on_snap_point_change: impl FnMut(Option<usize>, &[f32]),
    ) {
        while let Some(snap) = self.pending.pop_front() {
            on_snap_point_change(snap.index, offsets);
            surface.apply_transform(direction, snap.offset, Some(TransitionSpec::snap()));
            surface.apply_overlay_opacity(snap.overlay_opacity, Some(TransitionSpec::snap()));
        }
    }
}
