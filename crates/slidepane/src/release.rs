//! Release resolution: where the panel settles when a drag ends.
//!
//! Decision order, first match wins:
//!
//! 1. Fast fling toward closing (sequential mode off): dismiss, or return
//!    to the first point when not dismissible.
//! 2. Fast fling toward opening (sequential mode off): jump straight to
//!    the last point.
//! 3. Moderate fling over a short distance: settle on the adjacent point
//!    in the drag direction, with dismiss/no-move special cases at the
//!    ends of the range.
//! 4. Otherwise: nearest configured offset by distance.

use slidepane_core::constants::{
    FLING_DISTANCE_FRACTION, FLING_VELOCITY_THRESHOLD, VELOCITY_THRESHOLD,
};
use slidepane_core::Direction;

/// Inputs captured at the moment the pointer is released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleaseInput {
    /// Direction-normalized drag distance; positive = toward opening.
    pub dragged_distance: f32,
    /// Release velocity in px/ms, non-negative.
    pub velocity: f32,
    /// Whether the drawer may be dismissed by dragging past closed.
    pub dismissible: bool,
}

/// What a release resolved to, for hosts and tests.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// The close callback was invoked.
    Dismissed,
    /// A snap to the given offset was staged; `index` is the offset's
    /// position in the table.
    Snapped { index: Option<usize>, offset: f32 },
    /// No visual update occurs.
    NoOp,
}

/// Internal decision, acted on by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ReleaseDecision {
    Dismiss,
    SnapToOffset(f32),
    NoOp,
}

/// Everything the decision depends on besides the release input itself.
pub(crate) struct ReleaseContext<'a> {
    pub offsets: &'a [f32],
    pub active_index: Option<usize>,
    pub direction: Direction,
    /// Viewport extent along the drag axis, when measured.
    pub viewport_extent: Option<f32>,
    /// Disables the two fast-fling shortcuts (rules 1-2).
    pub snap_to_sequential_point: bool,
}

pub(crate) fn resolve_release(ctx: &ReleaseContext<'_>, input: ReleaseInput) -> ReleaseDecision {
    let Some(&outermost) = ctx.offsets.last() else {
        return ReleaseDecision::NoOp;
    };
    let first = ctx.offsets[0];
    let toward_open = input.dragged_distance > 0.0;

    // Rules 1-2: fast flings skip intermediate points entirely.
    if input.velocity > FLING_VELOCITY_THRESHOLD && !ctx.snap_to_sequential_point {
        if !toward_open {
            return if input.dismissible {
                ReleaseDecision::Dismiss
            } else {
                ReleaseDecision::SnapToOffset(first)
            };
        }
        return ReleaseDecision::SnapToOffset(outermost);
    }

    // Rule 3: a moderate fling over a short distance steps one point.
    let is_short_drag = ctx
        .viewport_extent
        .is_some_and(|extent| input.dragged_distance.abs() < extent * FLING_DISTANCE_FRACTION);
    if input.velocity > VELOCITY_THRESHOLD && is_short_drag {
        let is_last = matches!(ctx.active_index, Some(i) if i + 1 == ctx.offsets.len());
        if !toward_open && is_last {
            // Deliberate no-movement re-snap; change callbacks still fire.
            return ReleaseDecision::SnapToOffset(outermost);
        }
        if ctx.active_index == Some(0) && !toward_open && input.dismissible {
            return ReleaseDecision::Dismiss;
        }
        let Some(index) = ctx.active_index else {
            return ReleaseDecision::NoOp;
        };
        let adjacent = if toward_open {
            (index + 1).min(ctx.offsets.len() - 1)
        } else {
            index.saturating_sub(1)
        };
        return ReleaseDecision::SnapToOffset(ctx.offsets[adjacent]);
    }

    // Rule 4: nearest offset to where the drag left the panel; ties go to
    // the lower index.
    let active_offset = ctx
        .active_index
        .and_then(|i| ctx.offsets.get(i).copied())
        .unwrap_or(0.0);
    let current_position = ctx.direction.apply_drag(active_offset, input.dragged_distance);
    let mut nearest = first;
    for &offset in &ctx.offsets[1..] {
        if (offset - current_position).abs() < (nearest - current_position).abs() {
            nearest = offset;
        }
    }
    ReleaseDecision::SnapToOffset(nearest)
}
