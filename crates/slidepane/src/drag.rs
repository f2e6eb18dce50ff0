//! Live drag-follow position computation.

use slidepane_core::Direction;

/// Computes the offset the panel should follow to for a live drag delta.
///
/// The candidate is the active rest offset adjusted by the normalized drag
/// distance. Candidates past the last (most open) configured offset are
/// rejected with `None`; the panel never follows beyond the outermost snap
/// point. Landing exactly on it is allowed.
pub(crate) fn drag_target(
    active_offset: f32,
    dragged_distance: f32,
    direction: Direction,
    offsets: &[f32],
) -> Option<f32> {
    let outermost = *offsets.last()?;
    let candidate = direction.apply_drag(active_offset, dragged_distance);
    if direction.exceeds_outermost(candidate, outermost) {
        None
    } else {
        Some(candidate)
    }
}
