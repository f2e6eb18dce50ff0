//! Overlay fade interpolation against the fade-threshold snap index.
//!
//! While a drag is in flight the overlay opacity tracks how far the panel
//! has moved between the fade boundary and its lower neighbor. Everything
//! here degrades to "no fade" (`None`) instead of indexing out of range.

/// Inputs the fade interpolation depends on.
pub(crate) struct FadeContext<'a> {
    pub offsets: &'a [f32],
    pub active_index: Option<usize>,
    pub fade_from_index: Option<usize>,
    pub should_fade: bool,
}

/// Computes the overlay opacity fraction for the current drag.
///
/// Returns `None` when the caller should leave the overlay alone: nothing
/// configured, no resolved index, or the active point is outside the fade
/// range. Otherwise a value in [0, 1]: `0.0` fully transparent, `1.0`
/// fully opaque.
pub(crate) fn percentage_dragged(
    ctx: &FadeContext<'_>,
    abs_dragged_distance: f32,
    is_dragging_down: bool,
) -> Option<f32> {
    let fade = ctx.fade_from_index?;
    if ctx.offsets.is_empty() {
        return None;
    }
    let index = ctx.active_index?;

    // The point just below the fade boundary is where the overlay starts
    // appearing; at or above the boundary it is already fully handled.
    let at_boundary_minus_one = fade.checked_sub(1) == Some(index);
    let at_or_above_boundary = index >= fade;

    if at_or_above_boundary && is_dragging_down {
        return Some(0.0);
    }
    // Dragging away from the boundary while just below it: fully opaque,
    // no interpolation.
    if at_boundary_minus_one && !is_dragging_down {
        return Some(1.0);
    }
    if !ctx.should_fade && !at_boundary_minus_one {
        return None;
    }

    // Interpolate over the gap between the fade boundary and the point
    // below it.
    let target = if at_boundary_minus_one {
        index + 1
    } else {
        index.checked_sub(1)?
    };
    let gap = if at_boundary_minus_one {
        ctx.offsets.get(target)? - ctx.offsets.get(target.checked_sub(1)?)?
    } else {
        ctx.offsets.get(target + 1)? - ctx.offsets.get(target)?
    };
    if gap == 0.0 {
        return None;
    }

    let fraction = (abs_dragged_distance / gap.abs()).clamp(0.0, 1.0);
    Some(if at_boundary_minus_one {
        // Fading out as the drag recedes from the boundary.
        1.0 - fraction
    } else {
        // Fading in as the drag approaches it.
        fraction
    })
}
