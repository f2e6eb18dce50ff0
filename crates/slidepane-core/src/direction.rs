//! Anchor edge of the panel and the axis/sign conventions it implies.

/// The container edge a drawer panel is anchored to.
///
/// The edge determines both the drag axis (vertical for `Top`/`Bottom`,
/// horizontal for `Left`/`Right`) and the sign convention of offsets along
/// it: `Bottom`/`Right` panels translate by a positive distance away from
/// fully open, `Top`/`Left` panels by a negative one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// Returns true when the drag axis is vertical.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Top | Direction::Bottom)
    }

    /// Returns true for the edges whose offsets are measured as a positive
    /// translation subtracted from the container size (`Bottom`/`Right`).
    #[inline]
    pub fn is_positive(self) -> bool {
        matches!(self, Direction::Bottom | Direction::Right)
    }

    /// Signed offset for a snap magnitude within a container of the given
    /// extent along this direction's axis.
    ///
    /// `Bottom`/`Right`: distance left to translate from fully open, so a
    /// larger magnitude (more open) yields a smaller offset. `Top`/`Left`
    /// mirror this with negative offsets.
    #[inline]
    pub fn signed_offset(self, container_extent: f32, magnitude: f32) -> f32 {
        if self.is_positive() {
            container_extent - magnitude
        } else {
            -container_extent + magnitude
        }
    }

    /// Applies a live drag delta to a resting offset.
    ///
    /// `dragged_distance` is direction-normalized: positive always means
    /// dragging toward open. For `Bottom`/`Right` that shrinks the offset,
    /// for `Top`/`Left` it raises the negative offset toward zero.
    #[inline]
    pub fn apply_drag(self, offset: f32, dragged_distance: f32) -> f32 {
        if self.is_positive() {
            offset - dragged_distance
        } else {
            offset + dragged_distance
        }
    }

    /// Returns true when `candidate` lies beyond `outermost` in the opening
    /// direction, i.e. past the most-open configured snap point.
    #[inline]
    pub fn exceeds_outermost(self, candidate: f32, outermost: f32) -> bool {
        if self.is_positive() {
            candidate < outermost
        } else {
            candidate > outermost
        }
    }
}
