//! Snap point descriptors.

/// A configured resting position for the panel.
///
/// Snap points come in two representations: an absolute length in device
/// pixels, or a fraction of the relevant container dimension. They are
/// supplied as an ordered sequence where index 0 is the most closed rest
/// position and the last index the most open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapPoint {
    /// Absolute length in device pixels.
    Pixels(f32),
    /// Fraction of the container dimension along the drag axis, in [0, 1].
    Fraction(f32),
}

impl SnapPoint {
    /// Resolves the snap magnitude against a container extent.
    ///
    /// With no measured extent (before first layout) a pixel point keeps
    /// its raw magnitude and a fraction degrades to zero; there is nothing
    /// for it to be a fraction of yet. Defined fallback, not an error.
    #[inline]
    pub fn magnitude(self, container_extent: Option<f32>) -> f32 {
        match (self, container_extent) {
            (SnapPoint::Pixels(px), _) => px,
            (SnapPoint::Fraction(fraction), Some(extent)) => fraction * extent,
            (SnapPoint::Fraction(_), None) => 0.0,
        }
    }
}
