//! Derivation of signed absolute offsets from snap point descriptors.

use smallvec::SmallVec;

use crate::dimensions::ContainerDimensions;
use crate::direction::Direction;
use crate::snap_point::SnapPoint;

/// Offset table derived from a snap point sequence.
///
/// Index `i` corresponds to snap point `i`; snap point sets are small, so
/// the table stays inline for typical configurations.
pub type SnapOffsets = SmallVec<[f32; 4]>;

/// Maps each configured snap point to its signed absolute offset along the
/// drag axis.
///
/// The offset is the translation distance the panel needs from its fully
/// open resting transform: `container - magnitude` for `Bottom`/`Right`,
/// `-container + magnitude` for `Top`/`Left`.
///
/// With no measured dimensions yet, offsets degrade to raw magnitudes (a
/// pixel point's length, zero for fractions) with no container-relative
/// adjustment. Pure function of its inputs; callers re-invoke it whenever
/// the snap points, direction, or container measurement change.
pub fn compute_snap_offsets(
    snap_points: &[SnapPoint],
    direction: Direction,
    dimensions: Option<ContainerDimensions>,
) -> SnapOffsets {
    let extent = dimensions.map(|dims| dims.extent_along(direction));
    snap_points
        .iter()
        .map(|&point| {
            let magnitude = point.magnitude(extent);
            match extent {
                Some(extent) => direction.signed_offset(extent, magnitude),
                None => magnitude,
            }
        })
        .collect()
}
