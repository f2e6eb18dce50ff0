//! Slidepane core: geometry primitives for snap-point drawer panels.
//!
//! A drawer panel rests at one of several configured snap points along a
//! single drag axis. This crate holds the pure, framework-agnostic pieces
//! of that model:
//!
//! - [`Direction`]: which container edge the panel is anchored to, and the
//!   axis/sign conventions that follow from it.
//! - [`SnapPoint`]: a resting position, either absolute pixels or a
//!   fraction of the container dimension.
//! - [`ContainerDimensions`] and [`MeasuredSize`]: measured sizing injected
//!   as an explicit dependency, so derivations stay deterministic in tests.
//! - [`ViewportTracker`]: ambient viewport size with leak-free listener
//!   registration.
//! - [`compute_snap_offsets`]: the snap point → signed offset derivation.
//! - [`constants`]: the fixed design parameters (transition timing,
//!   velocity thresholds).
//!
//! Everything here is a pure function of its inputs; the stateful
//! controller living on top of it is in the `slidepane` crate.

pub mod constants;
mod dimensions;
mod direction;
mod offsets;
mod snap_point;

pub use dimensions::{
    ContainerDimensions, FixedSize, MeasuredSize, ViewportListenerRegistration, ViewportTracker,
};
pub use direction::Direction;
pub use offsets::{compute_snap_offsets, SnapOffsets};
pub use snap_point::SnapPoint;
