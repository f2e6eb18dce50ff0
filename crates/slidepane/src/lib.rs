//! Slidepane: snap-point resolution and transition drive for draggable
//! drawer panels.
//!
//! A drawer configured with snap points rests at discrete positions along
//! its drag axis. This crate decides, on every drag and release, where the
//! panel goes next:
//!
//! - [`SnapPointState`] is the hub: it derives the offset table from the
//!   configuration and container measurement, tracks the externally owned
//!   [`ActiveSnapPoint`], and exposes the drag/release/fade operations.
//! - During a drag, [`SnapPointState::on_drag`] follows the pointer
//!   continuously with boundary clamping and no easing.
//! - On release, [`SnapPointState::on_release`] picks dismiss, first,
//!   last, adjacent, or nearest-by-distance per the velocity heuristics
//!   in [`release`], and stages an eased snap.
//! - Staged snaps apply on [`SnapPointState::flush`], once the host
//!   confirms the panel's render target exists; the host implements
//!   [`DrawerSurface`] to receive transforms and overlay opacities.
//! - [`SnapPointState::percentage_dragged`] interpolates the overlay
//!   opacity against the configured fade boundary while a drag is in
//!   flight.
//!
//! Nothing here raises errors: unresolvable indices, missing layout, and
//! absent configuration all degrade to "no visual update".
//!
//! Geometry primitives (directions, snap descriptors, offset derivation,
//! viewport tracking) live in `slidepane-core` and are re-exported here.

mod active;
mod drag;
mod fade;
pub mod release;
mod session;
mod state;
mod transition;

pub use active::{resolve_active_point, ActivePointSnapshot, ActiveSnapPoint};
pub use release::{ReleaseInput, ReleaseOutcome};
pub use session::{release_velocity, DragSession};
pub use state::{SnapPointChangeFn, SnapPointConfig, SnapPointState};
pub use transition::{DrawerSurface, TransitionSpec};

pub use slidepane_core::{
    compute_snap_offsets, constants, ContainerDimensions, Direction, FixedSize, MeasuredSize,
    SnapOffsets, SnapPoint, ViewportListenerRegistration, ViewportTracker,
};
