//! The snap-point state: configuration, derived offsets, and the drag,
//! release, and fade entry points.
//!
//! There is no reactivity runtime here. Every derived value is a pure
//! function of the current inputs, re-derived by [`SnapPointState::resync`]
//! whenever a dependency changes (snap points, direction, active value,
//! container measurement). Hosts call `resync` from their own change
//! notifications and [`SnapPointState::flush`] once render targets are
//! known to be attached.

use std::rc::Rc;

use slidepane_core::{
    compute_snap_offsets, ContainerDimensions, Direction, MeasuredSize, SnapOffsets, SnapPoint,
};

use crate::active::{resolve_active_point, ActivePointSnapshot, ActiveSnapPoint};
use crate::drag::drag_target;
use crate::fade::{percentage_dragged, FadeContext};
use crate::release::{resolve_release, ReleaseContext, ReleaseDecision, ReleaseInput, ReleaseOutcome};
use crate::transition::{overlay_opacity_for, DrawerSurface, PendingSnap, TransitionDriver};

/// Callback invoked on every snap commit with the resolved index and the
/// full offset table.
pub type SnapPointChangeFn = dyn FnMut(Option<usize>, &[f32]);

/// Static configuration for a snap-point drawer instance.
pub struct SnapPointConfig {
    /// Ordered rest positions, index 0 most closed. `None` disables the
    /// feature entirely; every operation becomes a pass-through.
    pub snap_points: Option<Vec<SnapPoint>>,
    /// Snap index at and above which the overlay is fully visible.
    pub fade_from_index: Option<usize>,
    /// Anchor edge of the panel.
    pub direction: Direction,
    /// Disables the fast-fling shortcuts, forcing every release through
    /// adjacent-index or nearest-distance resolution.
    pub snap_to_sequential_point: bool,
}

impl Default for SnapPointConfig {
    fn default() -> Self {
        Self {
            snap_points: None,
            fade_from_index: None,
            direction: Direction::Bottom,
            snap_to_sequential_point: false,
        }
    }
}

/// Snap-point resolution and transition drive for one drawer panel.
pub struct SnapPointState {
    config: SnapPointConfig,
    active: ActiveSnapPoint,
    measured: Rc<dyn MeasuredSize>,
    offsets: SnapOffsets,
    driver: TransitionDriver,
    on_snap_point_change: Option<Box<SnapPointChangeFn>>,
    warned_invalid_fade: bool,
}

impl SnapPointState {
    /// Creates the state and derives the initial offset table.
    ///
    /// `active` is the externally owned active snap point handle; the
    /// state reads it and writes the chosen point back after every
    /// resolved snap. If it already holds a value, a snap to it is staged
    /// immediately (first-mount positioning).
    pub fn new(
        config: SnapPointConfig,
        active: ActiveSnapPoint,
        measured: Rc<dyn MeasuredSize>,
    ) -> Self {
        let mut state = Self {
            config,
            active,
            measured,
            offsets: SnapOffsets::new(),
            driver: TransitionDriver::default(),
            on_snap_point_change: None,
            warned_invalid_fade: false,
        };
        state.resync();
        state
    }

    /// Registers the snap-commit notification callback.
    pub fn set_on_snap_point_change(
        &mut self,
        callback: impl FnMut(Option<usize>, &[f32]) + 'static,
    ) {
        self.on_snap_point_change = Some(Box::new(callback));
    }

    fn points(&self) -> &[SnapPoint] {
        self.config.snap_points.as_deref().unwrap_or(&[])
    }

    fn snapshot(&self) -> ActivePointSnapshot {
        resolve_active_point(
            self.config.snap_points.as_deref(),
            self.config.fade_from_index,
            self.active.get(),
        )
    }

    fn dimensions(&self) -> Option<ContainerDimensions> {
        self.measured.dimensions()
    }

    /// Re-derives the offset table and the active-point resolution from
    /// current inputs, staging a snap to the active point's offset when it
    /// resolves.
    ///
    /// This is the explicit analogue of dependency-change recomputation:
    /// call it after mutating the snap points, direction, active value, or
    /// whenever the container measurement changes.
    pub fn resync(&mut self) {
        self.offsets =
            compute_snap_offsets(self.points(), self.config.direction, self.dimensions());

        if let Some(fade) = self.config.fade_from_index {
            if fade >= self.points().len() && !self.warned_invalid_fade {
                log::warn!(
                    "fade_from_index {} is out of range for {} snap points; fading disabled",
                    fade,
                    self.points().len()
                );
                self.warned_invalid_fade = true;
            }
        }

        if self.active.get().is_some() {
            if let Some(offset) = self
                .snapshot()
                .index
                .and_then(|i| self.offsets.get(i).copied())
            {
                self.snap_to_offset(offset);
            }
        }
    }

    /// Replaces the snap point configuration.
    pub fn set_snap_points(&mut self, snap_points: Option<Vec<SnapPoint>>) {
        self.config.snap_points = snap_points;
        self.resync();
    }

    /// Changes the anchor edge.
    pub fn set_direction(&mut self, direction: Direction) {
        self.config.direction = direction;
        self.resync();
    }

    /// Changes the fade boundary index.
    pub fn set_fade_from_index(&mut self, fade_from_index: Option<usize>) {
        self.config.fade_from_index = fade_from_index;
        self.warned_invalid_fade = false;
        self.resync();
    }

    /// Sets the active snap point, as the external owner would, and
    /// re-derives.
    pub fn set_active_snap_point(&mut self, point: Option<SnapPoint>) {
        self.active.set(point);
        self.resync();
    }

    /// The shared handle to the externally owned active snap point.
    pub fn active_handle(&self) -> ActiveSnapPoint {
        self.active.clone()
    }

    /// Index of the active snap point, by value equality against the
    /// configured sequence.
    pub fn active_snap_point_index(&self) -> Option<usize> {
        self.snapshot().index
    }

    /// Whether the active snap point is the last (most open) one.
    pub fn is_last_snap_point(&self) -> bool {
        self.snapshot().is_last
    }

    /// Whether the overlay should fade with drag progress right now.
    pub fn should_fade(&self) -> bool {
        self.snapshot().should_fade
    }

    /// The derived offset table, index-aligned with the snap points.
    pub fn snap_points_offset(&self) -> &[f32] {
        &self.offsets
    }

    /// Whether a staged snap is awaiting [`SnapPointState::flush`].
    pub fn has_pending_snap(&self) -> bool {
        self.driver.has_pending()
    }

    /// Phase 1 of a snap: resolve the target index, stage the transform
    /// and overlay opacity, and synchronously write the chosen point back
    /// to the active handle (an unresolved index clamps to the first
    /// point).
    fn snap_to_offset(&mut self, offset: f32) {
        let index = self.offsets.iter().position(|&o| o == offset);
        let overlay_opacity =
            overlay_opacity_for(index, self.config.fade_from_index, self.offsets.len());
        self.driver.stage(PendingSnap {
            index,
            offset,
            overlay_opacity,
        });

        if let Some(&point) = self.points().get(index.unwrap_or(0)) {
            self.active.set(Some(point));
        }
    }

    /// Phase 2: applies every staged snap in order to the host surface and
    /// emits the change notifications. Call once the panel's render target
    /// is guaranteed attached.
    pub fn flush(&mut self, surface: &mut dyn DrawerSurface) {
        let on_change = &mut self.on_snap_point_change;
        self.driver.flush(
            self.config.direction,
            &self.offsets,
            surface,
            |index, offsets| {
                if let Some(callback) = on_change.as_mut() {
                    callback(index, offsets);
                }
            },
        );
    }

    /// Live drag follow: applies the clamped candidate offset immediately,
    /// with no easing and no snapping. No-op without an active offset or
    /// when the candidate exceeds the outermost snap point.
    pub fn on_drag(&mut self, dragged_distance: f32, surface: &mut dyn DrawerSurface) {
        let Some(active_offset) = self.active_offset() else {
            return;
        };
        let Some(target) = drag_target(
            active_offset,
            dragged_distance,
            self.config.direction,
            &self.offsets,
        ) else {
            return;
        };
        surface.apply_transform(self.config.direction, target, None);
    }

    /// Resolves where the panel settles after a release and stages the
    /// resulting snap. `close_drawer` runs when the resolution is a
    /// dismissal. No-op when no fade boundary is configured for this
    /// drawer instance.
    pub fn on_release(
        &mut self,
        input: ReleaseInput,
        close_drawer: impl FnOnce(),
    ) -> ReleaseOutcome {
        if self.config.fade_from_index.is_none() {
            return ReleaseOutcome::NoOp;
        }

        let context = ReleaseContext {
            offsets: &self.offsets,
            active_index: self.snapshot().index,
            direction: self.config.direction,
            viewport_extent: self
                .dimensions()
                .map(|dims| dims.extent_along(self.config.direction)),
            snap_to_sequential_point: self.config.snap_to_sequential_point,
        };

        match resolve_release(&context, input) {
            ReleaseDecision::Dismiss => {
                close_drawer();
                ReleaseOutcome::Dismissed
            }
            ReleaseDecision::SnapToOffset(offset) => {
                self.snap_to_offset(offset);
                ReleaseOutcome::Snapped {
                    index: self.offsets.iter().position(|&o| o == offset),
                    offset,
                }
            }
            ReleaseDecision::NoOp => ReleaseOutcome::NoOp,
        }
    }

    /// Overlay opacity fraction for the drag in flight; `None` when the
    /// caller should not override the overlay.
    pub fn percentage_dragged(
        &self,
        abs_dragged_distance: f32,
        is_dragging_down: bool,
    ) -> Option<f32> {
        let snapshot = self.snapshot();
        percentage_dragged(
            &FadeContext {
                offsets: &self.offsets,
                active_index: snapshot.index,
                fade_from_index: self.config.fade_from_index,
                should_fade: snapshot.should_fade,
            },
            abs_dragged_distance,
            is_dragging_down,
        )
    }

    fn active_offset(&self) -> Option<f32> {
        self.snapshot()
            .index
            .and_then(|i| self.offsets.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::TransitionSpec;
    use slidepane_core::FixedSize;

    struct RecordingSurface {
        transforms: Vec<(f32, bool)>,
        opacities: Vec<f32>,
    }

    impl RecordingSurface {
        fn new() -> Self {
            Self {
                transforms: Vec::new(),
                opacities: Vec::new(),
            }
        }

        fn last_position(&self) -> Option<f32> {
            self.transforms.last().map(|&(offset, _)| offset)
        }
    }

    impl DrawerSurface for RecordingSurface {
        fn apply_transform(&mut self, _: Direction, offset: f32, transition: Option<TransitionSpec>) {
            self.transforms.push((offset, transition.is_some()));
        }

        fn apply_overlay_opacity(&mut self, opacity: f32, _: Option<TransitionSpec>) {
            self.opacities.push(opacity);
        }
    }

    const POINTS: [SnapPoint; 3] = [
        SnapPoint::Pixels(148.0),
        SnapPoint::Fraction(0.5),
        SnapPoint::Fraction(1.0),
    ];

    // 400x800 container: offsets are [652, 400, 0].
    fn measured() -> Rc<dyn MeasuredSize> {
        Rc::new(FixedSize(ContainerDimensions::new(400.0, 800.0)))
    }

    fn state_with(fade_from_index: Option<usize>) -> SnapPointState {
        SnapPointState::new(
            SnapPointConfig {
                snap_points: Some(POINTS.to_vec()),
                fade_from_index,
                direction: Direction::Bottom,
                snap_to_sequential_point: false,
            },
            ActiveSnapPoint::new(Some(POINTS[0])),
            measured(),
        )
    }

    #[test]
    fn offsets_derive_from_configuration() {
        let state = state_with(Some(2));
        assert_eq!(state.snap_points_offset(), &[652.0, 400.0, 0.0]);
    }

    #[test]
    fn index_round_trip_through_active_handle() {
        let mut state = state_with(Some(2));
        for (i, &point) in POINTS.iter().enumerate() {
            state.set_active_snap_point(Some(point));
            assert_eq!(state.active_snap_point_index(), Some(i));
        }
    }

    #[test]
    fn initial_active_point_stages_a_mount_snap() {
        let mut state = state_with(Some(2));
        assert!(state.has_pending_snap());

        let mut surface = RecordingSurface::new();
        state.flush(&mut surface);
        assert_eq!(surface.last_position(), Some(652.0));
        assert!(!state.has_pending_snap());
    }

    #[test]
    fn externally_set_active_point_takes_visual_effect() {
        let mut state = state_with(Some(2));
        let mut surface = RecordingSurface::new();
        state.flush(&mut surface);

        state.active_handle().set(Some(POINTS[1]));
        state.resync();
        state.flush(&mut surface);
        assert_eq!(surface.last_position(), Some(400.0));
    }

    #[test]
    fn queued_snaps_apply_in_order_later_wins() {
        let mut state = state_with(Some(2));
        state.set_active_snap_point(Some(POINTS[1]));
        state.set_active_snap_point(Some(POINTS[2]));

        let mut surface = RecordingSurface::new();
        state.flush(&mut surface);
        let positions: Vec<f32> = surface.transforms.iter().map(|&(o, _)| o).collect();
        assert_eq!(positions.first(), Some(&652.0)); // mount snap
        assert_eq!(positions.last(), Some(&0.0));
    }

    #[test]
    fn drag_follows_and_clamps_at_outermost() {
        let mut state = state_with(Some(2));
        let mut surface = RecordingSurface::new();
        state.flush(&mut surface);
        surface.transforms.clear();

        // Live follow, no easing.
        state.on_drag(52.0, &mut surface);
        assert_eq!(surface.transforms, vec![(600.0, false)]);

        // Exactly to the outermost offset is fine...
        state.on_drag(652.0, &mut surface);
        assert_eq!(surface.last_position(), Some(0.0));

        // ...beyond it nothing moves.
        state.on_drag(700.0, &mut surface);
        assert_eq!(surface.transforms.len(), 2);
    }

    #[test]
    fn fling_open_resolves_to_last_offset() {
        let mut state = state_with(Some(2));
        let outcome = state.on_release(
            ReleaseInput {
                dragged_distance: 120.0,
                velocity: 3.0,
                dismissible: true,
            },
            || panic!("close must not run"),
        );
        assert_eq!(
            outcome,
            ReleaseOutcome::Snapped {
                index: Some(2),
                offset: 0.0
            }
        );
        // Active point written back synchronously, before any flush.
        assert_eq!(state.active_handle().get(), Some(POINTS[2]));
    }

    #[test]
    fn fast_close_fling_dismisses_without_snapping() {
        let mut state = state_with(Some(2));
        let mut closed = false;
        let outcome = state.on_release(
            ReleaseInput {
                dragged_distance: -120.0,
                velocity: 3.0,
                dismissible: true,
            },
            || closed = true,
        );
        assert_eq!(outcome, ReleaseOutcome::Dismissed);
        assert!(closed);

        // Only the mount snap is pending; the dismissal staged nothing.
        let mut surface = RecordingSurface::new();
        state.flush(&mut surface);
        assert_eq!(surface.transforms.len(), 1);
    }

    #[test]
    fn release_without_fade_boundary_is_passthrough() {
        let mut state = state_with(None);
        let outcome = state.on_release(
            ReleaseInput {
                dragged_distance: -120.0,
                velocity: 3.0,
                dismissible: true,
            },
            || panic!("close must not run"),
        );
        assert_eq!(outcome, ReleaseOutcome::NoOp);
    }

    #[test]
    fn snap_commit_notifies_with_index_and_offsets() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut state = state_with(Some(2));
        let seen: Rc<RefCell<Vec<(Option<usize>, Vec<f32>)>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        state.set_on_snap_point_change(move |index, offsets| {
            sink.borrow_mut().push((index, offsets.to_vec()));
        });

        let mut surface = RecordingSurface::new();
        state.flush(&mut surface);
        assert_eq!(
            seen.borrow().as_slice(),
            &[(Some(0), vec![652.0, 400.0, 0.0])]
        );
    }

    #[test]
    fn resnap_at_last_point_fires_callbacks_again() {
        let mut state = state_with(Some(2));
        state.set_active_snap_point(Some(POINTS[2]));
        let mut surface = RecordingSurface::new();
        state.flush(&mut surface);
        surface.transforms.clear();

        // Moderate closing fling at the last point: no movement, but the
        // snap is re-staged and repaints.
        let outcome = state.on_release(
            ReleaseInput {
                dragged_distance: -60.0,
                velocity: 0.5,
                dismissible: true,
            },
            || panic!("close must not run"),
        );
        assert_eq!(
            outcome,
            ReleaseOutcome::Snapped {
                index: Some(2),
                offset: 0.0
            }
        );
        state.flush(&mut surface);
        assert_eq!(surface.last_position(), Some(0.0));
    }

    #[test]
    fn overlay_opacity_follows_fade_boundary_on_commit() {
        let mut state = state_with(Some(2));
        let mut surface = RecordingSurface::new();
        state.flush(&mut surface);
        // Index 0 is below the boundary: transparent.
        assert_eq!(surface.opacities, vec![0.0]);

        state.set_active_snap_point(Some(POINTS[2]));
        surface.opacities.clear();
        state.flush(&mut surface);
        assert_eq!(surface.opacities, vec![1.0]);
    }

    #[test]
    fn unconfigured_snap_points_are_passthrough_everywhere() {
        let mut state = SnapPointState::new(
            SnapPointConfig::default(),
            ActiveSnapPoint::new(None),
            measured(),
        );
        assert!(state.snap_points_offset().is_empty());
        assert_eq!(state.active_snap_point_index(), None);

        let mut surface = RecordingSurface::new();
        state.on_drag(50.0, &mut surface);
        assert!(surface.transforms.is_empty());

        let outcome = state.on_release(
            ReleaseInput {
                dragged_distance: 50.0,
                velocity: 3.0,
                dismissible: true,
            },
            || panic!("close must not run"),
        );
        assert_eq!(outcome, ReleaseOutcome::NoOp);
        assert_eq!(state.percentage_dragged(50.0, true), None);
    }

    #[test]
    fn resize_changes_offsets_on_resync() {
        use slidepane_core::ViewportTracker;

        let tracker = ViewportTracker::with_size(400.0, 800.0);
        let mut state = SnapPointState::new(
            SnapPointConfig {
                snap_points: Some(vec![SnapPoint::Fraction(0.5)]),
                fade_from_index: Some(0),
                direction: Direction::Bottom,
                snap_to_sequential_point: false,
            },
            ActiveSnapPoint::new(None),
            Rc::new(tracker.clone()),
        );
        assert_eq!(state.snap_points_offset(), &[400.0]);

        tracker.set_size(400.0, 600.0);
        state.resync();
        assert_eq!(state.snap_points_offset(), &[300.0]);
    }

    #[test]
    fn percentage_dragged_reaches_zero_at_full_gap() {
        let mut state = state_with(Some(2));
        state.set_active_snap_point(Some(POINTS[1]));
        // Gap between boundary (0) and its lower neighbor (400) is 400.
        assert_eq!(state.percentage_dragged(400.0, true), Some(0.0));
        assert_eq!(state.percentage_dragged(100.0, true), Some(0.75));
    }
}
