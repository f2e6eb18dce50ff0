//! Measured container sizing and ambient viewport tracking.
//!
//! Offsets are derived from whatever the panel is sized against: an
//! explicit container, or the ambient viewport when none is supplied.
//! Both are modeled as a [`MeasuredSize`] provider so the derivations
//! stay deterministic under test.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::direction::Direction;

/// Width and height of the sizing container, in device pixels.
///
/// Read at offset-computation time; not cached beyond one recomputation
/// cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerDimensions {
    pub width: f32,
    pub height: f32,
}

impl ContainerDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The extent along the drag axis of the given direction.
    #[inline]
    pub fn extent_along(&self, direction: Direction) -> f32 {
        if direction.is_vertical() {
            self.height
        } else {
            self.width
        }
    }
}

/// A provider of measured container dimensions.
///
/// Returns `None` before first layout; consumers degrade to raw snap
/// magnitudes rather than failing.
pub trait MeasuredSize {
    fn dimensions(&self) -> Option<ContainerDimensions>;
}

/// A provider with a fixed measurement, for explicit containers and tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedSize(pub ContainerDimensions);

impl MeasuredSize for FixedSize {
    fn dimensions(&self) -> Option<ContainerDimensions> {
        Some(self.0)
    }
}

struct ViewportTrackerInner {
    size: Cell<Option<ContainerDimensions>>,
    listeners: RefCell<Vec<(u64, Box<dyn Fn(ContainerDimensions)>)>>,
    next_listener_id: Cell<u64>,
}

/// Tracks the ambient viewport size for the lifetime of the owning
/// component.
///
/// The host feeds resize notifications in via [`ViewportTracker::set_size`];
/// interested parties subscribe with [`ViewportTracker::on_resize`] and hold
/// the returned registration. Dropping the registration unregisters the
/// listener, so teardown cannot leak subscriptions.
///
/// Clones share the same underlying tracker.
#[derive(Clone)]
pub struct ViewportTracker {
    inner: Rc<ViewportTrackerInner>,
}

impl Default for ViewportTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportTracker {
    /// Creates a tracker with no measurement yet (before first layout).
    pub fn new() -> Self {
        Self {
            inner: Rc::new(ViewportTrackerInner {
                size: Cell::new(None),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
            }),
        }
    }

    /// Creates a tracker with a known initial size.
    pub fn with_size(width: f32, height: f32) -> Self {
        let tracker = Self::new();
        tracker.inner.size.set(Some(ContainerDimensions::new(width, height)));
        tracker
    }

    /// Records a new viewport size and notifies registered listeners.
    ///
    /// Non-finite measurements are recorded as-is (offset derivation
    /// degrades downstream) but flagged, since they usually mean the host
    /// measured an unattached element.
    pub fn set_size(&self, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() {
            log::warn!("non-finite viewport measurement {}x{}", width, height);
        }
        let dimensions = ContainerDimensions::new(width, height);
        self.inner.size.set(Some(dimensions));
        for (_, listener) in self.inner.listeners.borrow().iter() {
            listener(dimensions);
        }
    }

    /// Registers a resize listener.
    ///
    /// The listener stays registered until the returned guard is dropped.
    #[must_use = "dropping the registration immediately unregisters the listener"]
    pub fn on_resize(
        &self,
        listener: impl Fn(ContainerDimensions) + 'static,
    ) -> ViewportListenerRegistration {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Box::new(listener)));
        ViewportListenerRegistration {
            tracker: Rc::downgrade(&self.inner),
            id,
        }
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl MeasuredSize for ViewportTracker {
    fn dimensions(&self) -> Option<ContainerDimensions> {
        self.inner.size.get()
    }
}

/// Guard for a viewport resize subscription; unregisters on drop.
pub struct ViewportListenerRegistration {
    tracker: Weak<ViewportTrackerInner>,
    id: u64,
}

impl Drop for ViewportListenerRegistration {
    fn drop(&mut self) {
        if let Some(inner) = self.tracker.upgrade() {
            inner
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn tracker_starts_unmeasured() {
        let tracker = ViewportTracker::new();
        assert_eq!(tracker.dimensions(), None);
    }

    #[test]
    fn set_size_updates_dimensions() {
        let tracker = ViewportTracker::new();
        tracker.set_size(390.0, 844.0);
        assert_eq!(
            tracker.dimensions(),
            Some(ContainerDimensions::new(390.0, 844.0))
        );
    }

    #[test]
    fn listeners_receive_resize_notifications() {
        let tracker = ViewportTracker::with_size(100.0, 100.0);
        let seen = Rc::new(Cell::new(0.0f32));
        let seen_in_listener = Rc::clone(&seen);
        let _registration = tracker.on_resize(move |size| seen_in_listener.set(size.height));

        tracker.set_size(100.0, 640.0);
        assert_eq!(seen.get(), 640.0);
    }

    #[test]
    fn dropping_registration_unsubscribes() {
        let tracker = ViewportTracker::new();
        let registration = tracker.on_resize(|_| {});
        assert_eq!(tracker.listener_count(), 1);

        drop(registration);
        assert_eq!(tracker.listener_count(), 0, "listener leaked after drop");
    }

    #[test]
    fn registration_outliving_tracker_is_safe() {
        let tracker = ViewportTracker::new();
        let registration = tracker.on_resize(|_| {});
        drop(tracker);
        drop(registration);
    }

    #[test]
    fn extent_along_follows_axis() {
        let dims = ContainerDimensions::new(390.0, 844.0);
        assert_eq!(dims.extent_along(Direction::Bottom), 844.0);
        assert_eq!(dims.extent_along(Direction::Left), 390.0);
    }
}
