//! The view-host seam: the three outward calls the layout core makes.
//!
//! The layout engine never owns the views it positions. It refers to them by
//! opaque [`ViewId`] handles and asks the host to attach, detach, or frame
//! them. A production host forwards these to the real view tree; tests use
//! [`RecordingHost`] to assert on the exact call sequence.

use crate::geometry::Rect;

/// Opaque handle for an externally owned view.
///
/// Identity, not geometry: two ids are the same view iff they are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

impl ViewId {
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for ViewId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Receiver for the side effects of grid layout.
///
/// These are the only outward calls the core issues: add a view to the
/// container's tree, remove it, or move it. Implementations must not assume
/// any particular call ordering beyond attach-before-frame for a freshly
/// added view.
pub trait ViewHost {
    /// Add `view` to the container's view tree.
    fn attach(&mut self, view: ViewId);

    /// Remove `view` from the container's view tree.
    fn detach(&mut self, view: ViewId);

    /// Position `view` at `frame`, in container coordinates.
    fn set_frame(&mut self, view: ViewId, frame: Rect);
}

/// One recorded host call.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    Attached(ViewId),
    Detached(ViewId),
    FrameSet(ViewId, Rect),
}

/// Test double that records every host call in order.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    attached: Vec<ViewId>,
    frames: std::collections::HashMap<ViewId, Rect>,
    events: Vec<HostEvent>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `view` is currently attached.
    #[must_use]
    pub fn is_attached(&self, view: ViewId) -> bool {
        self.attached.contains(&view)
    }

    /// Attached views, in attachment order.
    #[must_use]
    pub fn attached(&self) -> &[ViewId] {
        &self.attached
    }

    /// The most recently set frame for `view`, if any.
    #[must_use]
    pub fn frame_of(&self, view: ViewId) -> Option<Rect> {
        self.frames.get(&view).copied()
    }

    /// Every host call so far, in order.
    #[must_use]
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl ViewHost for RecordingHost {
    fn attach(&mut self, view: ViewId) {
        self.attached.push(view);
        self.events.push(HostEvent::Attached(view));
    }

    fn detach(&mut self, view: ViewId) {
        self.attached.retain(|v| *v != view);
        self.frames.remove(&view);
        self.events.push(HostEvent::Detached(view));
    }

    fn set_frame(&mut self, view: ViewId, frame: Rect) {
        self.frames.insert(view, frame);
        self.events.push(HostEvent::FrameSet(view, frame));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_host_tracks_attachment_and_frames() {
        let mut host = RecordingHost::new();
        let a = ViewId::new(1);
        let b = ViewId::new(2);

        host.attach(a);
        host.attach(b);
        host.set_frame(a, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(host.is_attached(a));
        assert_eq!(host.attached(), &[a, b]);
        assert_eq!(host.frame_of(a), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(host.frame_of(b), None);

        host.detach(a);
        assert!(!host.is_attached(a));
        assert_eq!(host.frame_of(a), None);
        assert_eq!(
            host.events().last(),
            Some(&HostEvent::Detached(a))
        );
    }
}
