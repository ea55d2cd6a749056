//! Lifecycle - Host Services Available to a Component

use super::event::ElementId;
use super::frame::FrameScheduler;
use super::observer::IntersectionObserver;

/// Handle passed to lifecycle hooks, scoped to one element
pub struct Lifecycle<'a> {
    target: ElementId,
    observer: &'a mut IntersectionObserver,
    frames: &'a mut FrameScheduler,
}

impl<'a> Lifecycle<'a> {
    pub fn new(
        target: ElementId,
        observer: &'a mut IntersectionObserver,
        frames: &'a mut FrameScheduler,
    ) -> Self {
        Self {
            target,
            observer,
            frames,
        }
    }

    /// The element this handle belongs to
    pub fn target(&self) -> ElementId {
        self.target
    }

    /// Receive intersection entries when visibility crosses `threshold`
    pub fn observe_intersection(&mut self, threshold: f64) {
        self.observer.observe(self.target, threshold);
    }

    /// Stop receiving intersection entries
    pub fn unobserve_intersection(&mut self) {
        self.observer.unobserve(self.target);
    }

    /// Receive one `AnimationFrame` event on the next frame
    pub fn request_animation_frame(&mut self) {
        self.frames.request(self.target);
    }

    /// Drop a pending frame request
    pub fn cancel_animation_frame(&mut self) {
        self.frames.cancel(self.target);
    }
}
