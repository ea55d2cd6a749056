//! FrameScheduler - One-Shot Animation Frame Requests

use crossbeam_channel::Sender;

use super::event::{ElementId, HostEvent};

/// Pending "next frame" callbacks, fired together on [`FrameScheduler::tick`]
#[derive(Debug)]
pub struct FrameScheduler {
    pending: Vec<ElementId>,
    frame: u64,
    tx: Sender<HostEvent>,
}

impl FrameScheduler {
    pub fn new(tx: Sender<HostEvent>) -> Self {
        Self {
            pending: Vec::new(),
            frame: 0,
            tx,
        }
    }

    /// Request a callback on the next frame. Duplicate requests coalesce.
    pub fn request(&mut self, target: ElementId) {
        if !self.pending.contains(&target) {
            self.pending.push(target);
        }
    }

    /// Cancel a pending request. Returns whether one was pending.
    pub fn cancel(&mut self, target: ElementId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|id| *id != target);
        before != self.pending.len()
    }

    /// Whether `target` is waiting for a frame
    pub fn is_pending(&self, target: ElementId) -> bool {
        self.pending.contains(&target)
    }

    /// Frames elapsed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Start a new frame: queue one event per pending request, in request
    /// order. Requests made while handling these events wait for the next tick.
    pub fn tick(&mut self) -> usize {
        self.frame += 1;
        let due = std::mem::take(&mut self.pending);
        let mut sent = 0;
        for target in due {
            if self.tx.send(HostEvent::AnimationFrame { target }).is_ok() {
                sent += 1;
            }
        }
        tracing::trace!("Frame {} fired {sent} callbacks", self.frame);
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_fires_pending_once() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut frames = FrameScheduler::new(tx);
        frames.request(ElementId(1));
        frames.request(ElementId(2));
        frames.request(ElementId(1));

        assert_eq!(frames.tick(), 2);
        assert_eq!(frames.tick(), 0);
        assert_eq!(frames.frame(), 2);

        let targets: Vec<_> = rx.try_iter().map(|e| e.target()).collect();
        assert_eq!(targets, vec![ElementId(1), ElementId(2)]);
    }

    #[test]
    fn cancel_removes_request() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut frames = FrameScheduler::new(tx);
        frames.request(ElementId(3));
        assert!(frames.is_pending(ElementId(3)));
        assert!(frames.cancel(ElementId(3)));
        assert!(!frames.cancel(ElementId(3)));
        assert_eq!(frames.tick(), 0);
        assert!(rx.is_empty());
    }
}
