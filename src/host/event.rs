//! HostEvent - Callbacks Delivered to Components

use std::fmt;

/// Identity of a mounted element within its document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Asynchronous host callbacks
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Visibility of an observed element crossed its threshold
    Intersection {
        target: ElementId,
        /// Visible fraction of the element, 0.0..=1.0
        ratio: f64,
        is_intersecting: bool,
    },

    /// The frame requested by the element has started
    AnimationFrame { target: ElementId },
}

impl HostEvent {
    /// Element the event is addressed to
    pub fn target(&self) -> ElementId {
        match self {
            HostEvent::Intersection { target, .. } | HostEvent::AnimationFrame { target } => {
                *target
            }
        }
    }

    /// Create an intersection entry, clamping the ratio into 0..=1
    pub fn intersection(target: ElementId, ratio: f64) -> Self {
        let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
        HostEvent::Intersection {
            target,
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }
}
