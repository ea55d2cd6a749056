//! IntersectionObserver - Threshold Visibility Reports

use ahash::AHashMap;
use crossbeam_channel::Sender;

use super::event::{ElementId, HostEvent};

#[derive(Debug, Clone, Copy)]
struct Registration {
    threshold: f64,
    /// Whether the last reported ratio was at or above the threshold
    last_above: Option<bool>,
}

/// Tracks which elements want visibility reports and at what threshold.
///
/// Entries are queued only when a report crosses the registered threshold
/// (or on the first report), matching how browser observers fire.
#[derive(Debug)]
pub struct IntersectionObserver {
    registrations: AHashMap<ElementId, Registration>,
    tx: Sender<HostEvent>,
}

impl IntersectionObserver {
    pub fn new(tx: Sender<HostEvent>) -> Self {
        Self {
            registrations: AHashMap::new(),
            tx,
        }
    }

    /// Start observing `target`. Re-observing replaces the threshold.
    pub fn observe(&mut self, target: ElementId, threshold: f64) {
        let threshold = if threshold.is_finite() { threshold.clamp(0.0, 1.0) } else { 0.0 };
        tracing::debug!("Observing {target} at threshold {threshold}");
        self.registrations.insert(
            target,
            Registration {
                threshold,
                last_above: None,
            },
        );
    }

    /// Stop observing `target`. Returns whether it was registered.
    pub fn unobserve(&mut self, target: ElementId) -> bool {
        let removed = self.registrations.remove(&target).is_some();
        if removed {
            tracing::debug!("Unobserved {target}");
        }
        removed
    }

    /// Whether `target` currently has a registration
    pub fn is_observing(&self, target: ElementId) -> bool {
        self.registrations.contains_key(&target)
    }

    /// Threshold registered for `target`
    pub fn threshold(&self, target: ElementId) -> Option<f64> {
        self.registrations.get(&target).map(|r| r.threshold)
    }

    /// Number of live registrations
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Report the visible ratio of `target`.
    ///
    /// Returns true if an entry was queued.
    pub fn report(&mut self, target: ElementId, ratio: f64) -> bool {
        let Some(reg) = self.registrations.get_mut(&target) else {
            return false;
        };
        let entry = HostEvent::intersection(target, ratio);
        let HostEvent::Intersection { ratio, .. } = entry else {
            return false;
        };
        let above = ratio >= reg.threshold && ratio > 0.0;
        if reg.last_above == Some(above) {
            return false;
        }
        reg.last_above = Some(above);
        self.tx.send(entry).is_ok()
    }
}
