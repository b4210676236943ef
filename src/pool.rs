//! Bounded, time aware store of reference observations
use hifitime::{Duration, Epoch};
use itertools::Itertools;
use log::debug;

use crate::observation::ReferenceObservation;

/// Bounded pool of the most recent [ReferenceObservation] per emitter.
/// Latest wins per identity; entries expire by age, never explicitly;
/// the pool never exceeds its configured capacity.
#[derive(Debug, Clone)]
pub struct ReferencePool {
    capacity: usize,
    inner: Vec<ReferenceObservation>,
}

impl ReferencePool {
    /// Allocates a new [ReferencePool]. Capacity is small (3 in the
    /// nominal setup), a plain vector beats any index structure here.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Inserts or replaces the entry for this emitter. When a new
    /// identity would exceed capacity, the oldest entry is evicted
    /// (ties broken by evicting the greater identity).
    pub fn upsert(&mut self, observation: ReferenceObservation) {
        if self.capacity == 0 {
            return;
        }
        if let Some(entry) = self.inner.iter_mut().find(|obs| obs.id == observation.id) {
            *entry = observation;
            return;
        }
        if self.inner.len() == self.capacity {
            if let Some(index) = self.eviction_index() {
                let evicted = self.inner.swap_remove(index);
                debug!("pool: evicted \"{}\" (oldest)", evicted.id);
            }
        }
        self.inner.push(observation);
    }

    /// Drops every entry older than `max_stale` as seen from `now`.
    /// Idempotent, O(capacity).
    pub fn prune_stale(&mut self, now: Epoch, max_stale: Duration) {
        self.inner.retain(|obs| {
            let fresh = obs.age(now) <= max_stale;
            if !fresh {
                debug!("pool: pruned \"{}\" ({} old)", obs.id, obs.age(now));
            }
            fresh
        });
    }

    /// The stored observations, most recent first, ties broken by
    /// ascending identity, truncated to `limit` entries. The ordering
    /// is fully deterministic so that the "3 most recent" selection
    /// is reproducible.
    pub fn snapshot(&self, limit: usize) -> Vec<&ReferenceObservation> {
        self.inner
            .iter()
            .sorted_by(|a, b| {
                b.observed_at
                    .cmp(&a.observed_at)
                    .then_with(|| a.id.cmp(&b.id))
            })
            .take(limit)
            .collect()
    }

    /// Number of stored observations.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Drops everything.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /*
     * Index of the entry to evict: oldest observation, greater
     * identity on equal age.
     */
    fn eviction_index(&self) -> Option<usize> {
        self.inner
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.observed_at
                    .cmp(&b.observed_at)
                    .then_with(|| b.id.cmp(&a.id))
            })
            .map(|(index, _)| index)
    }
}
