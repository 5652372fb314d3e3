// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Staged relay propagation
//!
//! After a seed stimulus, activation relays forward one layer boundary at a
//! time with a fixed delay between stages: the relay for source layer `l`
//! fires `(l + 1) * interval` after the seed, and a completion report fires
//! one interval after the last relay.
//!
//! Each seed spawns its own detached timer thread. A new seed while a prior
//! sequence is still pending does NOT cancel the old thread: its remaining
//! ticks only add bounded activation to a graph that was just reset and
//! reseeded, and that activation decays away within a few frames.

use crate::network::NetworkState;
use crate::stats::StatsPublisher;
use neuroscope_neural::StatsUpdate;
use parking_lot::RwLock;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Where a relay sequence currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayPhase {
    /// The next tick relays from this source layer
    Relaying(usize),
    /// All boundaries relayed; only the completion report remains
    Done,
}

impl RelayPhase {
    /// The starting phase for a topology, or `Done` when there is no
    /// boundary to relay across.
    pub fn start(layer_count: usize) -> Self {
        if layer_count >= 2 {
            Self::Relaying(0)
        } else {
            Self::Done
        }
    }

    /// Advance past one relayed source layer.
    pub fn advance(self, last_source_layer: usize) -> Self {
        match self {
            Self::Relaying(layer) if layer >= last_source_layer => Self::Done,
            Self::Relaying(layer) => Self::Relaying(layer + 1),
            Self::Done => Self::Done,
        }
    }
}

/// Spawn the timer thread driving one seed's relay sequence.
///
/// `seeded_crossings` is the activation count already reported for the
/// first-layer seeding; each tick adds its own crossings and republishes the
/// cumulative total. The returned handle may be dropped: sequences are
/// fire-and-forget by design.
pub(crate) fn spawn_relay_sequence(
    state: Arc<RwLock<NetworkState>>,
    stats: Arc<dyn StatsPublisher>,
    interval_ms: u64,
    layer_count: usize,
    seeded_crossings: u32,
    started: Instant,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let interval = Duration::from_millis(interval_ms);
        let last_source_layer = layer_count.saturating_sub(2);
        let mut rng = rand::thread_rng();
        let mut total = seeded_crossings;
        let mut phase = RelayPhase::start(layer_count);

        while let RelayPhase::Relaying(source_layer) = phase {
            thread::sleep(interval);
            let tick_crossings = state.write().relay_layer(source_layer, &mut rng);
            total += tick_crossings;
            trace!(source_layer, tick_crossings, total, "relay tick");
            stats.publish_stats(StatsUpdate::activations(total));
            phase = phase.advance(last_source_layer);
        }

        thread::sleep(interval);
        let elapsed_ms = started.elapsed().as_millis() as u64;
        debug!(total, elapsed_ms, "relay sequence complete");
        stats.publish_stats(StatsUpdate::process_time(elapsed_ms));
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_walks_every_boundary_then_stops() {
        // 5 layers => source layers 0..=3, then Done
        let mut phase = RelayPhase::start(5);
        let mut visited = Vec::new();
        while let RelayPhase::Relaying(layer) = phase {
            visited.push(layer);
            phase = phase.advance(3);
        }
        assert_eq!(visited, vec![0, 1, 2, 3]);
        assert_eq!(phase.advance(3), RelayPhase::Done);
    }

    #[test]
    fn test_single_layer_has_nothing_to_relay() {
        assert_eq!(RelayPhase::start(1), RelayPhase::Done);
        assert_eq!(RelayPhase::start(0), RelayPhase::Done);
    }
}
