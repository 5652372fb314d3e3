// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Network statistics reported to the host
//!
//! The engine does not retain stat history; it fires partial updates and the
//! host merges them into a [`NetworkStats`] display model.

use serde::{Deserialize, Serialize};

/// Host-side display model for network statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Total neurons across all layers
    pub neuron_count: usize,
    /// Number of layers in the topology
    pub layer_count: usize,
    /// Cumulative threshold crossings for the current stimulus
    pub activations: u32,
    /// Elapsed propagation wall-clock time for the current stimulus
    pub process_time_ms: u64,
}

impl NetworkStats {
    /// Stats for a freshly built topology, with no stimulus recorded yet.
    pub fn for_topology(layer_sizes: &[usize]) -> Self {
        Self {
            neuron_count: layer_sizes.iter().sum(),
            layer_count: layer_sizes.len(),
            activations: 0,
            process_time_ms: 0,
        }
    }

    /// Merge a partial update into the display model.
    pub fn apply(&mut self, update: &StatsUpdate) {
        if let Some(activations) = update.activations {
            self.activations = activations;
        }
        if let Some(ms) = update.process_time_ms {
            self.process_time_ms = ms;
        }
    }

    /// Zero the per-stimulus counters before a new stimulus begins.
    pub fn reset_stimulus(&mut self) {
        self.activations = 0;
        self.process_time_ms = 0;
    }
}

/// Fire-and-forget partial stats event emitted by the engine.
///
/// Any subset of fields may be present; absent fields leave the host's
/// current value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsUpdate {
    pub activations: Option<u32>,
    pub process_time_ms: Option<u64>,
}

impl StatsUpdate {
    pub fn activations(count: u32) -> Self {
        Self {
            activations: Some(count),
            ..Self::default()
        }
    }

    pub fn process_time(ms: u64) -> Self {
        Self {
            process_time_ms: Some(ms),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topology_totals() {
        let stats = NetworkStats::for_topology(&[32, 64, 64, 32, 16]);
        assert_eq!(stats.neuron_count, 208);
        assert_eq!(stats.layer_count, 5);
        assert_eq!(stats.activations, 0);
    }

    #[test]
    fn test_partial_update_leaves_other_fields() {
        let mut stats = NetworkStats::for_topology(&[4, 4]);
        stats.apply(&StatsUpdate::activations(7));
        assert_eq!(stats.activations, 7);
        assert_eq!(stats.process_time_ms, 0);

        stats.apply(&StatsUpdate::process_time(450));
        assert_eq!(stats.activations, 7);
        assert_eq!(stats.process_time_ms, 450);
    }

    #[test]
    fn test_stimulus_reset_keeps_topology_counts() {
        let mut stats = NetworkStats::for_topology(&[4, 4]);
        stats.apply(&StatsUpdate::activations(3));
        stats.apply(&StatsUpdate::process_time(600));
        stats.reset_stimulus();
        assert_eq!(stats.neuron_count, 8);
        assert_eq!(stats.layer_count, 2);
        assert_eq!(stats.activations, 0);
        assert_eq!(stats.process_time_ms, 0);
    }

    #[test]
    fn test_update_round_trips_as_json() {
        let update = StatsUpdate::activations(12);
        let json = serde_json::to_string(&update).unwrap();
        let back: StatsUpdate = serde_json::from_str(&json).unwrap();
        assert_eq!(update, back);
    }
}
