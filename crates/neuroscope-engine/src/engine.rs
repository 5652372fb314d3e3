// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Host-facing control surface
//!
//! Two stimulus entry points drive the whole visualization: seeding a
//! "thinking" animation from a full input string, and injecting one streamed
//! text fragment. Both return immediately; staged propagation continues on
//! timer threads after a seed.

use crate::config::EngineConfig;
use crate::network::NetworkState;
use crate::propagation;
use crate::stats::StatsPublisher;
use neuroscope_neural::{char_sum_hash, NeuronRef, StatsUpdate, Viewport};
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// The engine owning the shared network state.
///
/// All mutation funnels through the internal `RwLock`; stimulus calls take
/// the write lock briefly and hand longer-running propagation to detached
/// timer threads. Cloning the state handle (for a frame loop or a renderer)
/// is cheap.
pub struct ActivationEngine {
    state: Arc<RwLock<NetworkState>>,
    stats: Arc<dyn StatsPublisher>,
    config: EngineConfig,
}

impl ActivationEngine {
    /// Build the engine and grow the initial topology for a viewport.
    pub fn new(
        config: EngineConfig,
        viewport: impl Into<Viewport>,
        stats: Arc<dyn StatsPublisher>,
    ) -> Self {
        let mut network = NetworkState::new(config.dynamics, config.burst);
        network.rebuild(
            &config.network.layers,
            viewport.into(),
            &mut rand::thread_rng(),
        );
        Self {
            state: Arc::new(RwLock::new(network)),
            stats,
            config,
        }
    }

    /// Shared handle to the network state, for frame loops and renderers.
    pub fn state_handle(&self) -> Arc<RwLock<NetworkState>> {
        Arc::clone(&self.state)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a seeded thinking animation for an input string.
    ///
    /// Clears residue from any prior stimulus, seeds the first layer from
    /// the text's deterministic hash, reports the initial activation count,
    /// and schedules the staged forward relay. Returns immediately; relay
    /// ticks and the completion report arrive via the stats publisher.
    pub fn seed_from_input(&self, text: &str) {
        let started = Instant::now();
        let text_hash = char_sum_hash(text);

        let (crossings, layer_count) = {
            let mut network = self.state.write();
            if network.is_empty() {
                debug!("seed requested on an empty topology, ignoring");
                return;
            }
            network.clear_stimulus();
            (network.seed_first_layer(text_hash), network.layer_count())
        };

        info!(
            text_hash,
            crossings,
            chars = text.chars().count(),
            "seeded thinking animation"
        );
        self.stats.publish_stats(StatsUpdate::activations(crossings));

        propagation::spawn_relay_sequence(
            Arc::clone(&self.state),
            Arc::clone(&self.stats),
            self.config.timing.relay_interval_ms,
            layer_count,
            crossings,
            started,
        );
    }

    /// Inject one streamed text fragment.
    ///
    /// Perturbs a randomly-chosen hidden-layer neuron (the neuron within the
    /// layer is picked deterministically from the fragment's hash) and
    /// relays exactly one hop forward, synchronously. Repeated identical
    /// fragments still vary visually because the layer choice is random per
    /// call. No-op without a topology or without hidden layers.
    pub fn inject_from_chunk(&self, chunk: &str) {
        let text_hash = char_sum_hash(chunk);
        let mut network = self.state.write();
        let layer_count = network.layer_count();
        if layer_count < 3 {
            debug!(layer_count, "no hidden layer to perturb, ignoring fragment");
            return;
        }

        let layer = rand::thread_rng().gen_range(1..layer_count - 1);
        let layer_size = network.layers()[layer].len();
        let index = text_hash as usize % layer_size;
        network.inject_at(NeuronRef::new(layer, index));
    }

    /// Rebuild the topology for a changed render surface.
    ///
    /// Neurons, connections, and in-flight bursts are replaced atomically so
    /// no frame or relay tick observes a mixed old/new arrangement.
    pub fn resize_viewport(&self, viewport: impl Into<Viewport>) {
        let viewport = viewport.into();
        let mut network = self.state.write();
        network.rebuild(
            &self.config.network.layers,
            viewport,
            &mut rand::thread_rng(),
        );
    }
}
