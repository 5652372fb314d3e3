// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Mutable network state
//!
//! Owns the neuron layers, the connection list, and the live burst rings.
//! Every mutation path (stimulus, relay tick, frame step, rebuild) runs
//! through a method here while the caller holds the engine's write lock, so
//! a rebuild replaces neurons, connections, and bursts together and no
//! reader ever observes a mixed old/new topology.

use crate::config::{BurstConfig, DynamicsConfig};
use crate::topology;
use neuroscope_neural::{
    age_burst, decay_signal, decay_target, ease_activation, raise_additive, raise_to_max,
    relay_contribution, seed_target, Burst, Connection, Neuron, NeuronRef, Viewport,
};
use rand::Rng;
use tracing::{debug, info};

/// The layered neuron graph plus its ephemeral visual state.
#[derive(Debug)]
pub struct NetworkState {
    layers: Vec<Vec<Neuron>>,
    connections: Vec<Connection>,
    bursts: Vec<Burst>,
    viewport: Viewport,
    dynamics: DynamicsConfig,
    burst: BurstConfig,
}

impl NetworkState {
    /// An empty graph; call [`rebuild`](Self::rebuild) to populate it.
    pub fn new(dynamics: DynamicsConfig, burst: BurstConfig) -> Self {
        Self {
            layers: Vec::new(),
            connections: Vec::new(),
            bursts: Vec::new(),
            viewport: Viewport::new(0.0, 0.0),
            dynamics,
            burst,
        }
    }

    /// Discard and regrow the whole graph for a viewport.
    ///
    /// Neurons, connections, and bursts are replaced together; bursts from
    /// the old topology would otherwise linger at stale positions. A
    /// degenerate request leaves the graph empty.
    pub fn rebuild<R: Rng>(&mut self, layer_sizes: &[usize], viewport: Viewport, rng: &mut R) {
        self.layers = topology::layout_layers(layer_sizes, viewport);
        self.connections = topology::grow_connections(&self.layers, rng);
        self.bursts.clear();
        self.viewport = viewport;
        info!(
            neurons = self.neuron_count(),
            connections = self.connections.len(),
            layers = self.layers.len(),
            "rebuilt network topology"
        );
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layers(&self) -> &[Vec<Neuron>] {
        &self.layers
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn neuron_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn neuron(&self, reference: NeuronRef) -> Option<&Neuron> {
        self.layers.get(reference.layer)?.get(reference.index)
    }

    fn neuron_mut(&mut self, reference: NeuronRef) -> Option<&mut Neuron> {
        self.layers.get_mut(reference.layer)?.get_mut(reference.index)
    }

    fn spawn_burst(&mut self, reference: NeuronRef) {
        let radius = self.burst.spawn_radius;
        if let Some((x, y)) = self.neuron(reference).map(|n| (n.x, n.y)) {
            self.bursts.push(Burst::spawn(x, y, radius));
        }
    }

    /// Zero every neuron and every connection signal, clearing residue from
    /// a prior stimulus. Live bursts are left to fade out on their own.
    pub fn clear_stimulus(&mut self) {
        for layer in &mut self.layers {
            for neuron in layer {
                neuron.rest();
            }
        }
        for connection in &mut self.connections {
            connection.signal = 0.0;
        }
    }

    /// Seed the first layer from a text hash.
    ///
    /// Sets each first-layer target to the deterministic seeding formula and
    /// spawns a burst for every threshold crossing.
    ///
    /// # Returns
    /// Number of first-layer neurons that crossed the activation threshold
    pub fn seed_first_layer(&mut self, text_hash: u32) -> u32 {
        let threshold = self.dynamics.activation_threshold;
        let mut crossings = Vec::new();
        let Some(first_layer) = self.layers.first_mut() else {
            return 0;
        };
        for (index, neuron) in first_layer.iter_mut().enumerate() {
            let target = seed_target(text_hash, index);
            neuron.target_activation = target;
            if target > threshold {
                crossings.push(NeuronRef::new(0, index));
            }
        }
        for reference in &crossings {
            self.spawn_burst(*reference);
        }
        crossings.len() as u32
    }

    /// One staged relay tick: push activation from `source_layer` into the
    /// next layer along every connection whose source is over threshold.
    ///
    /// The relay gain is drawn uniformly from [0.5, 1.0] per edge, and a
    /// destination target only ever rises to the strongest incoming pulse.
    ///
    /// # Returns
    /// Number of destination threshold crossings this tick
    pub fn relay_layer<R: Rng>(&mut self, source_layer: usize, rng: &mut R) -> u32 {
        if source_layer + 1 >= self.layers.len() {
            return 0;
        }
        let threshold = self.dynamics.activation_threshold;
        let mut crossings = 0u32;
        for ci in 0..self.connections.len() {
            let (from, to, weight) = {
                let conn = &self.connections[ci];
                (conn.from, conn.to, conn.weight)
            };
            if from.layer != source_layer {
                continue;
            }
            let Some(source_target) = self.neuron(from).map(|n| n.target_activation) else {
                continue;
            };
            if source_target <= threshold {
                continue;
            }
            self.connections[ci].signal = source_target;
            let contribution = relay_contribution(source_target, weight, rng.gen_range(0.5..1.0));
            if let Some(destination) = self.neuron_mut(to) {
                raise_to_max(&mut destination.target_activation, contribution);
            }
            if contribution > threshold {
                crossings += 1;
                self.spawn_burst(to);
            }
        }
        crossings
    }

    /// Perturb one neuron with a streamed fragment and relay exactly one hop
    /// forward, synchronously.
    ///
    /// Unlike the staged relay, contributions here stack additively on the
    /// destination (clamped to 1) with a fixed gain, and nothing is counted
    /// toward the stimulus activation total.
    pub fn inject_at(&mut self, reference: NeuronRef) {
        let boost = self.dynamics.chunk_boost;
        let gain = self.dynamics.chunk_gain;
        let threshold = self.dynamics.activation_threshold;

        let Some(neuron) = self.neuron_mut(reference) else {
            return;
        };
        raise_additive(&mut neuron.target_activation, boost);
        let source_target = neuron.target_activation;
        self.spawn_burst(reference);

        for ci in 0..self.connections.len() {
            let (from, to, weight) = {
                let conn = &self.connections[ci];
                (conn.from, conn.to, conn.weight)
            };
            if from != reference {
                continue;
            }
            self.connections[ci].signal = source_target;
            let contribution = relay_contribution(source_target, weight, gain);
            if let Some(destination) = self.neuron_mut(to) {
                raise_additive(&mut destination.target_activation, contribution);
            }
            if contribution > threshold {
                self.spawn_burst(to);
            }
        }
        debug!(
            layer = reference.layer,
            index = reference.index,
            target = source_target,
            "injected stream fragment"
        );
    }

    /// Advance the visual state by one frame: age bursts, decay signals,
    /// ease activations toward their targets, decay the targets.
    pub fn frame_step(&mut self) {
        let growth = self.burst.growth;
        let fade = self.burst.fade;
        self.bursts
            .retain_mut(|b| age_burst(&mut b.radius, &mut b.opacity, growth, fade));

        for connection in &mut self.connections {
            decay_signal(&mut connection.signal, self.dynamics.signal_retain);
        }
        for layer in &mut self.layers {
            for neuron in layer {
                ease_activation(
                    &mut neuron.activation,
                    neuron.target_activation,
                    self.dynamics.easing_rate,
                );
                decay_target(&mut neuron.target_activation, self.dynamics.target_retain);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn built_state(layer_sizes: &[usize]) -> NetworkState {
        let mut state = NetworkState::new(DynamicsConfig::default(), BurstConfig::default());
        let mut rng = StdRng::seed_from_u64(42);
        state.rebuild(layer_sizes, Viewport::new(800.0, 600.0), &mut rng);
        state
    }

    #[test]
    fn test_rebuild_replaces_everything() {
        let mut state = built_state(&[4, 6, 3]);
        state.bursts.push(Burst::spawn(1.0, 1.0, 5.0));
        let mut rng = StdRng::seed_from_u64(1);
        state.rebuild(&[2, 2], Viewport::new(400.0, 300.0), &mut rng);
        assert_eq!(state.layer_count(), 2);
        assert_eq!(state.neuron_count(), 4);
        assert!(state.bursts().is_empty(), "stale bursts must not survive");
    }

    #[test]
    fn test_empty_seed_activates_whole_first_layer() {
        // hash 0 puts every first-layer target at exactly 0.5, over the
        // 0.3 threshold
        let mut state = built_state(&[4, 6, 3]);
        let crossings = state.seed_first_layer(0);
        assert_eq!(crossings, 4);
        assert_eq!(state.bursts().len(), 4);
        for neuron in &state.layers()[0] {
            assert_eq!(neuron.target_activation, 0.5);
        }
    }

    #[test]
    fn test_seeding_is_deterministic() {
        let mut a = built_state(&[8, 4]);
        let mut b = built_state(&[8, 4]);
        a.seed_first_layer(532);
        b.seed_first_layer(532);
        for (left, right) in a.layers()[0].iter().zip(&b.layers()[0]) {
            assert_eq!(left.target_activation, right.target_activation);
        }
    }

    #[test]
    fn test_double_seed_leaves_no_residue() {
        let mut state = built_state(&[4, 6, 3]);
        state.seed_first_layer(532);
        let mut rng = StdRng::seed_from_u64(5);
        state.relay_layer(0, &mut rng);

        state.clear_stimulus();
        for layer in state.layers() {
            for neuron in layer {
                assert_eq!(neuron.activation, 0.0);
                assert_eq!(neuron.target_activation, 0.0);
            }
        }
        for connection in state.connections() {
            assert_eq!(connection.signal, 0.0);
        }

        // Reseeding now matches a fresh seed exactly.
        let crossings = state.seed_first_layer(532);
        let mut fresh = built_state(&[4, 6, 3]);
        assert_eq!(crossings, fresh.seed_first_layer(532));
    }

    #[test]
    fn test_relay_pushes_into_next_layer_only() {
        let mut state = built_state(&[4, 6, 3]);
        state.seed_first_layer(0); // all first-layer targets at 0.5
        let mut rng = StdRng::seed_from_u64(9);
        state.relay_layer(0, &mut rng);

        let touched: usize = state.layers()[1]
            .iter()
            .filter(|n| n.target_activation > 0.0)
            .count();
        assert!(touched > 0, "relay must reach the second layer");
        for neuron in &state.layers()[2] {
            assert_eq!(neuron.target_activation, 0.0, "relay must not skip layers");
        }
        // Signals along first-boundary connections carry the source target.
        assert!(state
            .connections()
            .iter()
            .filter(|c| c.from.layer == 0)
            .all(|c| c.signal == 0.5));
    }

    #[test]
    fn test_relay_from_last_layer_is_noop() {
        let mut state = built_state(&[4, 6, 3]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(state.relay_layer(2, &mut rng), 0);
        assert_eq!(state.relay_layer(99, &mut rng), 0);
    }

    #[test]
    fn test_inject_boosts_and_relays_one_hop() {
        let mut state = built_state(&[4, 6, 3]);
        let target = NeuronRef::new(1, 2);
        state.inject_at(target);

        let struck = state.neuron(target).unwrap();
        assert_eq!(struck.target_activation, 0.5);
        assert!(!state.bursts().is_empty());

        // Outgoing connections carry the raised target as their signal.
        for conn in state.connections().iter().filter(|c| c.from == target) {
            assert_eq!(conn.signal, 0.5);
        }
        // Layer 0 is untouched: injection only relays forward.
        for neuron in &state.layers()[0] {
            assert_eq!(neuron.target_activation, 0.0);
        }
    }

    #[test]
    fn test_inject_stacks_additively_to_clamp() {
        let mut state = built_state(&[4, 6, 3]);
        let target = NeuronRef::new(1, 0);
        state.inject_at(target);
        state.inject_at(target);
        state.inject_at(target);
        assert_eq!(state.neuron(target).unwrap().target_activation, 1.0);
    }

    #[test]
    fn test_frame_step_decays_and_eases() {
        let mut state = built_state(&[4, 6, 3]);
        state.seed_first_layer(0);
        let before_target = state.layers()[0][0].target_activation;
        state.frame_step();
        let neuron = &state.layers()[0][0];
        // activation moved 10% of the way toward the (pre-decay) target
        assert!((neuron.activation - before_target * 0.1).abs() < 1e-6);
        // target decayed by 4%
        assert!((neuron.target_activation - before_target * 0.96).abs() < 1e-6);
    }

    #[test]
    fn test_frame_step_prunes_dead_bursts() {
        let mut state = built_state(&[4, 6, 3]);
        state.bursts.push(Burst::spawn(10.0, 10.0, 5.0));
        for _ in 0..24 {
            state.frame_step();
        }
        assert_eq!(state.bursts().len(), 1, "alive through frame 24");
        state.frame_step();
        assert!(state.bursts().is_empty(), "dropped on frame 25");
    }
}
