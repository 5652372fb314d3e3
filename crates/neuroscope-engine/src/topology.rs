// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Topology genesis
//!
//! Builds the layered neuron arrangement and its sparse random connections.
//! Layer *i* of *L* sits at `width * (i+1) / (L+1)`; neuron *j* of *n*
//! within a layer sits at `height * (j+1) / (n+1)`. Every non-final-layer
//! neuron gets `min(5, next_layer_size)` outgoing edges, each to an
//! independently drawn uniform destination in the next layer with an
//! independently drawn uniform weight in [-1, 1]. Connections never skip
//! layers and never run backward.
//!
//! Genesis functions are generic over [`rand::Rng`] so structural tests can
//! drive them with a seeded source; the runtime uses `thread_rng`, so the
//! exact connection membership varies per build.

use neuroscope_neural::{Connection, Neuron, NeuronRef, Viewport};
use rand::Rng;
use tracing::debug;

/// Upper bound on outgoing edges per neuron.
pub const MAX_OUTGOING_PER_NEURON: usize = 5;

/// Arrange neurons for the given layer sizes inside the viewport.
///
/// Degenerate input (no layers, a zero-sized layer, or a non-renderable
/// viewport) yields an empty arrangement rather than a panic; the caller's
/// graph simply stays empty until valid input arrives.
pub fn layout_layers(layer_sizes: &[usize], viewport: Viewport) -> Vec<Vec<Neuron>> {
    if layer_sizes.is_empty() || layer_sizes.contains(&0) || !viewport.is_renderable() {
        debug!(
            ?layer_sizes,
            ?viewport,
            "degenerate topology request, leaving arrangement empty"
        );
        return Vec::new();
    }

    let layer_spacing = viewport.width / (layer_sizes.len() as f32 + 1.0);
    layer_sizes
        .iter()
        .enumerate()
        .map(|(layer_index, &neuron_count)| {
            let neuron_spacing = viewport.height / (neuron_count as f32 + 1.0);
            (0..neuron_count)
                .map(|i| {
                    Neuron::at(
                        layer_spacing * (layer_index as f32 + 1.0),
                        neuron_spacing * (i as f32 + 1.0),
                        layer_index,
                    )
                })
                .collect()
        })
        .collect()
}

/// Grow forward connections between each pair of adjacent layers.
///
/// Destination choices are independent per edge slot, so a source may
/// double-target the same destination; that duplication is allowed.
pub fn grow_connections<R: Rng>(layers: &[Vec<Neuron>], rng: &mut R) -> Vec<Connection> {
    let mut connections = Vec::new();
    for source_layer in 0..layers.len().saturating_sub(1) {
        let next_size = layers[source_layer + 1].len();
        let per_neuron = MAX_OUTGOING_PER_NEURON.min(next_size);
        for source_index in 0..layers[source_layer].len() {
            for _ in 0..per_neuron {
                connections.push(Connection::new(
                    NeuronRef::new(source_layer, source_index),
                    NeuronRef::new(source_layer + 1, rng.gen_range(0..next_size)),
                    rng.gen_range(-1.0f32..=1.0),
                ));
            }
        }
    }
    connections
}
