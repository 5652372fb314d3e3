// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Graph element types: neurons, connections, bursts

use super::ids::NeuronRef;
use serde::{Deserialize, Serialize};

/// A single rendered neuron.
///
/// `activation` is the intensity currently on screen; every frame it eases
/// toward `target_activation`, which stimulus operations set and which decays
/// passively over time. Both stay in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neuron {
    /// Horizontal position in layout space
    pub x: f32,
    /// Vertical position in layout space
    pub y: f32,
    /// Current rendered intensity, eased toward the target each frame
    pub activation: f32,
    /// Value the activation eases toward; decays each frame
    pub target_activation: f32,
    /// Layer index, 0 = input layer
    pub layer: usize,
}

impl Neuron {
    /// Create a resting neuron at a layout position.
    pub fn at(x: f32, y: f32, layer: usize) -> Self {
        Self {
            x,
            y,
            activation: 0.0,
            target_activation: 0.0,
            layer,
        }
    }

    /// Zero both intensity values (stimulus reset).
    pub fn rest(&mut self) {
        self.activation = 0.0;
        self.target_activation = 0.0;
    }
}

/// A directed edge between two adjacent layers.
///
/// Endpoints are non-owning [`NeuronRef`]s; the weight is fixed at creation
/// and `signal` carries the in-flight pulse intensity, decayed every frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connection {
    pub from: NeuronRef,
    pub to: NeuronRef,
    /// Fixed weight in [-1, 1], assigned at genesis
    pub weight: f32,
    /// In-flight pulse intensity in [0, 1]
    pub signal: f32,
}

impl Connection {
    pub fn new(from: NeuronRef, to: NeuronRef, weight: f32) -> Self {
        Self {
            from,
            to,
            weight,
            signal: 0.0,
        }
    }
}

/// Ephemeral expanding ring marking a threshold-crossing activation.
///
/// Bursts have no identity beyond their fields; they live in an unordered
/// list that is aged and compacted every frame, and are dropped once the
/// opacity reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Burst {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
}

impl Burst {
    /// Spawn a fresh ring at a neuron position.
    pub fn spawn(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            radius,
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neuron_starts_at_rest() {
        let n = Neuron::at(10.0, 20.0, 2);
        assert_eq!(n.activation, 0.0);
        assert_eq!(n.target_activation, 0.0);
        assert_eq!(n.layer, 2);
    }

    #[test]
    fn test_rest_clears_both_intensities() {
        let mut n = Neuron::at(0.0, 0.0, 0);
        n.activation = 0.7;
        n.target_activation = 0.9;
        n.rest();
        assert_eq!(n.activation, 0.0);
        assert_eq!(n.target_activation, 0.0);
    }

    #[test]
    fn test_connection_spawns_silent() {
        let c = Connection::new(NeuronRef::new(0, 1), NeuronRef::new(1, 4), -0.5);
        assert_eq!(c.signal, 0.0);
        assert_eq!(c.weight, -0.5);
    }

    #[test]
    fn test_burst_spawns_opaque() {
        let b = Burst::spawn(3.0, 4.0, 5.0);
        assert_eq!(b.opacity, 1.0);
        assert_eq!(b.radius, 5.0);
    }
}
