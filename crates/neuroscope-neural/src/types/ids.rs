// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Index-based neuron references

use serde::{Deserialize, Serialize};

/// Reference to a neuron inside layered storage.
///
/// Connections hold `NeuronRef`s instead of direct references so that a
/// topology rebuild can replace every neuron atomically without leaving a
/// connection pointing at freed storage. A ref is only meaningful against
/// the topology generation it was created for; lookups against a rebuilt
/// topology simply resolve to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeuronRef {
    /// Layer index, 0 = input layer
    pub layer: usize,
    /// Position within the layer
    pub index: usize,
}

impl NeuronRef {
    pub const fn new(layer: usize, index: usize) -> Self {
        Self { layer, index }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refs_compare_by_value() {
        assert_eq!(NeuronRef::new(1, 3), NeuronRef::new(1, 3));
        assert_ne!(NeuronRef::new(1, 3), NeuronRef::new(3, 1));
    }
}
