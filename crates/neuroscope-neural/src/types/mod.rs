// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neural Types Module
//!
//! Core type definitions for the neuroscope visualization graph.

pub mod ids;
pub mod neuron;
pub mod spatial;
pub mod stats;

// Re-export commonly used types
pub use ids::NeuronRef;
pub use neuron::{Burst, Connection, Neuron};
pub use spatial::Viewport;
pub use stats::{NetworkStats, StatsUpdate};
