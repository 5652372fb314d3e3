// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuroscope Neural Computation (Platform-Agnostic)
//!
//! ALL pure visualization dynamics in one place:
//! - **Types**: core type definitions (Neuron, Connection, Burst, NeuronRef, stats)
//! - **Dynamics**: per-frame easing/decay algorithms and stimulus formulas
//! - **Utils**: deterministic text hashing and guarded ratio helpers
//!
//! Everything here is pure and deterministic; there is no I/O and no random
//! source. Randomized behavior (topology genesis, relay gain jitter, hidden
//! layer selection) lives in `neuroscope-engine`, which feeds drawn values
//! into these functions.

// Core type definitions
pub mod types;

// Per-frame dynamics algorithms
pub mod dynamics;
pub mod utils;

// Re-export everything for convenience
pub use dynamics::*;
pub use utils::*;

// Re-export types
pub use types::{
    Burst, Connection, NetworkStats, Neuron, NeuronRef, StatsUpdate, Viewport,
};
