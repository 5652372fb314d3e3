// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuroscope Engine
//!
//! Stateful half of the visualizer. Owns the neuron graph behind a lock,
//! grows topologies, applies stimuli, schedules staged relay propagation,
//! and runs the per-frame decay/easing loop.
//!
//! ## Architecture
//!
//! - [`NetworkState`](network::NetworkState): neurons, connections, and
//!   bursts; all mutation happens through it under one write lock
//! - [`topology`]: layered layout + sparse random connection genesis
//! - [`ActivationEngine`](engine::ActivationEngine): the host-facing control
//!   surface (`seed_from_input`, `inject_from_chunk`, `resize_viewport`)
//! - [`propagation`]: staged layer-by-layer relay on timer threads
//! - [`FrameLoopRunner`](frame_loop::FrameLoopRunner): dedicated frame
//!   thread with explicit start/stop lifecycle
//! - [`viz`]: pure projection of state into draw primitives
//!
//! Stats and frames leave the engine through the [`StatsPublisher`] and
//! [`FrameSink`] trait abstractions; the engine never renders and never
//! blocks a caller.

pub mod config;
pub mod engine;
pub mod error;
pub mod frame_loop;
pub mod network;
pub mod propagation;
pub mod stats;
pub mod topology;
pub mod viz;

pub use config::{BurstConfig, DynamicsConfig, EngineConfig, NetworkConfig, TimingConfig};
pub use engine::ActivationEngine;
pub use error::EngineError;
pub use frame_loop::{FrameLoopRunner, FrameSink};
pub use network::NetworkState;
pub use propagation::RelayPhase;
pub use stats::{NullStatsPublisher, StatsPublisher};
pub use viz::{BurstRing, FrameSnapshot, NeuronGlow, PulseLine};
