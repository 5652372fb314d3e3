// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuroscope - Layered Neural-Activity Visualization Engine
//!
//! Neuroscope animates a layered artificial-neuron graph whose nodes pulse and
//! whose edges carry decaying signal pulses. Two external triggers drive it:
//! an input string that seeds activation in the first layer and relays it
//! forward with staggered delays, and a stream of text fragments that each
//! perturb one randomly-chosen hidden-layer neuron.
//!
//! ## Components
//!
//! - [`neuroscope_neural`](neural): pure types and per-frame dynamics
//!   algorithms (no I/O, no clocks, no randomness)
//! - [`neuroscope_engine`](engine): stateful engine with topology genesis,
//!   stimulus handling, delayed relay propagation, and the frame loop
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use neuroscope::prelude::*;
//! use std::sync::Arc;
//!
//! let config = EngineConfig::default();
//! let engine = ActivationEngine::new(config, (800.0, 600.0), Arc::new(NullStatsPublisher));
//!
//! // Seed a "thinking" animation, then feed streamed fragments as they arrive.
//! engine.seed_from_input("How do neural networks work?");
//! engine.inject_from_chunk("Neural networks are");
//! ```
//!
//! The host owns rendering: run a [`FrameLoopRunner`](engine::FrameLoopRunner)
//! and attach a [`FrameSink`](engine::FrameSink) to receive projected frames.

pub use neuroscope_engine as engine;
pub use neuroscope_neural as neural;

/// Commonly used items for hosts embedding the visualizer.
pub mod prelude {
    pub use neuroscope_engine::{
        ActivationEngine, EngineConfig, FrameLoopRunner, FrameSink, NullStatsPublisher,
        StatsPublisher,
    };
    pub use neuroscope_neural::{NetworkStats, StatsUpdate};
}
