// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration
//!
//! Type-safe configuration with TOML loading. Every section carries the
//! documented defaults via `#[serde(default)]`, so a config file only needs
//! to name the values it overrides.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root engine configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    pub network: NetworkConfig,
    pub dynamics: DynamicsConfig,
    pub timing: TimingConfig,
    pub burst: BurstConfig,
}

impl EngineConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, EngineError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// Network shape configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Neurons per layer, input layer first
    pub layers: Vec<usize>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            layers: vec![32, 64, 64, 32, 16],
        }
    }
}

/// Per-frame and per-stimulus dynamics coefficients.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct DynamicsConfig {
    /// A target above this counts as an activation (counter + burst)
    pub activation_threshold: f32,
    /// Fraction of the activation-to-target gap closed per frame
    pub easing_rate: f32,
    /// Fraction of a target activation retained per frame
    pub target_retain: f32,
    /// Fraction of a connection signal retained per frame
    pub signal_retain: f32,
    /// Target boost applied to the neuron struck by a stream chunk
    pub chunk_boost: f32,
    /// Fixed relay gain for the synchronous one-hop chunk relay
    pub chunk_gain: f32,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            activation_threshold: 0.3,
            easing_rate: 0.1,
            target_retain: 0.96,
            signal_retain: 0.94,
            chunk_boost: 0.5,
            chunk_gain: 0.5,
        }
    }
}

/// Scheduling configuration.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay between successive relay stages after a seed stimulus
    pub relay_interval_ms: u64,
    /// Frame loop frequency
    pub frame_rate_hz: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            relay_interval_ms: 150,
            frame_rate_hz: 60.0,
        }
    }
}

/// Burst ring geometry and aging.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Radius a ring spawns with
    pub spawn_radius: f32,
    /// Radius added per frame
    pub growth: f32,
    /// Opacity removed per frame
    pub fade: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            spawn_radius: 5.0,
            growth: 1.5,
            fade: 0.04,
        }
    }
}
