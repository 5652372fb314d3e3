// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Frame projection
//!
//! Pure projection of network state into draw primitives. Rendering proper
//! (canvas, colors, shaders) belongs to the host; this module only decides
//! WHAT is visible and with which geometry: value in range => primitive
//! emitted, value at or below the threshold => nothing emitted.

use crate::network::NetworkState;
use serde::{Deserialize, Serialize};

/// Signals at or below this intensity draw nothing.
pub const VISIBLE_SIGNAL: f32 = 0.05;
/// Activations at or below this intensity draw nothing.
pub const VISIBLE_ACTIVATION: f32 = 0.05;
/// Background grid pitch in layout units.
pub const GRID_PITCH: f32 = 40.0;

const POSITIVE_WEIGHT_HUE: f32 = 240.0;
const NEGATIVE_WEIGHT_HUE: f32 = 280.0;
const LINE_WIDTH_SCALE: f32 = 1.5;
const LINE_ALPHA_SCALE: f32 = 0.5;
const GLOW_RADIUS_SCALE: f32 = 20.0;
const CORE_RADIUS: f32 = 6.0;

/// A pulse travelling along a visible connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseLine {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub width: f32,
    pub hue: f32,
    pub alpha: f32,
}

/// A glowing active neuron.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronGlow {
    pub x: f32,
    pub y: f32,
    pub core_radius: f32,
    pub glow_radius: f32,
    pub intensity: f32,
}

/// An expanding burst ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurstRing {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub opacity: f32,
}

/// Everything a host needs to paint one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub width: f32,
    pub height: f32,
    pub grid_pitch: f32,
    pub lines: Vec<PulseLine>,
    pub glows: Vec<NeuronGlow>,
    pub rings: Vec<BurstRing>,
}

/// Project the current network state into draw primitives.
pub fn project_frame(network: &NetworkState) -> FrameSnapshot {
    let viewport = network.viewport();

    let lines = network
        .connections()
        .iter()
        .filter(|conn| conn.signal > VISIBLE_SIGNAL)
        .filter_map(|conn| {
            let from = network.neuron(conn.from)?;
            let to = network.neuron(conn.to)?;
            Some(PulseLine {
                x1: from.x,
                y1: from.y,
                x2: to.x,
                y2: to.y,
                width: LINE_WIDTH_SCALE * conn.signal,
                hue: if conn.weight > 0.0 {
                    POSITIVE_WEIGHT_HUE
                } else {
                    NEGATIVE_WEIGHT_HUE
                },
                alpha: conn.signal * LINE_ALPHA_SCALE,
            })
        })
        .collect();

    let glows = network
        .layers()
        .iter()
        .flatten()
        .filter(|neuron| neuron.activation > VISIBLE_ACTIVATION)
        .map(|neuron| NeuronGlow {
            x: neuron.x,
            y: neuron.y,
            core_radius: CORE_RADIUS,
            glow_radius: neuron.activation * GLOW_RADIUS_SCALE,
            intensity: neuron.activation,
        })
        .collect();

    let rings = network
        .bursts()
        .iter()
        .map(|burst| BurstRing {
            x: burst.x,
            y: burst.y,
            radius: burst.radius,
            opacity: burst.opacity,
        })
        .collect();

    FrameSnapshot {
        width: viewport.width,
        height: viewport.height,
        grid_pitch: GRID_PITCH,
        lines,
        glows,
        rings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BurstConfig, DynamicsConfig};
    use neuroscope_neural::{NeuronRef, Viewport};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn built_state() -> NetworkState {
        let mut state = NetworkState::new(DynamicsConfig::default(), BurstConfig::default());
        let mut rng = StdRng::seed_from_u64(17);
        state.rebuild(&[4, 6, 3], Viewport::new(800.0, 600.0), &mut rng);
        state
    }

    #[test]
    fn test_resting_network_projects_nothing() {
        let frame = project_frame(&built_state());
        assert!(frame.lines.is_empty());
        assert!(frame.glows.is_empty());
        assert!(frame.rings.is_empty());
        assert_eq!(frame.grid_pitch, GRID_PITCH);
    }

    #[test]
    fn test_seeded_network_projects_rings_then_glows() {
        let mut state = built_state();
        state.seed_first_layer(0);
        // Targets are set but activations have not eased yet: rings only.
        let frame = project_frame(&state);
        assert_eq!(frame.rings.len(), 4);
        assert!(frame.glows.is_empty());

        // After a few frames the eased activations cross the visibility
        // threshold.
        state.frame_step();
        state.frame_step();
        let frame = project_frame(&state);
        assert_eq!(frame.glows.len(), 4);
        for glow in &frame.glows {
            assert!(glow.intensity > VISIBLE_ACTIVATION);
            assert!((glow.glow_radius - glow.intensity * GLOW_RADIUS_SCALE).abs() < 1e-6);
        }
    }

    #[test]
    fn test_signal_visibility_threshold() {
        let mut state = built_state();
        state.inject_at(NeuronRef::new(1, 0));
        let visible_before = project_frame(&state).lines.len();
        assert!(visible_before > 0, "raised signals must draw");

        // 0.5 * 0.94^n dips below 0.05 after 37 frames
        for _ in 0..40 {
            state.frame_step();
        }
        assert!(project_frame(&state).lines.is_empty());
    }

    #[test]
    fn test_line_hue_follows_weight_sign() {
        let mut state = built_state();
        state.inject_at(NeuronRef::new(0, 0));
        for line in &project_frame(&state).lines {
            assert!(line.hue == POSITIVE_WEIGHT_HUE || line.hue == NEGATIVE_WEIGHT_HUE);
        }
    }
}
