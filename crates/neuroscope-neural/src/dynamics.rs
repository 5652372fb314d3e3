// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Per-frame visualization dynamics
//!
//! Pure functions for easing, decay, and stimulus formulas. Each is
//! deterministic and platform-agnostic; the engine applies them to every
//! neuron, connection, and burst once per frame (or once per stimulus for
//! the seeding formula).

/// Compute the seeded target activation for a first-layer neuron.
///
/// Deterministic pseudo-variation per neuron index: identical input text on
/// an identical topology always produces identical first-layer targets.
///
/// # Arguments
/// * `text_hash` - Character-sum hash of the input text
/// * `neuron_index` - Position of the neuron within the first layer
///
/// # Returns
/// Target activation in [0, 1]
///
/// # Example
/// ```
/// use neuroscope_neural::seed_target;
///
/// // Hash 0 (empty input) lands every neuron exactly at 0.5.
/// assert_eq!(seed_target(0, 0), 0.5);
/// assert_eq!(seed_target(0, 41), 0.5);
///
/// // Identical inputs produce identical targets.
/// assert_eq!(seed_target(532, 3), seed_target(532, 3));
/// ```
#[inline]
pub fn seed_target(text_hash: u32, neuron_index: usize) -> f32 {
    let phase = f64::from(text_hash) * (neuron_index as f64 + 1.0) * 0.01;
    (phase.sin() * 0.5 + 0.5) as f32
}

/// Ease a neuron's rendered activation toward its target.
///
/// Closes 10% of the remaining gap per frame at the default rate: starting
/// from zero with a fixed target of 1, the activation after `n` frames is
/// `1 - 0.9^n` - monotonically approaching but never reaching the target.
///
/// # Arguments
/// * `activation` - Current rendered intensity (mutable)
/// * `target` - Value to ease toward
/// * `rate` - Fraction of the remaining gap closed per frame
#[inline]
pub fn ease_activation(activation: &mut f32, target: f32, rate: f32) {
    *activation += (target - *activation) * rate;
}

/// Apply passive per-frame decay to a target activation.
#[inline]
pub fn decay_target(target: &mut f32, retain: f32) {
    *target *= retain;
}

/// Apply per-frame decay to a connection's in-flight signal.
#[inline]
pub fn decay_signal(signal: &mut f32, retain: f32) {
    *signal *= retain;
}

/// Compute the activation contributed to a destination neuron by one relay
/// hop along a connection.
///
/// # Arguments
/// * `source_target` - The source neuron's target activation
/// * `weight` - Connection weight in [-1, 1] (only magnitude matters)
/// * `gain` - Relay gain; the staged relay path draws this uniformly from
///   [0.5, 1.0], the synchronous chunk path uses a fixed 0.5
#[inline]
pub fn relay_contribution(source_target: f32, weight: f32, gain: f32) -> f32 {
    source_target * weight.abs() * gain
}

/// Raise a target activation additively, clamped to 1.
///
/// Used by the chunk-injection path, which stacks repeated perturbations.
#[inline]
pub fn raise_additive(target: &mut f32, amount: f32) {
    *target = (*target + amount).min(1.0);
}

/// Raise a target activation to at least `value`.
///
/// Used by the staged relay path: the strongest incoming pulse wins, pulses
/// never stack.
#[inline]
pub fn raise_to_max(target: &mut f32, value: f32) {
    *target = target.max(value);
}

/// Age a burst ring by one frame.
///
/// # Arguments
/// * `radius` - Ring radius (mutable, grows)
/// * `opacity` - Ring opacity (mutable, fades)
/// * `growth` - Radius added per frame
/// * `fade` - Opacity removed per frame
///
/// # Returns
/// `true` while the burst is still visible; `false` once the opacity has
/// reached zero and the burst should be dropped
#[inline]
pub fn age_burst(radius: &mut f32, opacity: &mut f32, growth: f32, fade: f32) -> bool {
    *radius += growth;
    *opacity -= fade;
    *opacity > 0.0
}
