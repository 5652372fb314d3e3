// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for the visualization core
//!
//! Platform-agnostic helpers.

/// Deterministic character-sum hash of a text fragment.
///
/// Sums the Unicode scalar values of the text with wrapping arithmetic. This
/// is deliberately NOT a quality hash: it maps text to activation patterns
/// for visual effect only, and the empty string hashes to 0 so zero-length
/// stream fragments degrade gracefully.
///
/// # Example
/// ```
/// use neuroscope_neural::char_sum_hash;
///
/// assert_eq!(char_sum_hash(""), 0);
/// assert_eq!(char_sum_hash("hello"), 532);
/// assert_eq!(char_sum_hash("hello"), char_sum_hash("hello"));
/// ```
#[inline]
pub fn char_sum_hash(text: &str) -> u32 {
    text.chars().fold(0u32, |acc, c| acc.wrapping_add(c as u32))
}

/// Ratio of `value` to `max`, guarded against zero and non-finite results.
///
/// Gauge-style displays divide a live value by a maximum; an empty layer or
/// an unpopulated maximum must read as zero rather than pushing NaN or
/// infinity into animation state.
///
/// # Returns
/// `value / max` clamped to [0, 1], or 0 when `max` is not positive
#[inline]
pub fn safe_ratio(value: f32, max: f32) -> f32 {
    if max <= 0.0 {
        return 0.0;
    }
    let ratio = value / max;
    if !ratio.is_finite() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_character_sum() {
        // 'h' + 'i' = 104 + 105
        assert_eq!(char_sum_hash("hi"), 209);
    }

    #[test]
    fn test_hash_empty_is_zero() {
        assert_eq!(char_sum_hash(""), 0);
    }

    #[test]
    fn test_hash_wraps_instead_of_overflowing() {
        let long = "\u{10FFFF}".repeat(8192);
        // Just must not panic in debug builds.
        let _ = char_sum_hash(&long);
    }

    #[test]
    fn test_safe_ratio_basic() {
        assert_eq!(safe_ratio(1.0, 4.0), 0.25);
        assert_eq!(safe_ratio(5.0, 4.0), 1.0);
        assert_eq!(safe_ratio(-1.0, 4.0), 0.0);
    }

    #[test]
    fn test_safe_ratio_guards_zero_max() {
        assert_eq!(safe_ratio(3.0, 0.0), 0.0);
        assert_eq!(safe_ratio(3.0, -2.0), 0.0);
    }
}
