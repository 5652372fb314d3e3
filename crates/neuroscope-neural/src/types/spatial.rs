// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Render-surface geometry

use serde::{Deserialize, Serialize};

/// Dimensions of the rendering surface, in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface can only be laid out when both dimensions are positive.
    /// Zero or negative dimensions (collapsed panel, detached surface) make
    /// initialization and drawing silent no-ops.
    pub fn is_renderable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl From<(f32, f32)> for Viewport {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderable_requires_positive_dimensions() {
        assert!(Viewport::new(800.0, 600.0).is_renderable());
        assert!(!Viewport::new(0.0, 600.0).is_renderable());
        assert!(!Viewport::new(800.0, 0.0).is_renderable());
        assert!(!Viewport::new(-1.0, 600.0).is_renderable());
    }
}
