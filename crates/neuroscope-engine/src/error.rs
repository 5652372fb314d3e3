// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Engine error types
//!
//! Degenerate runtime inputs (empty layer sequence, collapsed viewport,
//! empty topology) are deliberately NOT errors; those paths no-op so a
//! stimulus or frame step can never fault the animation. Errors cover
//! genuine failures only.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read configuration file: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
