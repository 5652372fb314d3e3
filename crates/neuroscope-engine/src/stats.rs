// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Stats publishing abstraction
//!
//! The engine reports activation counts and propagation timing as
//! fire-and-forget partial updates. The trait keeps the engine free of any
//! dependency on the host's display model.

use neuroscope_neural::StatsUpdate;

/// Receiver for partial stats updates. No return value; the engine never
/// waits on a publisher.
pub trait StatsPublisher: Send + Sync {
    fn publish_stats(&self, update: StatsUpdate);
}

/// Publisher that discards every update, for headless or benchmark use.
pub struct NullStatsPublisher;

impl StatsPublisher for NullStatsPublisher {
    fn publish_stats(&self, _update: StatsUpdate) {}
}
