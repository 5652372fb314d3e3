// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Headless demo of the full thinking-animation pipeline.
//!
//! Plays the host role: builds an engine, runs the frame loop, seeds a
//! prompt, then feeds a canned stream of text fragments the way a streaming
//! text collaborator would deliver them. Stats land in a shared display
//! model and the final state is dumped as JSON.
//!
//! Run with: `cargo run --example thinking_demo`

use neuroscope_engine::{
    ActivationEngine, EngineConfig, FrameLoopRunner, FrameSink, FrameSnapshot, StatsPublisher,
};
use neuroscope_neural::{NetworkStats, StatsUpdate};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::info;

const PROMPT: &str = "How do neural networks work?";

/// Canned stand-in for the external streaming text collaborator.
const STREAMED_FRAGMENTS: &[&str] = &[
    "Neural networks ",
    "are layered functions ",
    "that transform inputs ",
    "through weighted connections ",
    "into predictions.",
];

struct StatsModel {
    stats: Mutex<NetworkStats>,
}

impl StatsPublisher for StatsModel {
    fn publish_stats(&self, update: StatsUpdate) {
        let mut stats = self.stats.lock();
        stats.apply(&update);
        info!(
            activations = stats.activations,
            process_time_ms = stats.process_time_ms,
            "stats updated"
        );
    }
}

struct LoggingSink;

impl FrameSink for LoggingSink {
    fn publish_frame(&self, frame: &FrameSnapshot) {
        if !frame.rings.is_empty() {
            tracing::debug!(
                lines = frame.lines.len(),
                glows = frame.glows.len(),
                rings = frame.rings.len(),
                "frame"
            );
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = EngineConfig::default();
    let model = Arc::new(StatsModel {
        stats: Mutex::new(NetworkStats::for_topology(&config.network.layers)),
    });

    let engine = ActivationEngine::new(
        config,
        (800.0, 600.0),
        Arc::clone(&model) as Arc<dyn StatsPublisher>,
    );

    let mut frame_loop = FrameLoopRunner::new(engine.state_handle(), 60.0)
        .with_sink(Arc::new(LoggingSink));
    frame_loop.start();

    info!(prompt = PROMPT, "seeding thinking animation");
    model.stats.lock().reset_stimulus();
    engine.seed_from_input(PROMPT);

    // Fragments arrive at stream pace while the seeded relay is running.
    for fragment in STREAMED_FRAGMENTS {
        thread::sleep(Duration::from_millis(120));
        engine.inject_from_chunk(fragment);
    }

    // Let the relay finish and the visuals settle.
    thread::sleep(Duration::from_millis(1200));
    frame_loop.stop();

    let stats = model.stats.lock().clone();
    println!(
        "{}",
        serde_json::to_string_pretty(&stats).expect("stats serialize")
    );
}
