// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Frame loop runner
//!
//! Runs the per-frame decay/easing step in a dedicated thread, independent
//! of any stimulus timing. The loop owns nothing but a handle to the shared
//! network state; stimuli land between frames and the next step simply
//! observes the mutated state.

use crate::network::NetworkState;
use crate::viz::{project_frame, FrameSnapshot};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Receiver for projected frames. Any component that can paint a frame
/// implements this; the loop itself never renders.
pub trait FrameSink: Send + Sync {
    fn publish_frame(&self, frame: &FrameSnapshot);
}

/// Frame loop runner - manages the continuous visual decay/easing loop.
pub struct FrameLoopRunner {
    /// Shared network state stepped each frame
    state: Arc<RwLock<NetworkState>>,
    /// Target frequency in Hz
    frequency_hz: f64,
    /// Running flag (atomic for thread-safe stop)
    running: Arc<AtomicBool>,
    /// Thread handle (for graceful shutdown)
    thread_handle: Option<JoinHandle<()>>,
    /// Optional frame receiver; `None` steps the state without projecting
    sink: Option<Arc<dyn FrameSink>>,
}

impl FrameLoopRunner {
    pub fn new(state: Arc<RwLock<NetworkState>>, frequency_hz: f64) -> Self {
        Self {
            state,
            frequency_hz,
            running: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
            sink: None,
        }
    }

    /// Attach a frame receiver before starting.
    pub fn with_sink(mut self, sink: Arc<dyn FrameSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start the frame thread. Starting an already-running loop is a no-op.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            warn!("frame loop already running");
            return;
        }

        let state = Arc::clone(&self.state);
        let running = Arc::clone(&self.running);
        let sink = self.sink.clone();
        let period = Duration::from_secs_f64(1.0 / self.frequency_hz.max(1.0));

        info!(frequency_hz = self.frequency_hz, "starting frame loop");
        self.thread_handle = Some(thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                let frame_started = Instant::now();

                let snapshot = {
                    let mut network = state.write();
                    network.frame_step();
                    sink.as_ref().map(|_| project_frame(&network))
                };
                if let (Some(sink), Some(frame)) = (&sink, &snapshot) {
                    sink.publish_frame(frame);
                }

                // Sleep out the remainder of the frame budget; a slow frame
                // just starts the next one immediately.
                let elapsed = frame_started.elapsed();
                if elapsed < period {
                    thread::sleep(period - elapsed);
                }
            }
        }));
    }

    /// Stop the frame thread and wait for it to exit.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
            info!("frame loop stopped");
        }
    }
}

impl Drop for FrameLoopRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
