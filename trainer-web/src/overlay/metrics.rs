//! Performance metrics for the debug overlay
//!
//! Tracks FPS, per-stage latencies and the last counted frame.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

/// Performance metrics storage
struct Metrics {
    /// Frame timing
    fps: f32,
    frame_time_ms: f32,

    /// Component latencies
    pose_latency_ms: f32,
    classifier_latency_ms: f32,
    counting_time_ms: f32,

    /// Last classified action and its confidence
    action: &'static str,
    confidence: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time_ms: 0.0,
            pose_latency_ms: 0.0,
            classifier_latency_ms: 0.0,
            counting_time_ms: 0.0,
            action: "none",
            confidence: 0.0,
        }
    }
}

impl Metrics {
    /// Exponential moving average for smooth display
    fn smooth(current: f32, sample: f32) -> f32 {
        current * 0.9 + sample * 0.1
    }

    fn record_frame(&mut self, fps: f32, frame_time_ms: f32) {
        // Tab backgrounded or first frame
        if !(1.0..=200.0).contains(&frame_time_ms) {
            return;
        }
        self.fps = Self::smooth(self.fps, fps);
        self.frame_time_ms = Self::smooth(self.frame_time_ms, frame_time_ms);
    }

    fn text(&self) -> String {
        format!(
            "FPS: {:.0} | Frame: {:.1}ms\n\
             Pose: {:.0}ms | Classifier: {:.0}ms\n\
             Counting: {:.2}ms\n\
             Action: {} ({:.0}%)",
            self.fps, self.frame_time_ms,
            self.pose_latency_ms, self.classifier_latency_ms,
            self.counting_time_ms,
            self.action,
            self.confidence * 100.0,
        )
    }
}

thread_local! {
    static METRICS: RefCell<Metrics> = RefCell::new(Metrics::default());
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Set frame timing (called from JS each frame)
#[wasm_bindgen]
pub fn set_frame_metrics(fps: f32, frame_time_ms: f32) {
    METRICS.with(|m| m.borrow_mut().record_frame(fps, frame_time_ms));
}

/// Set pose estimator latency
#[wasm_bindgen]
pub fn set_pose_latency(ms: f32) {
    METRICS.with(|m| {
        let mut metrics = m.borrow_mut();
        metrics.pose_latency_ms = Metrics::smooth(metrics.pose_latency_ms, ms);
    });
}

/// Set classifier inference latency
#[wasm_bindgen]
pub fn set_classifier_latency(ms: f32) {
    METRICS.with(|m| {
        let mut metrics = m.borrow_mut();
        metrics.classifier_latency_ms = Metrics::smooth(metrics.classifier_latency_ms, ms);
    });
}

/// Get formatted overlay text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_debug_overlay_text() -> String {
    METRICS.with(|m| m.borrow().text())
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Record time spent in the rep counter and the action it ran with
pub fn record_counting_time(ms: f32, action: &'static str, confidence: f32) {
    METRICS.with(|m| {
        let mut metrics = m.borrow_mut();
        metrics.counting_time_ms = Metrics::smooth(metrics.counting_time_ms, ms);
        metrics.action = action;
        metrics.confidence = confidence;
    });
}
