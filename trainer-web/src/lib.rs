//! Trainer Web - exercise recognition and rep counting (WASM)
//!
//! Entry point for the WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! The counting core (`geometry`, `pose`, `counter`) has no JS dependency
//! and can be used as a plain Rust library.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod classifier;
pub mod config;
pub mod counter;
pub mod error;
pub mod geometry;
pub mod pose;
mod bridge;
mod overlay;

pub use config::TrainerConfig;
pub use counter::{Exercise, FrameOutcome, FrameReport, RepCounterSet, Stage};
pub use error::TrackingError;
pub use pose::{BodyLandmark, Joint, Landmark, LandmarkSet, Side};

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    update_landmarks, has_pose, get_frames_received,
    set_classifier_ready, is_buffer_ready, get_classification_buffer,
    set_exercise_prediction, set_current_action, get_current_action,
    get_probabilities, get_exercise_labels,
    count_reps, get_rep_count, get_stage, get_counter_banner, get_angle_annotations,
    set_thresholds, set_classification_threshold, set_visibility_threshold, get_pose_options,
};
pub use overlay::{set_frame_metrics, set_pose_latency, set_classifier_latency, get_debug_overlay_text};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ Rep counter loaded ({} exercises)", Exercise::ALL.len());
}
