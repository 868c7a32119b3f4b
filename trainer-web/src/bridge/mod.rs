//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points for the frame loop live here.
//! Re-exports only in mod.rs, logic in submodules.
//!
//! Per frame the host calls, in order:
//! update_landmarks → get_classification_buffer / set_exercise_prediction → count_reps

mod landmarks;
mod classifier_integration;
mod reps;
mod settings;

pub use landmarks::{update_landmarks, has_pose, get_frames_received};

pub use classifier_integration::{
    set_classifier_ready,
    is_buffer_ready,
    get_classification_buffer,
    set_exercise_prediction,
    set_current_action,
    get_current_action,
    get_probabilities,
    get_exercise_labels,
};

pub use reps::{
    count_reps,
    get_rep_count,
    get_stage,
    get_counter_banner,
    get_angle_annotations,
};

pub use settings::{
    set_thresholds,
    set_classification_threshold,
    set_visibility_threshold,
    get_pose_options,
};
