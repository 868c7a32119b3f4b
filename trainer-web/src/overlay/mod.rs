//! Overlay module - data the host needs to draw counters and angles
//!
//! Re-exports only. All logic in submodules.

mod annotations;
mod metrics;

pub use annotations::{counter_banner, angle_annotations, flatten_annotations};
pub use metrics::{
    record_counting_time,
    set_frame_metrics,
    set_pose_latency,
    set_classifier_latency,
    get_debug_overlay_text,
};
