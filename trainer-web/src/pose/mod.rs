//! Pose module - per-frame landmark set and symbolic joint lookup
//!
//! Re-exports only. All logic in submodules.

mod joints;
mod landmarks;

pub use joints::{BodyLandmark, Joint, Side, POSE_LANDMARK_COUNT};
pub use landmarks::{Landmark, LandmarkSet, VALUES_PER_LANDMARK, FRAME_VALUE_COUNT};
