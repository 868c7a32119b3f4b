//! Classifier module - exercise recognition adapter
//!
//! Note: the sequence model runs in JavaScript. Rust keeps the rolling
//! keypoint window and interprets the probabilities that come back.

mod buffer;
mod features;
mod model;

pub use buffer::{SequenceBuffer, SEQUENCE_LENGTH};
pub use features::{extract_keypoints, FEATURE_COUNT};
pub use model::{Prediction, EXERCISE_LABELS};
