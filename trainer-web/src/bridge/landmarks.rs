//! Landmark storage and JS bridge
//!
//! Receives MediaPipe Pose landmarks from JavaScript and keeps the current
//! frame for the classifier window and the rep counters.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::classifier::{extract_keypoints, FEATURE_COUNT};
use crate::pose::{LandmarkSet, FRAME_VALUE_COUNT};
use super::classifier_integration::push_classification_frame;
use super::settings::current_config;

/// Internal storage for the current frame's landmarks
#[derive(Default)]
struct LandmarkStore {
    landmarks: LandmarkSet,
    frames_received: u64,
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript once per frame with a flat Float32Array of
/// 132 values (33 landmarks × x, y, z, visibility), or an empty array
/// when no pose was detected.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    let raw = match LandmarkSet::from_flat(data) {
        Ok(set) => set,
        Err(err) => {
            web_sys::console::warn_1(
                &format!("{} (expected {} or 0)", err, FRAME_VALUE_COUNT).into(),
            );
            LandmarkSet::empty()
        }
    };

    let (keypoints, landmarks) =
        split_frame(raw, current_config().min_landmark_visibility);
    push_classification_frame(keypoints);

    LANDMARKS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        store.landmarks = landmarks;
        store.frames_received += 1;
    });
}

/// Check if the current frame has a detected pose
#[wasm_bindgen]
pub fn has_pose() -> bool {
    LANDMARKS.with(|store_cell| !store_cell.borrow().landmarks.is_empty())
}

/// Frames received since the module loaded
#[wasm_bindgen]
pub fn get_frames_received() -> f64 {
    LANDMARKS.with(|store_cell| store_cell.borrow().frames_received as f64)
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Keypoints for the classifier window and the landmarks the counters see
///
/// The window always gets the raw frame; the visibility gate only applies
/// to the counters' copy.
fn split_frame(raw: LandmarkSet, min_visibility: f32) -> ([f32; FEATURE_COUNT], LandmarkSet) {
    let keypoints = extract_keypoints(&raw);
    (keypoints, raw.with_min_visibility(min_visibility))
}

/// Current frame's landmarks (empty when no pose)
pub fn current_landmarks() -> LandmarkSet {
    LANDMARKS.with(|store_cell| store_cell.borrow().landmarks.clone())
}
