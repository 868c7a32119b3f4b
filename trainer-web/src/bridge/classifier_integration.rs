//! Classifier integration - connects the recognizer with landmark data
//!
//! Manages the keypoint window and exports it for JS inference. The host
//! reports the class probabilities back, which become the current action.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::classifier::{Prediction, SequenceBuffer, EXERCISE_LABELS, FEATURE_COUNT};
use crate::counter::Exercise;
use super::settings::current_config;

/// Action the rep counters run with, plus the confidence behind it
#[derive(Clone, Copy, Debug)]
pub struct CurrentAction {
    pub exercise: Option<Exercise>,
    pub confidence: f32,
}

/// Classifier state
#[derive(Default)]
struct ClassifierState {
    /// Rolling keypoint window
    buffer: SequenceBuffer,

    /// Latest probabilities reported by JS
    prediction: Option<Prediction>,

    /// Set once the first prediction (or explicit action) arrives
    action: Option<CurrentAction>,

    /// Whether the ONNX model is loaded (set by JS)
    model_ready: bool,
}

impl ClassifierState {
    /// Store the model output and derive the action from it
    fn record_prediction(&mut self, prediction: Prediction, threshold: f32) {
        self.prediction = Some(prediction);
        self.action = Some(CurrentAction {
            exercise: prediction.action(threshold),
            confidence: prediction.best().1,
        });
    }

    /// Action chosen by the host; older probabilities no longer apply
    fn override_action(&mut self, exercise: Option<Exercise>, confidence: f32) {
        self.prediction = None;
        self.action = Some(CurrentAction { exercise, confidence });
    }

    fn probabilities(&self) -> Vec<f32> {
        self.prediction
            .map(|p| p.probabilities().to_vec())
            .unwrap_or_default()
    }
}

thread_local! {
    static CLASSIFIER_STATE: RefCell<ClassifierState> = RefCell::new(ClassifierState::default());
}

/// Called from JS when the ONNX model is loaded
#[wasm_bindgen]
pub fn set_classifier_ready() {
    CLASSIFIER_STATE.with(|state_cell| {
        state_cell.borrow_mut().model_ready = true;
    });
    web_sys::console::log_1(&"✅ Exercise classifier ready".into());
}

/// Check if the window is full and the model can run
#[wasm_bindgen]
pub fn is_buffer_ready() -> bool {
    CLASSIFIER_STATE.with(|state_cell| {
        let state = state_cell.borrow();
        state.buffer.is_ready() && state.model_ready
    })
}

/// Window for JS to run inference on: 30 × 132 floats, oldest first
/// Returns None if the window isn't full yet
#[wasm_bindgen]
pub fn get_classification_buffer() -> Option<Vec<f32>> {
    CLASSIFIER_STATE.with(|state_cell| {
        let state = state_cell.borrow();
        if state.buffer.is_ready() && state.model_ready {
            Some(state.buffer.as_flat())
        } else {
            None
        }
    })
}

/// Called from JS with the softmax output ([curl, press, squat])
///
/// The best class becomes the current action unless it is below the
/// classification threshold, in which case there is no action.
#[wasm_bindgen]
pub fn set_exercise_prediction(probabilities: &[f32]) -> Result<(), JsValue> {
    let prediction = Prediction::from_slice(probabilities)?;
    let threshold = current_config().min_classification_confidence;

    CLASSIFIER_STATE.with(|state_cell| {
        state_cell.borrow_mut().record_prediction(prediction, threshold);
    });
    Ok(())
}

/// Set the current action directly, for hosts that threshold themselves
///
/// Unknown labels are logged and treated as no action.
#[wasm_bindgen]
pub fn set_current_action(label: &str, confidence: f32) {
    let exercise = Exercise::parse_action(label).unwrap_or_else(|err| {
        web_sys::console::warn_1(&format!("{}; counting paused", err).into());
        None
    });

    CLASSIFIER_STATE.with(|state_cell| {
        state_cell.borrow_mut().override_action(exercise, confidence);
    });
}

/// Current action label ("" when none)
#[wasm_bindgen]
pub fn get_current_action() -> String {
    current_action()
        .and_then(|action| action.exercise)
        .map(|exercise| exercise.as_str().to_string())
        .unwrap_or_default()
}

/// Latest probabilities in label order, empty before the first prediction
#[wasm_bindgen]
pub fn get_probabilities() -> Vec<f32> {
    CLASSIFIER_STATE.with(|state_cell| state_cell.borrow().probabilities())
}

/// Exercise labels in model output order
#[wasm_bindgen]
pub fn get_exercise_labels() -> js_sys::Array {
    EXERCISE_LABELS.iter().map(|label| JsValue::from_str(label)).collect()
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Add this frame's keypoints to the window (called from update_landmarks)
pub fn push_classification_frame(features: [f32; FEATURE_COUNT]) {
    CLASSIFIER_STATE.with(|state_cell| {
        state_cell.borrow_mut().buffer.push(features);
    });
}

/// Action for this frame, None until the first prediction arrives
pub fn current_action() -> Option<CurrentAction> {
    CLASSIFIER_STATE.with(|state_cell| state_cell.borrow().action)
}
