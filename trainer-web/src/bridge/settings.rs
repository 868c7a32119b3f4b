//! Threshold settings coming from the host UI sliders

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::config::TrainerConfig;

thread_local! {
    static CONFIG: RefCell<TrainerConfig> = RefCell::new(TrainerConfig::default());
}

/// Set detection, tracking and classification confidence (all 0-1)
#[wasm_bindgen]
pub fn set_thresholds(detection: f32, tracking: f32, classification: f32) -> Result<(), JsValue> {
    CONFIG.with(|c| c.borrow_mut().set_thresholds(detection, tracking, classification))?;
    Ok(())
}

/// Minimum classification confidence alone (0-1)
#[wasm_bindgen]
pub fn set_classification_threshold(value: f32) -> Result<(), JsValue> {
    CONFIG.with(|c| c.borrow_mut().set_classification_threshold(value))?;
    Ok(())
}

/// Landmarks below this visibility are treated as missing (0 disables)
#[wasm_bindgen]
pub fn set_visibility_threshold(value: f32) -> Result<(), JsValue> {
    CONFIG.with(|c| c.borrow_mut().set_visibility_threshold(value))?;
    Ok(())
}

/// [min_detection_confidence, min_tracking_confidence] for the pose estimator
#[wasm_bindgen]
pub fn get_pose_options() -> Vec<f32> {
    CONFIG.with(|c| {
        let config = c.borrow();
        vec![config.min_detection_confidence, config.min_tracking_confidence]
    })
}

/// Current settings snapshot
pub fn current_config() -> TrainerConfig {
    CONFIG.with(|c| *c.borrow())
}
