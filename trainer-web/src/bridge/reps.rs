//! Rep counting bridge - runs the counters once per frame
//!
//! Counts and stages live for the whole page session; there is no reset.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::config::{OVERLAY_HEIGHT, OVERLAY_WIDTH};
use crate::counter::{Exercise, FrameReport, RepCounterSet};
use crate::error::TrackingError;
use crate::overlay::{angle_annotations, counter_banner, flatten_annotations, record_counting_time};
use super::classifier_integration::current_action;
use super::landmarks::current_landmarks;

struct RepStore {
    counters: RepCounterSet,
    last_report: Option<FrameReport>,
}

thread_local! {
    static REPS: RefCell<RepStore> = RefCell::new(RepStore {
        counters: RepCounterSet::new(),
        last_report: None,
    });
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Update the counters with the current landmarks and action
///
/// Call after update_landmarks and the frame's classification. Does
/// nothing until the first prediction arrives. Returns true when this
/// frame completed a rep.
#[wasm_bindgen]
pub fn count_reps() -> Result<bool, JsValue> {
    let Some(action) = current_action() else {
        return Ok(false);
    };

    let started = js_sys::Date::now();
    let landmarks = current_landmarks();

    let report = REPS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();
        let report = store.counters.update(&landmarks, action.exercise)?;
        store.last_report = Some(report.clone());
        Ok::<_, TrackingError>(report)
    })?;

    if let (true, Some(exercise)) = (report.rep_completed(), report.exercise) {
        console_log!("🏋️ {} rep {}", exercise, report.count);
    }

    record_counting_time(
        (js_sys::Date::now() - started) as f32,
        report.exercise.map(|e| e.as_str()).unwrap_or("none"),
        action.confidence,
    );

    Ok(report.rep_completed())
}

/// Rep count for an exercise label
#[wasm_bindgen]
pub fn get_rep_count(label: &str) -> Result<u32, JsValue> {
    let exercise: Exercise = label.parse()?;
    Ok(REPS.with(|store_cell| store_cell.borrow().counters.count(exercise)))
}

/// Stage ("idle", "up", "down") for an exercise label
#[wasm_bindgen]
pub fn get_stage(label: &str) -> Result<String, JsValue> {
    let exercise: Exercise = label.parse()?;
    Ok(REPS.with(|store_cell| store_cell.borrow().counters.stage(exercise).as_str().to_string()))
}

/// "curl N | press N | squat N"
#[wasm_bindgen]
pub fn get_counter_banner() -> String {
    REPS.with(|store_cell| counter_banner(&store_cell.borrow().counters))
}

/// Angle labels from the last counted frame as [x, y, degrees, ...]
///
/// Pass 0 for width/height to use the default 640 × 480 frame.
#[wasm_bindgen]
pub fn get_angle_annotations(width: u32, height: u32) -> Vec<i32> {
    let width = if width == 0 { OVERLAY_WIDTH } else { width };
    let height = if height == 0 { OVERLAY_HEIGHT } else { height };

    REPS.with(|store_cell| {
        store_cell
            .borrow()
            .last_report
            .as_ref()
            .map(|report| flatten_annotations(&angle_annotations(report, width, height)))
            .unwrap_or_default()
    })
}
