//! Counter banner and joint angle labels

use crate::counter::{AngleReading, FrameReport, RepCounterSet};

/// One angle label, anchored at its joint in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleAnnotation {
    pub x: i32,
    pub y: i32,
    /// Whole degrees, truncated like the on-screen text
    pub degrees: i32,
}

impl AngleAnnotation {
    pub fn from_reading(reading: &AngleReading, width: u32, height: u32) -> Self {
        let (x, y) = reading.pixel_position(width, height);
        Self {
            x,
            y,
            degrees: reading.degrees as i32,
        }
    }
}

/// "curl 3 | press 0 | squat 1"
pub fn counter_banner(counters: &RepCounterSet) -> String {
    counters
        .counts()
        .iter()
        .map(|(exercise, count)| format!("{} {}", exercise, count))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Labels for every angle the active counter used this frame
pub fn angle_annotations(report: &FrameReport, width: u32, height: u32) -> Vec<AngleAnnotation> {
    report
        .angles
        .iter()
        .map(|reading| AngleAnnotation::from_reading(reading, width, height))
        .collect()
}

/// [x, y, degrees, x, y, degrees, ...] for the JS side
pub fn flatten_annotations(annotations: &[AngleAnnotation]) -> Vec<i32> {
    annotations
        .iter()
        .flat_map(|a| [a.x, a.y, a.degrees])
        .collect()
}
