//! Bicep curl counter (left arm)
//!
//! Up when the elbow closes below 30°, one rep when it reopens past 140°.

use super::reading::{AngleReading, RepUpdate};
use super::stage::{RepState, Stage};
use crate::error::TrackingError;
use crate::pose::{BodyLandmark, LandmarkSet};

/// Elbow angle below which the arm counts as fully flexed
pub const CURL_FLEXED_BELOW: f32 = 30.0;

/// Elbow angle above which the arm counts as fully extended
pub const CURL_EXTENDED_ABOVE: f32 = 140.0;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurlCounter {
    state: RepState,
}

impl CurlCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    pub fn count(&self) -> u32 {
        self.state.count()
    }

    pub fn reset_stage(&mut self) {
        self.state.reset_stage();
    }

    /// Left elbow angle (shoulder, elbow, wrist)
    pub fn measure(landmarks: &LandmarkSet) -> Result<AngleReading, TrackingError> {
        AngleReading::measure(
            landmarks,
            BodyLandmark::LeftShoulder,
            BodyLandmark::LeftElbow,
            BodyLandmark::LeftWrist,
        )
    }

    /// Apply the transition rule to one elbow angle sample
    ///
    /// Returns true when a rep was completed.
    pub fn apply(&mut self, elbow_angle: f32) -> bool {
        if elbow_angle < CURL_FLEXED_BELOW {
            self.state.enter(Stage::Up);
        }
        if elbow_angle > CURL_EXTENDED_ABOVE && self.state.stage() == Stage::Up {
            self.state.complete(Stage::Down);
            return true;
        }
        false
    }

    /// Measure and apply; a failed measurement leaves the state untouched
    pub fn update(&mut self, landmarks: &LandmarkSet) -> Result<RepUpdate, TrackingError> {
        let elbow = Self::measure(landmarks)?;
        let completed = self.apply(elbow.degrees);
        Ok(RepUpdate {
            angles: vec![elbow],
            completed,
        })
    }
}
