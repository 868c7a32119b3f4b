//! Overhead press counter (left arm)
//!
//! Elbow angle alone cannot tell an arm raised overhead from one bent at the
//! side, so the shoulder-elbow and shoulder-wrist distances are compared too.

use super::reading::{AngleReading, RepUpdate};
use super::stage::{RepState, Stage};
use crate::error::TrackingError;
use crate::geometry::distance;
use crate::pose::{BodyLandmark, LandmarkSet};

/// Elbow angle above which the arm counts as extended overhead
pub const PRESS_EXTENDED_ABOVE: f32 = 130.0;

/// Elbow angle below which the arm counts as racked
pub const PRESS_FLEXED_BELOW: f32 = 50.0;

/// Inputs to the press transition rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressReading {
    pub elbow: AngleReading,
    /// Shoulder to elbow
    pub upper_arm: f32,
    /// Shoulder to wrist
    pub reach: f32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PressCounter {
    state: RepState,
}

impl PressCounter {
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

    pub fn measure(landmarks: &LandmarkSet) -> Result<PressReading, TrackingError> {
        let elbow = AngleReading::measure(
            landmarks,
            BodyLandmark::LeftShoulder,
            BodyLandmark::LeftElbow,
            BodyLandmark::LeftWrist,
        )?;
        let shoulder = landmarks.position(BodyLandmark::LeftShoulder)?;
        let wrist = landmarks.position(BodyLandmark::LeftWrist)?;

        Ok(PressReading {
            elbow,
            upper_arm: distance(shoulder, elbow.position),
            reach: distance(shoulder, wrist),
        })
    }

    /// Apply the transition rule; returns true when a rep was completed
    pub fn apply(&mut self, elbow_angle: f32, upper_arm: f32, reach: f32) -> bool {
        if elbow_angle > PRESS_EXTENDED_ABOVE && upper_arm < reach {
            self.state.enter(Stage::Up);
        }
        if elbow_angle < PRESS_FLEXED_BELOW && upper_arm > reach && self.state.stage() == Stage::Up {
            self.state.complete(Stage::Down);
            return true;
        }
        false
    }

    pub fn update(&mut self, landmarks: &LandmarkSet) -> Result<RepUpdate, TrackingError> {
        let reading = Self::measure(landmarks)?;
        let completed = self.apply(reading.elbow.degrees, reading.upper_arm, reading.reach);
        Ok(RepUpdate {
            angles: vec![reading.elbow],
            completed,
        })
    }
}
