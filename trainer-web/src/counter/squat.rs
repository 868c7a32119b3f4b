//! Squat counter (both legs)
//!
//! Knee and hip angles on both sides must all agree before the stage moves,
//! so one noisy or half-bent leg cannot produce a rep.

use super::reading::{AngleReading, RepUpdate};
use super::stage::{RepState, Stage};
use crate::error::TrackingError;
use crate::pose::{BodyLandmark, Joint, LandmarkSet, Side};

/// Knee and hip angle threshold (degrees)
pub const SQUAT_THRESHOLD: f32 = 165.0;

/// The four angles the squat rule looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquatReading {
    pub left_knee: AngleReading,
    pub right_knee: AngleReading,
    pub left_hip: AngleReading,
    pub right_hip: AngleReading,
}

impl SquatReading {
    pub fn degrees(&self) -> [f32; 4] {
        [
            self.left_knee.degrees,
            self.right_knee.degrees,
            self.left_hip.degrees,
            self.right_hip.degrees,
        ]
    }

    pub fn angles(&self) -> Vec<AngleReading> {
        vec![self.left_knee, self.left_hip, self.right_knee, self.right_hip]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SquatCounter {
    state: RepState,
}

impl SquatCounter {
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

    pub fn measure(landmarks: &LandmarkSet) -> Result<SquatReading, TrackingError> {
        let knee = |side| {
            AngleReading::measure(
                landmarks,
                BodyLandmark::limb(side, Joint::Hip),
                BodyLandmark::limb(side, Joint::Knee),
                BodyLandmark::limb(side, Joint::Ankle),
            )
        };
        let hip = |side| {
            AngleReading::measure(
                landmarks,
                BodyLandmark::limb(side, Joint::Shoulder),
                BodyLandmark::limb(side, Joint::Hip),
                BodyLandmark::limb(side, Joint::Knee),
            )
        };

        Ok(SquatReading {
            left_knee: knee(Side::Left)?,
            right_knee: knee(Side::Right)?,
            left_hip: hip(Side::Left)?,
            right_hip: hip(Side::Right)?,
        })
    }

    /// Apply the transition rule to [left knee, right knee, left hip, right hip]
    ///
    /// Returns true when a rep was completed.
    pub fn apply(&mut self, angles: [f32; 4]) -> bool {
        if angles.iter().all(|&a| a < SQUAT_THRESHOLD) {
            self.state.enter(Stage::Down);
        }
        if angles.iter().all(|&a| a > SQUAT_THRESHOLD) && self.state.stage() == Stage::Down {
            self.state.complete(Stage::Up);
            return true;
        }
        false
    }

    pub fn update(&mut self, landmarks: &LandmarkSet) -> Result<RepUpdate, TrackingError> {
        let reading = Self::measure(landmarks)?;
        let completed = self.apply(reading.degrees());
        Ok(RepUpdate {
            angles: reading.angles(),
            completed,
        })
    }
}
