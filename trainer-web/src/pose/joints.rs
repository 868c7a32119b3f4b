//! Static landmark indices (MediaPipe Pose - 33 total)
//!
//! (side, joint) pairs resolve to a landmark through a compile-time match,
//! never through name construction at runtime.

use std::fmt;
use std::str::FromStr;

use crate::error::TrackingError;

/// Number of landmarks produced by the pose estimator per frame
pub const POSE_LANDMARK_COUNT: usize = 33;

/// MediaPipe Pose landmarks, discriminant = index in the estimator output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BodyLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl BodyLandmark {
    /// All landmarks in estimator order
    pub const ALL: [BodyLandmark; POSE_LANDMARK_COUNT] = [
        BodyLandmark::Nose,
        BodyLandmark::LeftEyeInner,
        BodyLandmark::LeftEye,
        BodyLandmark::LeftEyeOuter,
        BodyLandmark::RightEyeInner,
        BodyLandmark::RightEye,
        BodyLandmark::RightEyeOuter,
        BodyLandmark::LeftEar,
        BodyLandmark::RightEar,
        BodyLandmark::MouthLeft,
        BodyLandmark::MouthRight,
        BodyLandmark::LeftShoulder,
        BodyLandmark::RightShoulder,
        BodyLandmark::LeftElbow,
        BodyLandmark::RightElbow,
        BodyLandmark::LeftWrist,
        BodyLandmark::RightWrist,
        BodyLandmark::LeftPinky,
        BodyLandmark::RightPinky,
        BodyLandmark::LeftIndex,
        BodyLandmark::RightIndex,
        BodyLandmark::LeftThumb,
        BodyLandmark::RightThumb,
        BodyLandmark::LeftHip,
        BodyLandmark::RightHip,
        BodyLandmark::LeftKnee,
        BodyLandmark::RightKnee,
        BodyLandmark::LeftAnkle,
        BodyLandmark::RightAnkle,
        BodyLandmark::LeftHeel,
        BodyLandmark::RightHeel,
        BodyLandmark::LeftFootIndex,
        BodyLandmark::RightFootIndex,
    ];

    const NAMES: [&'static str; POSE_LANDMARK_COUNT] = [
        "nose",
        "left_eye_inner",
        "left_eye",
        "left_eye_outer",
        "right_eye_inner",
        "right_eye",
        "right_eye_outer",
        "left_ear",
        "right_ear",
        "mouth_left",
        "mouth_right",
        "left_shoulder",
        "right_shoulder",
        "left_elbow",
        "right_elbow",
        "left_wrist",
        "right_wrist",
        "left_pinky",
        "right_pinky",
        "left_index",
        "right_index",
        "left_thumb",
        "right_thumb",
        "left_hip",
        "right_hip",
        "left_knee",
        "right_knee",
        "left_ankle",
        "right_ankle",
        "left_heel",
        "right_heel",
        "left_foot_index",
        "right_foot_index",
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// snake_case name, e.g. `left_shoulder`
    pub fn name(self) -> &'static str {
        Self::NAMES[self.index()]
    }

    /// Resolve a limb joint on one side of the body
    pub fn limb(side: Side, joint: Joint) -> Self {
        match (side, joint) {
            (Side::Left, Joint::Shoulder) => BodyLandmark::LeftShoulder,
            (Side::Left, Joint::Elbow) => BodyLandmark::LeftElbow,
            (Side::Left, Joint::Wrist) => BodyLandmark::LeftWrist,
            (Side::Left, Joint::Hip) => BodyLandmark::LeftHip,
            (Side::Left, Joint::Knee) => BodyLandmark::LeftKnee,
            (Side::Left, Joint::Ankle) => BodyLandmark::LeftAnkle,
            (Side::Right, Joint::Shoulder) => BodyLandmark::RightShoulder,
            (Side::Right, Joint::Elbow) => BodyLandmark::RightElbow,
            (Side::Right, Joint::Wrist) => BodyLandmark::RightWrist,
            (Side::Right, Joint::Hip) => BodyLandmark::RightHip,
            (Side::Right, Joint::Knee) => BodyLandmark::RightKnee,
            (Side::Right, Joint::Ankle) => BodyLandmark::RightAnkle,
        }
    }
}

impl fmt::Display for BodyLandmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BodyLandmark {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::NAMES
            .iter()
            .position(|name| *name == wanted)
            .and_then(Self::from_index)
            .ok_or_else(|| TrackingError::UnknownLandmark(s.to_string()))
    }
}

/// Body side as seen by the estimator (subject's left/right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl FromStr for Side {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            _ => Err(TrackingError::UnknownLandmark(s.to_string())),
        }
    }
}

/// Limb joints used by the rep counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
}

impl FromStr for Joint {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shoulder" => Ok(Joint::Shoulder),
            "elbow" => Ok(Joint::Elbow),
            "wrist" => Ok(Joint::Wrist),
            "hip" => Ok(Joint::Hip),
            "knee" => Ok(Joint::Knee),
            "ankle" => Ok(Joint::Ankle),
            _ => Err(TrackingError::UnknownLandmark(s.to_string())),
        }
    }
}
