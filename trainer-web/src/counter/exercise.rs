//! Supported exercises and their classifier labels

use std::fmt;
use std::str::FromStr;

use crate::error::TrackingError;

/// Number of classifier outputs
pub const EXERCISE_COUNT: usize = 3;

/// Exercises with a rep counter (order matches classifier training)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Exercise {
    Curl,
    Press,
    Squat,
}

impl Exercise {
    pub const ALL: [Exercise; EXERCISE_COUNT] = [Exercise::Curl, Exercise::Press, Exercise::Squat];

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Exercise::Curl => 0,
            Exercise::Press => 1,
            Exercise::Squat => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::Curl => "curl",
            Exercise::Press => "press",
            Exercise::Squat => "squat",
        }
    }

    /// Parse the current-action label
    ///
    /// Empty or `none` means no active exercise. Unknown labels are an error
    /// so the caller can decide how loudly to ignore them.
    pub fn parse_action(label: &str) -> Result<Option<Self>, TrackingError> {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        label.parse().map(Some)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = TrackingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curl" => Ok(Exercise::Curl),
            "press" => Ok(Exercise::Press),
            "squat" => Ok(Exercise::Squat),
            _ => Err(TrackingError::UnknownExercise(s.to_string())),
        }
    }
}
