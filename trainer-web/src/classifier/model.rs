//! Interpreting the recognizer output
//!
//! NOTE: inference runs in JavaScript with onnxruntime-web. The host hands
//! the softmax output back and this module turns it into a current action.

use crate::counter::{Exercise, EXERCISE_COUNT};
use crate::error::TrackingError;

/// Exercise labels (order matches training)
pub const EXERCISE_LABELS: [&str; EXERCISE_COUNT] = ["curl", "press", "squat"];

/// Class probabilities for one window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    probabilities: [f32; EXERCISE_COUNT],
}

impl Prediction {
    pub fn new(probabilities: [f32; EXERCISE_COUNT]) -> Self {
        Self { probabilities }
    }

    pub fn from_slice(values: &[f32]) -> Result<Self, TrackingError> {
        let probabilities: [f32; EXERCISE_COUNT] =
            values.try_into().map_err(|_| TrackingError::InvalidPrediction {
                expected: EXERCISE_COUNT,
                got: values.len(),
            })?;
        Ok(Self::new(probabilities))
    }

    pub fn probabilities(&self) -> [f32; EXERCISE_COUNT] {
        self.probabilities
    }

    pub fn probability(&self, exercise: Exercise) -> f32 {
        self.probabilities[exercise.index()]
    }

    /// Most likely exercise and its probability (first wins on ties, NaN never wins)
    pub fn best(&self) -> (Exercise, f32) {
        let mut best = (Exercise::Curl, self.probabilities[0]);
        for exercise in Exercise::ALL.into_iter().skip(1) {
            let p = self.probability(exercise);
            if p > best.1 || best.1.is_nan() {
                best = (exercise, p);
            }
        }
        best
    }

    /// Current action, or None when the best class is below `threshold`
    pub fn action(&self, threshold: f32) -> Option<Exercise> {
        let (exercise, confidence) = self.best();
        if confidence >= threshold {
            Some(exercise)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_exercises() {
        for exercise in Exercise::ALL {
            assert_eq!(EXERCISE_LABELS[exercise.index()], exercise.as_str());
        }
    }

    #[test]
    fn test_best_and_action() {
        let prediction = Prediction::new([0.1, 0.7, 0.2]);
        assert_eq!(prediction.best(), (Exercise::Press, 0.7));
        assert_eq!(prediction.action(0.5), Some(Exercise::Press));
        assert_eq!(prediction.action(0.7), Some(Exercise::Press));
        assert_eq!(prediction.action(0.8), None);
    }

    #[test]
    fn test_tie_prefers_first() {
        let prediction = Prediction::new([0.4, 0.4, 0.2]);
        assert_eq!(prediction.best().0, Exercise::Curl);
    }

    #[test]
    fn test_nan_never_wins() {
        let prediction = Prediction::new([f32::NAN, 0.2, 0.6]);
        assert_eq!(prediction.best(), (Exercise::Squat, 0.6));
    }

    #[test]
    fn test_from_slice_length() {
        assert!(Prediction::from_slice(&[0.2, 0.3, 0.5]).is_ok());
        assert_eq!(
            Prediction::from_slice(&[0.5, 0.5]),
            Err(TrackingError::InvalidPrediction { expected: 3, got: 2 })
        );
    }
}
