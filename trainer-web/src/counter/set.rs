//! RepCounterSet - the three counters, driven by the current action
//!
//! The active exercise's counter is updated; every other counter is forced
//! back to idle so at most one stage is ever non-idle.

use super::curl::CurlCounter;
use super::exercise::{Exercise, EXERCISE_COUNT};
use super::press::PressCounter;
use super::reading::{AngleReading, RepUpdate};
use super::squat::SquatCounter;
use super::stage::Stage;
use crate::error::TrackingError;
use crate::pose::LandmarkSet;

/// What happened to the active counter this frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// No active exercise; all stages reset
    Idle,
    /// Active exercise could not be measured; its state is unchanged
    Skipped(TrackingError),
    /// Transition rule applied
    Evaluated { completed: bool },
}

/// Per-frame result for the overlay
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub exercise: Option<Exercise>,
    pub stage: Stage,
    /// Count of `exercise`; always 0 when `exercise` is None
    pub count: u32,
    pub angles: Vec<AngleReading>,
    pub outcome: FrameOutcome,
}

impl FrameReport {
    pub fn rep_completed(&self) -> bool {
        matches!(self.outcome, FrameOutcome::Evaluated { completed: true })
    }
}

/// Independent counters for every supported exercise
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepCounterSet {
    curl: CurlCounter,
    press: PressCounter,
    squat: SquatCounter,
}

impl RepCounterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn curl(&self) -> &CurlCounter {
        &self.curl
    }

    pub fn press(&self) -> &PressCounter {
        &self.press
    }

    pub fn squat(&self) -> &SquatCounter {
        &self.squat
    }

    pub fn count(&self, exercise: Exercise) -> u32 {
        match exercise {
            Exercise::Curl => self.curl.count(),
            Exercise::Press => self.press.count(),
            Exercise::Squat => self.squat.count(),
        }
    }

    pub fn stage(&self, exercise: Exercise) -> Stage {
        match exercise {
            Exercise::Curl => self.curl.stage(),
            Exercise::Press => self.press.stage(),
            Exercise::Squat => self.squat.stage(),
        }
    }

    /// Counts in classifier order
    pub fn counts(&self) -> [(Exercise, u32); EXERCISE_COUNT] {
        Exercise::ALL.map(|exercise| (exercise, self.count(exercise)))
    }

    /// Exercise whose stage is not idle, if any
    pub fn active(&self) -> Option<Exercise> {
        Exercise::ALL
            .into_iter()
            .find(|&exercise| self.stage(exercise) != Stage::Idle)
    }

    /// Process one frame
    ///
    /// Missing landmarks and degenerate joints skip the frame for the active
    /// counter; any other error is returned.
    pub fn update(
        &mut self,
        landmarks: &LandmarkSet,
        action: Option<Exercise>,
    ) -> Result<FrameReport, TrackingError> {
        for exercise in Exercise::ALL {
            if Some(exercise) != action {
                self.reset_stage(exercise);
            }
        }

        let Some(exercise) = action else {
            return Ok(FrameReport {
                exercise: None,
                stage: Stage::Idle,
                count: 0,
                angles: Vec::new(),
                outcome: FrameOutcome::Idle,
            });
        };

        let result = match exercise {
            Exercise::Curl => self.curl.update(landmarks),
            Exercise::Press => self.press.update(landmarks),
            Exercise::Squat => self.squat.update(landmarks),
        };

        let (angles, outcome) = match result {
            Ok(RepUpdate { angles, completed }) => (angles, FrameOutcome::Evaluated { completed }),
            Err(err) if err.is_transient() => (Vec::new(), FrameOutcome::Skipped(err)),
            Err(err) => return Err(err),
        };

        Ok(FrameReport {
            exercise: Some(exercise),
            stage: self.stage(exercise),
            count: self.count(exercise),
            angles,
            outcome,
        })
    }

    /// Process one frame given the classifier label
    ///
    /// Unknown labels are treated as no active exercise.
    pub fn update_label(
        &mut self,
        landmarks: &LandmarkSet,
        label: &str,
    ) -> Result<FrameReport, TrackingError> {
        let action = match Exercise::parse_action(label) {
            Ok(action) => action,
            Err(TrackingError::UnknownExercise(_)) => None,
            Err(err) => return Err(err),
        };
        self.update(landmarks, action)
    }

    fn reset_stage(&mut self, exercise: Exercise) {
        match exercise {
            Exercise::Curl => self.curl.reset_stage(),
            Exercise::Press => self.press.reset_stage(),
            Exercise::Squat => self.squat.reset_stage(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::test_poses::{curl_arm, full_body, legs, press_arm};
    use crate::pose::BodyLandmark;

    #[test]
    fn test_curl_sequence_through_set() {
        let mut set = RepCounterSet::new();
        let mut completed_at = Vec::new();

        for (frame, angle) in [10.0, 10.0, 150.0, 150.0].into_iter().enumerate() {
            let report = set.update(&curl_arm(angle), Some(Exercise::Curl)).unwrap();
            if report.rep_completed() {
                completed_at.push(frame);
            }
        }

        assert_eq!(completed_at, vec![2]);
        assert_eq!(set.count(Exercise::Curl), 1);
        assert_eq!(set.stage(Exercise::Curl), Stage::Down);
    }

    #[test]
    fn test_other_action_resets_curl_stage_only() {
        let mut set = RepCounterSet::new();
        set.update(&curl_arm(10.0), Some(Exercise::Curl)).unwrap();
        set.update(&curl_arm(150.0), Some(Exercise::Curl)).unwrap();
        set.update(&curl_arm(10.0), Some(Exercise::Curl)).unwrap();
        assert_eq!(set.stage(Exercise::Curl), Stage::Up);

        set.update(&curl_arm(10.0), Some(Exercise::Press)).unwrap();
        assert_eq!(set.stage(Exercise::Curl), Stage::Idle);
        assert_eq!(set.count(Exercise::Curl), 1);
    }

    #[test]
    fn test_no_action_resets_everything() {
        let mut set = RepCounterSet::new();
        set.update(&legs(90.0, 90.0), Some(Exercise::Squat)).unwrap();
        assert_eq!(set.active(), Some(Exercise::Squat));

        let report = set.update(&legs(90.0, 90.0), None).unwrap();
        assert_eq!(report.outcome, FrameOutcome::Idle);
        assert_eq!(report.exercise, None);
        assert!(report.angles.is_empty());
        assert_eq!(set.active(), None);
    }

    #[test]
    fn test_reset_interrupts_cycle() {
        let mut set = RepCounterSet::new();
        set.update(&curl_arm(10.0), Some(Exercise::Curl)).unwrap();
        set.update(&curl_arm(10.0), None).unwrap();
        // Stage was reset, so extending now is not a completed rep
        let report = set.update(&curl_arm(150.0), Some(Exercise::Curl)).unwrap();
        assert!(!report.rep_completed());
        assert_eq!(set.count(Exercise::Curl), 0);
    }

    #[test]
    fn test_missing_landmark_is_skipped() {
        let mut set = RepCounterSet::new();
        set.update(&curl_arm(10.0), Some(Exercise::Curl)).unwrap();
        let before = set.clone();

        let mut frame = curl_arm(150.0);
        frame.remove(BodyLandmark::LeftElbow);
        let report = set.update(&frame, Some(Exercise::Curl)).unwrap();

        assert_eq!(
            report.outcome,
            FrameOutcome::Skipped(TrackingError::MissingLandmark(BodyLandmark::LeftElbow))
        );
        assert_eq!(set, before);
    }

    fn collapsed_wrist() -> LandmarkSet {
        let mut frame = curl_arm(150.0);
        let elbow = frame.get(BodyLandmark::LeftElbow).unwrap();
        frame.insert(BodyLandmark::LeftWrist, elbow);
        frame
    }

    #[test]
    fn test_coincident_wrist_is_skipped_from_idle() {
        let mut set = RepCounterSet::new();
        let report = set.update(&collapsed_wrist(), Some(Exercise::Curl)).unwrap();

        assert_eq!(
            report.outcome,
            FrameOutcome::Skipped(TrackingError::DegenerateGeometry(BodyLandmark::LeftElbow))
        );
        assert!(report.angles.is_empty());
        // A 0° reading would have moved the curl to Up
        assert_eq!(set.stage(Exercise::Curl), Stage::Idle);
        assert_eq!(set.count(Exercise::Curl), 0);
    }

    #[test]
    fn test_coincident_wrist_is_skipped_from_up() {
        let mut set = RepCounterSet::new();
        set.update(&curl_arm(10.0), Some(Exercise::Curl)).unwrap();
        let before = set.clone();

        let report = set.update(&collapsed_wrist(), Some(Exercise::Curl)).unwrap();

        assert_eq!(
            report.outcome,
            FrameOutcome::Skipped(TrackingError::DegenerateGeometry(BodyLandmark::LeftElbow))
        );
        assert_eq!(report.stage, Stage::Up);
        assert_eq!(report.count, 0);
        assert_eq!(set, before);
    }

    #[test]
    fn test_empty_frame_never_counts() {
        let mut set = RepCounterSet::new();
        set.update(&curl_arm(10.0), Some(Exercise::Curl)).unwrap();

        for _ in 0..1000 {
            let report = set.update(&LandmarkSet::empty(), Some(Exercise::Curl)).unwrap();
            assert!(matches!(report.outcome, FrameOutcome::Skipped(_)));
        }
        assert_eq!(set.stage(Exercise::Curl), Stage::Up);
        assert_eq!(set.count(Exercise::Curl), 0);
    }

    #[test]
    fn test_at_most_one_active_stage() {
        let mut set = RepCounterSet::new();
        let frames = [
            (full_body(10.0, 90.0, 90.0), Some(Exercise::Curl)),
            (full_body(10.0, 90.0, 90.0), Some(Exercise::Squat)),
            (full_body(170.0, 90.0, 90.0), Some(Exercise::Press)),
            (full_body(10.0, 175.0, 175.0), Some(Exercise::Curl)),
            (full_body(10.0, 90.0, 90.0), None),
        ];

        for (frame, action) in frames.iter() {
            set.update(frame, *action).unwrap();
            let non_idle = Exercise::ALL
                .iter()
                .filter(|&&e| set.stage(e) != Stage::Idle)
                .count();
            assert!(non_idle <= 1);
            if let Some(active) = set.active() {
                assert_eq!(Some(active), *action);
            }
        }
    }

    #[test]
    fn test_press_through_set() {
        let mut set = RepCounterSet::new();
        set.update(&press_arm(175.0), Some(Exercise::Press)).unwrap();
        let report = set.update(&press_arm(30.0), Some(Exercise::Press)).unwrap();

        assert!(report.rep_completed());
        assert_eq!(report.count, 1);
        assert_eq!(report.stage, Stage::Down);
        assert_eq!(set.counts(), [(Exercise::Curl, 0), (Exercise::Press, 1), (Exercise::Squat, 0)]);
    }

    #[test]
    fn test_update_label() {
        let mut set = RepCounterSet::new();
        let report = set.update_label(&legs(90.0, 90.0), "squat").unwrap();
        assert_eq!(report.exercise, Some(Exercise::Squat));
        assert_eq!(report.stage, Stage::Down);

        let report = set.update_label(&legs(90.0, 90.0), "deadlift").unwrap();
        assert_eq!(report.outcome, FrameOutcome::Idle);
        assert_eq!(set.stage(Exercise::Squat), Stage::Idle);
    }
}
