//! Landmark set for a single frame
//!
//! Built fresh from the estimator output every frame and read-only afterwards.
//! An empty set means no pose was detected; every lookup then fails.

use super::joints::{BodyLandmark, Joint, Side, POSE_LANDMARK_COUNT};
use crate::error::TrackingError;
use crate::geometry::Point2;

/// Values per landmark in the flat frame layout (x, y, z, visibility)
pub const VALUES_PER_LANDMARK: usize = 4;

/// Length of a flat frame with a detected pose
pub const FRAME_VALUE_COUNT: usize = POSE_LANDMARK_COUNT * VALUES_PER_LANDMARK;

/// A single landmark (normalized image coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized
    pub y: f32,          // 0-1 normalized
    pub z: f32,          // Relative depth
    pub visibility: f32, // 0-1 confidence
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }

    /// Fully visible landmark on the image plane
    pub fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, 0.0, 1.0)
    }

    pub fn position(&self) -> Point2 {
        (self.x, self.y)
    }
}

/// Landmarks of the current frame, indexed by [`BodyLandmark`]
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    landmarks: [Option<Landmark>; POSE_LANDMARK_COUNT],
}

impl Default for LandmarkSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl LandmarkSet {
    /// Frame without a detected pose
    pub fn empty() -> Self {
        Self {
            landmarks: [None; POSE_LANDMARK_COUNT],
        }
    }

    /// Parse the flat estimator layout: 33 × (x, y, z, visibility)
    ///
    /// An empty slice is a frame without a pose.
    pub fn from_flat(data: &[f32]) -> Result<Self, TrackingError> {
        if data.is_empty() {
            return Ok(Self::empty());
        }
        if data.len() != FRAME_VALUE_COUNT {
            return Err(TrackingError::InvalidFrameLength {
                expected: FRAME_VALUE_COUNT,
                got: data.len(),
            });
        }

        let mut set = Self::empty();
        for (slot, values) in set
            .landmarks
            .iter_mut()
            .zip(data.chunks_exact(VALUES_PER_LANDMARK))
        {
            *slot = Some(Landmark::new(values[0], values[1], values[2], values[3]));
        }
        Ok(set)
    }

    /// Build from named landmarks, e.g. `("left_elbow", lm)`
    pub fn from_named<'a, I>(named: I) -> Result<Self, TrackingError>
    where
        I: IntoIterator<Item = (&'a str, Landmark)>,
    {
        let mut set = Self::empty();
        for (name, landmark) in named {
            set.insert(name.parse()?, landmark);
        }
        Ok(set)
    }

    pub fn insert(&mut self, id: BodyLandmark, landmark: Landmark) {
        self.landmarks[id.index()] = Some(landmark);
    }

    pub fn remove(&mut self, id: BodyLandmark) -> Option<Landmark> {
        self.landmarks[id.index()].take()
    }

    /// Drop landmarks whose visibility is below `threshold`
    ///
    /// A threshold of 0 keeps everything.
    pub fn with_min_visibility(mut self, threshold: f32) -> Self {
        if threshold > 0.0 {
            for slot in self.landmarks.iter_mut() {
                if matches!(slot, Some(lm) if lm.visibility < threshold) {
                    *slot = None;
                }
            }
        }
        self
    }

    pub fn get(&self, id: BodyLandmark) -> Option<Landmark> {
        self.landmarks[id.index()]
    }

    /// Number of landmarks present
    pub fn len(&self) -> usize {
        self.landmarks.iter().filter(|lm| lm.is_some()).count()
    }

    /// True when no pose was detected this frame
    pub fn is_empty(&self) -> bool {
        self.landmarks.iter().all(|lm| lm.is_none())
    }

    /// (x, y) of a landmark, or `MissingLandmark`
    pub fn position(&self, id: BodyLandmark) -> Result<Point2, TrackingError> {
        self.get(id)
            .map(|lm| lm.position())
            .ok_or(TrackingError::MissingLandmark(id))
    }

    /// (x, y) of a limb joint on one side of the body
    pub fn coordinates(&self, side: Side, joint: Joint) -> Result<Point2, TrackingError> {
        self.position(BodyLandmark::limb(side, joint))
    }

    /// Iterate present landmarks in estimator order
    pub fn iter(&self) -> impl Iterator<Item = (BodyLandmark, Landmark)> + '_ {
        BodyLandmark::ALL
            .iter()
            .zip(self.landmarks.iter())
            .filter_map(|(id, lm)| lm.map(|lm| (*id, lm)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_frame() -> Vec<f32> {
        (0..POSE_LANDMARK_COUNT)
            .flat_map(|i| {
                let v = i as f32 / 100.0;
                [v, v + 0.5, -v, 0.9]
            })
            .collect()
    }

    #[test]
    fn test_from_flat() {
        let set = LandmarkSet::from_flat(&flat_frame()).unwrap();
        assert_eq!(set.len(), POSE_LANDMARK_COUNT);

        let elbow = set.get(BodyLandmark::LeftElbow).unwrap();
        assert!((elbow.x - 0.13).abs() < 1e-6);
        assert!((elbow.y - 0.63).abs() < 1e-6);
        assert!((elbow.z + 0.13).abs() < 1e-6);
        assert!((elbow.visibility - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_empty_frame_has_no_pose() {
        let set = LandmarkSet::from_flat(&[]).unwrap();
        assert!(set.is_empty());
        assert_eq!(
            set.coordinates(Side::Left, Joint::Shoulder),
            Err(TrackingError::MissingLandmark(BodyLandmark::LeftShoulder))
        );
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = LandmarkSet::from_flat(&[0.0; 99]).unwrap_err();
        assert_eq!(err, TrackingError::InvalidFrameLength { expected: 132, got: 99 });
    }

    #[test]
    fn test_coordinates_lookup() {
        let set = LandmarkSet::from_named([
            ("left_shoulder", Landmark::at(0.4, 0.3)),
            ("right_knee", Landmark::at(0.6, 0.8)),
        ])
        .unwrap();

        assert_eq!(set.coordinates(Side::Left, Joint::Shoulder), Ok((0.4, 0.3)));
        assert_eq!(set.coordinates(Side::Right, Joint::Knee), Ok((0.6, 0.8)));
        assert_eq!(
            set.coordinates(Side::Left, Joint::Wrist),
            Err(TrackingError::MissingLandmark(BodyLandmark::LeftWrist))
        );
    }

    #[test]
    fn test_from_named_rejects_unknown() {
        let result = LandmarkSet::from_named([("left_antenna", Landmark::at(0.0, 0.0))]);
        assert_eq!(result, Err(TrackingError::UnknownLandmark("left_antenna".into())));
    }

    #[test]
    fn test_visibility_gate() {
        let mut set = LandmarkSet::empty();
        set.insert(BodyLandmark::LeftElbow, Landmark::new(0.5, 0.5, 0.0, 0.2));
        set.insert(BodyLandmark::LeftWrist, Landmark::new(0.6, 0.6, 0.0, 0.8));

        let kept = set.clone().with_min_visibility(0.0);
        assert_eq!(kept.len(), 2);

        let gated = set.with_min_visibility(0.5);
        assert_eq!(gated.len(), 1);
        assert!(gated.get(BodyLandmark::LeftElbow).is_none());
        assert!(gated.get(BodyLandmark::LeftWrist).is_some());
    }

    #[test]
    fn test_iter_in_estimator_order() {
        let mut set = LandmarkSet::empty();
        set.insert(BodyLandmark::RightHip, Landmark::at(0.1, 0.1));
        set.insert(BodyLandmark::Nose, Landmark::at(0.2, 0.2));

        let ids: Vec<_> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![BodyLandmark::Nose, BodyLandmark::RightHip]);

        assert!(set.remove(BodyLandmark::Nose).is_some());
        assert_eq!(set.len(), 1);
    }
}
