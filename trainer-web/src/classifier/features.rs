//! Keypoint features for exercise recognition
//!
//! 33 landmarks × (x, y, z, visibility), in estimator order. The model was
//! trained on raw coordinates, so nothing is normalized here.

use crate::pose::{LandmarkSet, FRAME_VALUE_COUNT, VALUES_PER_LANDMARK};

/// Number of features per frame
pub const FEATURE_COUNT: usize = FRAME_VALUE_COUNT;

/// Flatten the frame's landmarks; a frame without a pose is all zeros
///
/// Landmarks missing from a partial set also stay zero.
pub fn extract_keypoints(landmarks: &LandmarkSet) -> [f32; FEATURE_COUNT] {
    let mut features = [0.0; FEATURE_COUNT];

    for (id, lm) in landmarks.iter() {
        let offset = id.index() * VALUES_PER_LANDMARK;
        features[offset..offset + VALUES_PER_LANDMARK]
            .copy_from_slice(&[lm.x, lm.y, lm.z, lm.visibility]);
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::{BodyLandmark, Landmark};

    #[test]
    fn test_no_pose_is_zeros() {
        let features = extract_keypoints(&LandmarkSet::empty());
        assert!(features.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_matches_flat_input() {
        let flat: Vec<f32> = (0..FEATURE_COUNT).map(|i| i as f32 * 0.001).collect();
        let set = LandmarkSet::from_flat(&flat).unwrap();
        assert_eq!(extract_keypoints(&set).to_vec(), flat);
    }

    #[test]
    fn test_partial_set_layout() {
        let mut set = LandmarkSet::empty();
        set.insert(BodyLandmark::LeftElbow, Landmark::new(0.1, 0.2, 0.3, 0.4));

        let features = extract_keypoints(&set);
        let offset = BodyLandmark::LeftElbow.index() * 4;
        assert_eq!(&features[offset..offset + 4], &[0.1, 0.2, 0.3, 0.4]);
        assert_eq!(features.iter().filter(|&&v| v != 0.0).count(), 4);
    }
}
