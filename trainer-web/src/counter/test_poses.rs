//! Synthetic poses with exact joint angles for counter tests

use crate::geometry::Point2;
use crate::pose::{BodyLandmark, Landmark, LandmarkSet};

/// Point at `length` from `vertex`, rotated `degrees` away from the ray vertex→toward
pub(crate) fn place(vertex: Point2, toward: Point2, degrees: f32, length: f32) -> Point2 {
    let base = (toward.1 - vertex.1).atan2(toward.0 - vertex.0);
    let phi = base + degrees.to_radians();
    (vertex.0 + length * phi.cos(), vertex.1 + length * phi.sin())
}

fn insert(set: &mut LandmarkSet, id: BodyLandmark, p: Point2) {
    set.insert(id, Landmark::at(p.0, p.1));
}

/// Left arm hanging from the shoulder with the given elbow angle
pub(crate) fn curl_arm(elbow_angle: f32) -> LandmarkSet {
    let shoulder = (0.5, 0.3);
    let elbow = (0.5, 0.5);
    let wrist = place(elbow, shoulder, elbow_angle, 0.2);

    let mut set = LandmarkSet::empty();
    insert(&mut set, BodyLandmark::LeftShoulder, shoulder);
    insert(&mut set, BodyLandmark::LeftElbow, elbow);
    insert(&mut set, BodyLandmark::LeftWrist, wrist);
    set
}

/// Left arm with the elbow raised above the shoulder
pub(crate) fn press_arm(elbow_angle: f32) -> LandmarkSet {
    let shoulder = (0.5, 0.5);
    let elbow = (0.5, 0.3);
    let wrist = place(elbow, shoulder, elbow_angle, 0.2);

    let mut set = LandmarkSet::empty();
    insert(&mut set, BodyLandmark::LeftShoulder, shoulder);
    insert(&mut set, BodyLandmark::LeftElbow, elbow);
    insert(&mut set, BodyLandmark::LeftWrist, wrist);
    set
}

/// Both legs with identical knee and hip angles
pub(crate) fn legs(knee_angle: f32, hip_angle: f32) -> LandmarkSet {
    let mut set = LandmarkSet::empty();
    let sides = [
        (0.55, [BodyLandmark::LeftShoulder, BodyLandmark::LeftHip, BodyLandmark::LeftKnee, BodyLandmark::LeftAnkle]),
        (0.45, [BodyLandmark::RightShoulder, BodyLandmark::RightHip, BodyLandmark::RightKnee, BodyLandmark::RightAnkle]),
    ];

    for (x, [shoulder_id, hip_id, knee_id, ankle_id]) in sides {
        let shoulder = (x, 0.2);
        let hip = (x, 0.5);
        let knee = place(hip, shoulder, hip_angle, 0.2);
        let ankle = place(knee, hip, knee_angle, 0.2);

        insert(&mut set, shoulder_id, shoulder);
        insert(&mut set, hip_id, hip);
        insert(&mut set, knee_id, knee);
        insert(&mut set, ankle_id, ankle);
    }
    set
}

/// Legs plus a left arm hanging from the same left shoulder
pub(crate) fn full_body(elbow_angle: f32, knee_angle: f32, hip_angle: f32) -> LandmarkSet {
    let mut set = legs(knee_angle, hip_angle);
    let shoulder = (0.55, 0.2);
    let elbow = (0.55, 0.4);
    let wrist = place(elbow, shoulder, elbow_angle, 0.2);

    insert(&mut set, BodyLandmark::LeftElbow, elbow);
    insert(&mut set, BodyLandmark::LeftWrist, wrist);
    set
}
