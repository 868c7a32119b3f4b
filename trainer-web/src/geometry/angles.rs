//! Joint angle calculation using the arctangent difference
//!
//! Angle at vertex `b` between rays b→a and b→c, folded into [0, 180].

use std::f32::consts::PI;

/// Normalized 2D image coordinate (x, y)
pub type Point2 = (f32, f32);

/// Ray shorter than this is treated as a coincident point
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Calculate the joint angle at `b` in degrees, or `None` when it is undefined
///
/// Undefined when `b` coincides with `a` or `c`, or any coordinate is not finite.
pub fn try_joint_angle(a: Point2, b: Point2, c: Point2) -> Option<f32> {
    let finite = [a.0, a.1, b.0, b.1, c.0, c.1].iter().all(|v| v.is_finite());
    if !finite || distance(a, b) < DEGENERATE_EPSILON || distance(c, b) < DEGENERATE_EPSILON {
        return None;
    }

    let radians = (c.1 - b.1).atan2(c.0 - b.0) - (a.1 - b.1).atan2(a.0 - b.0);
    let angle = (radians * 180.0 / PI).abs();

    // atan2 difference spans (-360, 360); fold the reflex side back
    if angle > 180.0 {
        Some(360.0 - angle)
    } else {
        Some(angle)
    }
}

/// Calculate the joint angle at `b` in degrees
///
/// Returns:
/// - 0° = fully folded (a and c on the same ray)
/// - 180° = fully straight
/// - 0° as well for a degenerate vertex (see [`try_joint_angle`])
pub fn joint_angle(a: Point2, b: Point2, c: Point2) -> f32 {
    try_joint_angle(a, b, c).unwrap_or(0.0)
}

/// Euclidean distance between two points
pub fn distance(p: Point2, q: Point2) -> f32 {
    let dx = q.0 - p.0;
    let dy = q.1 - p.1;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_arm() {
        let shoulder = (0.0, 0.0);
        let elbow = (0.5, 0.0);
        let wrist = (1.0, 0.0);
        let angle = joint_angle(shoulder, elbow, wrist);
        assert!((angle - 180.0).abs() < 0.01);
    }

    #[test]
    fn test_right_angle() {
        let angle = joint_angle((0.0, 0.0), (0.5, 0.0), (0.5, 0.5));
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_reflex_side_is_folded() {
        // Raw atan2 difference here is 270°
        let a = (1.0, 0.0);
        let b = (0.0, 0.0);
        let c = (0.0, -1.0);
        let angle = joint_angle(a, b, c);
        assert!((angle - 90.0).abs() < 0.01);
    }

    #[test]
    fn test_range_and_symmetry() {
        let b = (0.4, 0.6);
        for i in 0..36 {
            for j in 0..36 {
                let ta = i as f32 * 10.0_f32.to_radians();
                let tc = j as f32 * 10.0_f32.to_radians() + 0.05;
                let a = (b.0 + 0.3 * ta.cos(), b.1 + 0.3 * ta.sin());
                let c = (b.0 + 0.2 * tc.cos(), b.1 + 0.2 * tc.sin());

                let forward = joint_angle(a, b, c);
                let backward = joint_angle(c, b, a);
                assert!((0.0..=180.0).contains(&forward), "angle {} out of range", forward);
                assert!((forward - backward).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_degenerate_vertex() {
        let p = (0.3, 0.3);
        assert_eq!(try_joint_angle(p, p, (0.9, 0.1)), None);
        assert_eq!(try_joint_angle((0.9, 0.1), p, p), None);
        assert_eq!(joint_angle(p, p, (0.9, 0.1)), 0.0);
    }

    #[test]
    fn test_non_finite_input() {
        assert_eq!(try_joint_angle((f32::NAN, 0.0), (0.5, 0.5), (1.0, 1.0)), None);
        assert_eq!(joint_angle((0.0, 0.0), (0.5, 0.5), (f32::INFINITY, 1.0)), 0.0);
    }

    #[test]
    fn test_distance() {
        assert!((distance((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < 1e-6);
        assert_eq!(distance((0.2, 0.2), (0.2, 0.2)), 0.0);
        assert_eq!(distance((1.0, 0.0), (0.0, 0.0)), distance((0.0, 0.0), (1.0, 0.0)));
    }
}
