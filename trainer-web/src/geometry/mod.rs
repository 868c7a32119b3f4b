//! Geometry module - joint angles and distances
//!
//! Re-exports only. All logic in submodules.

mod angles;

pub use angles::{joint_angle, try_joint_angle, distance, Point2};
