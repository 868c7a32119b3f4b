//! Counter module - per-exercise rep state machines
//!
//! Re-exports only. All logic in submodules.

mod exercise;
mod stage;
mod reading;
mod curl;
mod press;
mod squat;
mod set;

pub use exercise::{Exercise, EXERCISE_COUNT};
pub use stage::{RepState, Stage};
pub use reading::{AngleReading, RepUpdate};
pub use curl::{CurlCounter, CURL_FLEXED_BELOW, CURL_EXTENDED_ABOVE};
pub use press::{PressCounter, PressReading, PRESS_EXTENDED_ABOVE, PRESS_FLEXED_BELOW};
pub use squat::{SquatCounter, SquatReading, SQUAT_THRESHOLD};
pub use set::{FrameOutcome, FrameReport, RepCounterSet};

#[cfg(test)]
mod test_poses;
