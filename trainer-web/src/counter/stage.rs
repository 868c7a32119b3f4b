//! Stage enum and the (stage, count) pair every counter owns

/// Phase of the current repetition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    /// Exercise not active (or no threshold crossed yet)
    #[default]
    Idle,
    Up,
    Down,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Idle => "idle",
            Stage::Up => "up",
            Stage::Down => "down",
        }
    }
}

/// Stage and rep count of one exercise
///
/// Count never decreases; only the stage is reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepState {
    stage: Stage,
    count: u32,
}

impl RepState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Move to `stage` without counting
    pub fn enter(&mut self, stage: Stage) {
        self.stage = stage;
    }

    /// Move to `stage` and count one rep
    pub fn complete(&mut self, stage: Stage) {
        self.stage = stage;
        self.count = self.count.saturating_add(1);
    }

    /// Back to idle, count untouched
    pub fn reset_stage(&mut self) {
        self.stage = Stage::Idle;
    }
}
