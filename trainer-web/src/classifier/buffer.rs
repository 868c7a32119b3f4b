//! Rolling window of the last 30 keypoint frames
//!
//! The recognizer consumes a [30 × 132] sequence, oldest frame first.

use super::features::FEATURE_COUNT;

/// Number of frames in the classification window
pub const SEQUENCE_LENGTH: usize = 30;

/// Circular buffer that keeps the last `SEQUENCE_LENGTH` frames
pub struct SequenceBuffer {
    /// Circular buffer data: [frame][feature]
    data: Box<[[f32; FEATURE_COUNT]; SEQUENCE_LENGTH]>,

    /// Next slot to write
    write_index: usize,

    /// Whether the window has been filled at least once
    filled: bool,
}

impl SequenceBuffer {
    pub fn new() -> Self {
        Self {
            data: Box::new([[0.0; FEATURE_COUNT]; SEQUENCE_LENGTH]),
            write_index: 0,
            filled: false,
        }
    }

    pub fn push(&mut self, features: [f32; FEATURE_COUNT]) {
        self.data[self.write_index] = features;
        self.write_index = (self.write_index + 1) % SEQUENCE_LENGTH;

        if self.write_index == 0 {
            self.filled = true;
        }
    }

    /// Full window available for inference
    pub fn is_ready(&self) -> bool {
        self.filled
    }

    pub fn frame_count(&self) -> usize {
        if self.filled {
            SEQUENCE_LENGTH
        } else {
            self.write_index
        }
    }

    /// Window in chronological order, flattened to 30 × 132 floats
    pub fn as_flat(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(SEQUENCE_LENGTH * FEATURE_COUNT);

        // Oldest frame sits at write_index once the buffer has wrapped
        let start = if self.filled { self.write_index } else { 0 };
        for i in 0..self.frame_count() {
            let idx = (start + i) % SEQUENCE_LENGTH;
            result.extend_from_slice(&self.data[idx]);
        }

        result
    }
}

impl Default for SequenceBuffer {
    fn default() -> Self {
        Self::new()
    }
}
