//! Bit reservoir: main data bytes carried between frames.

use std::collections::VecDeque;

/// Largest `main_data_begin` a side information block can encode.
pub const MAX_MAIN_DATA_BEGIN: usize = 511;

/// How the parser maps a frame to its main data span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReservoirMode {
    /// Frames consume their own main data length from a FIFO of every
    /// frame's payload, in order. `main_data_begin` is only reported.
    #[default]
    Sequential,
    /// Main data starts `main_data_begin` bytes before the end of the
    /// payload carried by earlier frames, as the bit reservoir is defined.
    Backward,
}

#[derive(Debug, Default)]
pub struct Reservoir {
    buffer: VecDeque<u8>,
}

impl Reservoir {
    pub fn append(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes);
    }

    /// Removes and returns up to `n` bytes from the front.
    pub fn take(&mut self, n: usize) -> Vec<u8> {
        let n = n.min(self.buffer.len());
        self.buffer.drain(..n).collect()
    }

    /// Drops everything but the last `n` bytes.
    pub fn retain_last(&mut self, n: usize) {
        let excess = self.buffer.len().saturating_sub(n);
        self.buffer.drain(..excess);
    }

    /// Copies the whole queue without consuming it.
    pub fn contents(&self) -> Vec<u8> {
        self.buffer.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
