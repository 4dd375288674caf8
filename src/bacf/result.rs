use crate::bacf::bitstream::Bitstream;
use alloc::{boxed::Box, vec};

/// Correlation counts for one completed analysis window.
///
/// `counts[lag]` is the number of window bits that agree with the bits
/// `lag` samples later, so counts lie in `[0, window_size]` and larger
/// means more periodic. Entries below the minimum lag are always zero.
/// The snapshot is recomputed in place for every completed window and is
/// read-only for callers.
pub struct Correlation {
    counts: Box<[u32]>,
    max_count: u32,
    max_lag: usize,
    min_lag: usize,
    window_size: usize,
}

impl Correlation {
    pub(crate) fn new(window_size: usize, min_lag: usize) -> Self {
        if min_lag == 0 || min_lag >= window_size {
            panic!("Minimum lag must be in [1, window_size)")
        }
        Correlation {
            counts: vec![0; window_size].into_boxed_slice(),
            max_count: 0,
            max_lag: 0,
            min_lag,
            window_size,
        }
    }

    /// Sweeps all candidate lags in `[min_lag, window_size)` and records
    /// the similarity count for each, along with the maximum count and
    /// its lag. Ties go to the smallest lag.
    pub(crate) fn compute(&mut self, bitstream: &Bitstream) {
        debug_assert_eq!(bitstream.window_bit_count(), self.window_size);
        let window_bits = self.window_size as u32;
        self.max_count = 0;
        self.max_lag = 0;
        for lag in self.min_lag..self.window_size {
            let similarity = window_bits - bitstream.autocorrelate(lag);
            self.counts[lag] = similarity;
            if similarity > self.max_count {
                self.max_count = similarity;
                self.max_lag = lag;
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        for count in self.counts.iter_mut() {
            *count = 0;
        }
        self.max_count = 0;
        self.max_lag = 0;
    }

    /// Similarity counts indexed by lag. Zero for lags below the minimum.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn max_count(&self) -> u32 {
        self.max_count
    }

    /// The lag of the maximum count, or 0 before the first completed
    /// window.
    pub fn max_lag(&self) -> usize {
        self.max_lag
    }

    pub fn min_lag(&self) -> usize {
        self.min_lag
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The maximum count normalized by the window size, in `[0, 1]`.
    pub fn periodicity(&self) -> f32 {
        self.max_count as f32 / self.window_size as f32
    }
}
