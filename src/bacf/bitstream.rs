use alloc::{boxed::Box, vec};

/// A fixed-size binary signal packed into `u32` words.
///
/// The first half of the bits is the analysis window, the second half is
/// lookahead so the window can be correlated against itself at lags up to
/// one full window length. [Bitstream::shift_half] slides the window
/// forward by half the bit count.
pub struct Bitstream {
    bits: Box<[u32]>,
    bit_count: usize,
}

const WORD_BITS: usize = 32;

impl Bitstream {
    /// Creates a bitstream with all bits cleared. `bit_count` must be a
    /// positive multiple of 64 so that both halves are whole words.
    pub fn new(bit_count: usize) -> Self {
        if bit_count == 0 || bit_count % 64 != 0 {
            panic!("Bit count must be a positive multiple of 64")
        }
        Bitstream {
            bits: vec![0; bit_count / WORD_BITS].into_boxed_slice(),
            bit_count,
        }
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Returns the number of bits in the analysis window, i.e half the
    /// total bit count.
    pub fn window_bit_count(&self) -> usize {
        self.bit_count / 2
    }

    pub fn get(&self, index: usize) -> bool {
        let mask = 1u32 << (index % WORD_BITS);
        (self.bits[index / WORD_BITS] & mask) != 0
    }

    pub fn set(&mut self, index: usize, value: bool) {
        let word = &mut self.bits[index / WORD_BITS];
        let mask = 1u32 << (index % WORD_BITS);
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Returns the number of differing bits between the analysis window
    /// and the bitstream shifted left by `lag` bits. A count of zero means
    /// the window repeats itself exactly `lag` samples later.
    ///
    /// `lag` must be less than the window bit count, which guarantees that
    /// the shifted read stays within the second half of the bits.
    pub fn autocorrelate(&self, lag: usize) -> u32 {
        debug_assert!(lag < self.window_bit_count());
        let window_words = self.bits.len() / 2;
        let index = lag / WORD_BITS;
        let shift = lag % WORD_BITS;
        let mut count = 0;
        if shift == 0 {
            for i in 0..window_words {
                count += (self.bits[i] ^ self.bits[index + i]).count_ones();
            }
        } else {
            let shift2 = WORD_BITS - shift;
            for i in 0..window_words {
                let v = (self.bits[index + i] >> shift) | (self.bits[index + i + 1] << shift2);
                count += (self.bits[i] ^ v).count_ones();
            }
        }
        count
    }

    /// Moves the upper half of the bits into the lower half and clears the
    /// upper half.
    pub fn shift_half(&mut self) {
        let half_words = self.bits.len() / 2;
        self.bits.copy_within(half_words.., 0);
        for word in self.bits[half_words..].iter_mut() {
            *word = 0;
        }
    }

    pub fn clear(&mut self) {
        for word in self.bits.iter_mut() {
            *word = 0;
        }
    }
}
