use crate::common::db_to_gain;
use micromath::F32Ext;

/// A compressor gain computer. For envelope levels above the threshold the
/// gain is `(threshold / envelope) ^ slope`, which reduces the output level
/// by `slope` times the amount the envelope exceeds the threshold (in dB).
/// Below the threshold the gain is 1. A slope of 1 turns the compressor
/// into a limiter pinning the output at the threshold.
pub struct Compressor {
    /// Linear threshold level.
    threshold: f32,
    slope: f32,
}

impl Compressor {
    pub fn new(threshold_db: f32, slope: f32) -> Self {
        if slope <= 0.0 || slope > 1.0 {
            panic!("Compressor slope must be in (0, 1]")
        }
        Compressor {
            threshold: db_to_gain(threshold_db),
            slope,
        }
    }

    /// Returns the gain to apply for the given envelope level.
    pub fn gain(&self, envelope: f32) -> f32 {
        if envelope <= self.threshold {
            1.0
        } else {
            F32Ext::powf(self.threshold / envelope, self.slope)
        }
    }
}

/// Hard clips a sample to `[-1, 1]`.
pub fn hard_clip(x: f32) -> f32 {
    x.clamp(-1.0, 1.0)
}
