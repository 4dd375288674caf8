//! Signal levels and dB conversions.

use micromath::F32Ext;

/// Converts a level in dB relative to 1 to a linear gain factor,
/// i.e 0 dB corresponds to a gain of 1.
pub fn db_to_gain(db: f32) -> f32 {
    F32Ext::powf(10.0, db / 20.0)
}

/// Converts a linear gain factor to dB relative to 1.
pub fn gain_to_db(gain: f32) -> f32 {
    20. * F32Ext::log10(gain)
}

/// `[f32]` level measurement extensions.
pub trait LevelExt {
    /// Returns the maximum absolute value.
    fn peak_level(&self) -> f32;
    /// Returns the maximum absolute value in dB relative to 1.
    fn peak_level_db(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level.
    fn rms_level(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level in dB relative to 1.
    fn rms_level_db(&self) -> f32;
}

impl LevelExt for [f32] {
    fn peak_level(&self) -> f32 {
        let mut max: f32 = 0.0;
        for sample in self.iter() {
            let value = F32Ext::abs(*sample);
            if value > max {
                max = value
            }
        }
        max
    }

    fn peak_level_db(&self) -> f32 {
        gain_to_db(self.peak_level())
    }

    fn rms_level(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        };
        let mut sum: f32 = 0.;
        for sample in self.iter() {
            sum += sample * sample
        }
        F32Ext::sqrt(sum / (self.len() as f32))
    }

    fn rms_level_db(&self) -> f32 {
        gain_to_db(self.rms_level())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slice() {
        let window: [f32; 0] = [];
        assert!(window.rms_level() == 0.0);
        assert!(window.peak_level() == 0.0);
    }

    #[test]
    fn test_levels() {
        let window: [f32; 4] = [0.5, -1.0, 0.25, 0.0];
        assert_eq!(window.peak_level(), 1.0);
        // The dB conversions use approximate math, hence the loose tolerances.
        assert!(window.peak_level_db().abs() < 0.05);
        let expected_rms = (1.3125_f32 / 4.0).sqrt();
        assert!((window.rms_level() - expected_rms).abs() < 2e-3);
    }

    #[test]
    fn test_db_conversions() {
        assert!((db_to_gain(0.0) - 1.0).abs() < 1e-3);
        assert!((db_to_gain(-20.0) - 0.1).abs() < 1e-3);
        assert!((gain_to_db(db_to_gain(-30.0)) - -30.0).abs() < 0.1);
    }
}
