use micromath::F32Ext;

/// A one pole low-pass filter, `y[n] = y[n-1] + a * (x[n] - y[n-1])`
/// with `a = 1 - exp(-2 pi fc / fs)`.
pub struct OnePoleLowPass {
    a: f32,
    y: f32,
}

impl OnePoleLowPass {
    pub fn new(cutoff_hz: f32, sample_rate: f32) -> Self {
        if cutoff_hz <= 0.0 {
            panic!("Cutoff frequency must be greater than 0")
        }
        if sample_rate <= 0.0 {
            panic!("Sample rate must be greater than 0")
        }
        if cutoff_hz >= 0.5 * sample_rate {
            panic!("Cutoff frequency must be below the Nyquist frequency")
        }
        let a = 1.0 - F32Ext::exp(-2.0 * core::f32::consts::PI * cutoff_hz / sample_rate);
        OnePoleLowPass { a, y: 0.0 }
    }

    pub fn update(&mut self, x: f32) -> f32 {
        self.y += self.a * (x - self.y);
        self.y
    }

    /// Returns the most recent output sample.
    pub fn output(&self) -> f32 {
        self.y
    }

    pub fn reset(&mut self) {
        self.y = 0.0;
    }
}

/// A band-pass filter built from two one pole low-pass filters: the input
/// is low-passed at the upper cutoff, then the low-passed signal at the
/// lower cutoff is subtracted from it.
pub struct BandPass {
    upper: OnePoleLowPass,
    lower: OnePoleLowPass,
}

impl BandPass {
    pub fn new(lower_hz: f32, upper_hz: f32, sample_rate: f32) -> Self {
        if lower_hz >= upper_hz {
            panic!("Lower cutoff must be below upper cutoff")
        }
        BandPass {
            upper: OnePoleLowPass::new(upper_hz, sample_rate),
            lower: OnePoleLowPass::new(lower_hz, sample_rate),
        }
    }

    pub fn update(&mut self, x: f32) -> f32 {
        let low_passed = self.upper.update(x);
        low_passed - self.lower.update(low_passed)
    }

    pub fn reset(&mut self) {
        self.upper.reset();
        self.lower.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LevelExt;
    use alloc::vec::Vec;

    fn filtered_peak(filter: &mut OnePoleLowPass, frequency: f32, sample_rate: f32) -> f32 {
        let sample_count = sample_rate as usize;
        let output: Vec<f32> = (0..sample_count)
            .map(|i| {
                let phase = 2.0 * core::f32::consts::PI * frequency * (i as f32) / sample_rate;
                filter.update(phase.sin())
            })
            .collect();
        // Skip the transient at the start.
        output[sample_count / 2..].peak_level()
    }

    #[test]
    fn test_dc_convergence() {
        let mut filter = OnePoleLowPass::new(100.0, 44100.0);
        let mut y = 0.0;
        for _ in 0..44100 {
            y = filter.update(1.0);
        }
        assert!((y - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_high_frequencies_attenuated() {
        let sample_rate = 44100.0;
        let mut filter = OnePoleLowPass::new(100.0, sample_rate);
        let passband_peak = filtered_peak(&mut filter, 10.0, sample_rate);
        filter.reset();
        let stopband_peak = filtered_peak(&mut filter, 4000.0, sample_rate);
        assert!(passband_peak > 0.9);
        assert!(stopband_peak < 0.1);
    }

    #[test]
    fn test_band_pass_attenuates_out_of_band() {
        let sample_rate = 44100.0;
        let mut filter = BandPass::new(50.0, 1000.0, sample_rate);
        let sample_count = sample_rate as usize;

        let mut peak_for = |frequency: f32, filter: &mut BandPass| {
            let output: Vec<f32> = (0..sample_count)
                .map(|i| {
                    let phase = 2.0 * core::f32::consts::PI * frequency * (i as f32) / sample_rate;
                    filter.update(phase.sin())
                })
                .collect();
            output[sample_count / 2..].peak_level()
        };

        let in_band = peak_for(300.0, &mut filter);
        filter.reset();
        let above_band = peak_for(10000.0, &mut filter);
        assert!(in_band > 2.0 * above_band);
    }

    #[test]
    #[should_panic]
    fn test_zero_cutoff() {
        let _ = OnePoleLowPass::new(0.0, 44100.0);
    }

    #[test]
    #[should_panic]
    fn test_cutoff_above_nyquist() {
        let _ = OnePoleLowPass::new(30000.0, 44100.0);
    }

    #[test]
    #[should_panic]
    fn test_inverted_band() {
        let _ = BandPass::new(1000.0, 100.0, 44100.0);
    }
}
