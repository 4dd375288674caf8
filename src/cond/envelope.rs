use micromath::F32Ext;

/// A peak envelope follower with instant attack and exponential release.
///
/// The follower tracks the absolute value of the input. A sample whose
/// magnitude exceeds the current envelope replaces it immediately; otherwise
/// the envelope decays exponentially towards the current magnitude with the
/// configured release time constant.
pub struct PeakEnvelope {
    release: f32,
    y: f32,
}

impl PeakEnvelope {
    pub fn new(release_seconds: f32, sample_rate: f32) -> Self {
        if release_seconds <= 0.0 {
            panic!("Release time must be greater than 0")
        }
        if sample_rate <= 0.0 {
            panic!("Sample rate must be greater than 0")
        }
        PeakEnvelope {
            release: F32Ext::exp(-1.0 / (release_seconds * sample_rate)),
            y: 0.0,
        }
    }

    pub fn update(&mut self, x: f32) -> f32 {
        let magnitude = F32Ext::abs(x);
        if magnitude > self.y {
            self.y = magnitude;
        } else {
            self.y = magnitude + self.release * (self.y - magnitude);
        }
        self.y
    }

    /// Returns the current envelope value.
    pub fn envelope(&self) -> f32 {
        self.y
    }

    pub fn reset(&mut self) {
        self.y = 0.0;
    }
}
