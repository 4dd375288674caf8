/// A dual-threshold noise gate driven by an envelope level.
///
/// The gate opens when the envelope rises above the onset threshold and
/// closes when it falls to the release threshold or below. For levels
/// between the two thresholds the gate holds its previous state, so a
/// signal hovering around a single threshold cannot make it chatter.
pub struct NoiseGate {
    onset_threshold: f32,
    release_threshold: f32,
    is_open: bool,
}

impl NoiseGate {
    pub fn new(onset_threshold: f32, release_threshold: f32) -> Self {
        if release_threshold <= 0.0 || onset_threshold <= release_threshold {
            panic!("Onset threshold must be greater than release threshold, both greater than 0")
        }
        NoiseGate {
            onset_threshold,
            release_threshold,
            is_open: false,
        }
    }

    /// Feeds the current envelope level. Returns true if the gate is open.
    pub fn update(&mut self, envelope: f32) -> bool {
        let threshold = if self.is_open {
            self.release_threshold
        } else {
            self.onset_threshold
        };
        self.is_open = envelope > threshold;
        self.is_open
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn reset(&mut self) {
        self.is_open = false;
    }
}
