use crate::bacf::detector::{DetectorOptions, PitchDetector, PitchReading};
use crate::common::Frequency;
use crate::cond::{Conditioner, ConditionerOptions};
use crate::error::ConfigError;

/// Combined options for the conditioning chain and the detector.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessorOptions {
    pub detector: DetectorOptions,
    pub conditioner: ConditionerOptions,
}

/// The full pitch detection pipeline: a [Conditioner] followed by a
/// [PitchDetector].
///
/// Every input sample is band-pass filtered, gated and compressed before
/// it reaches the detector, which makes detection work on real
/// instrument recordings with varying levels and background noise, not
/// just clean test tones.
pub struct PitchProcessor {
    conditioner: Conditioner,
    detector: PitchDetector,
}

impl PitchProcessor {
    /// Creates a processor for pitches in `[lowest, highest]` with
    /// default options. The conditioner band-pass is matched to the
    /// same frequency range.
    pub fn new(
        sample_rate: f32,
        lowest: Frequency,
        highest: Frequency,
    ) -> Result<Self, ConfigError> {
        PitchProcessor::from_options(sample_rate, lowest, highest, ProcessorOptions::default())
    }

    pub fn from_options(
        sample_rate: f32,
        lowest: Frequency,
        highest: Frequency,
        options: ProcessorOptions,
    ) -> Result<Self, ConfigError> {
        let conditioner = options.conditioner;
        if conditioner.gate_release_threshold <= 0.0
            || conditioner.gate_onset_threshold <= conditioner.gate_release_threshold
        {
            return Err(ConfigError::InvalidGateThresholds {
                onset: conditioner.gate_onset_threshold,
                release: conditioner.gate_release_threshold,
            });
        }
        if conditioner.envelope_release_seconds <= 0.0 {
            return Err(ConfigError::InvalidEnvelopeRelease {
                seconds: conditioner.envelope_release_seconds,
            });
        }
        if conditioner.compressor_slope <= 0.0
            || conditioner.compressor_slope > 1.0
            || conditioner.makeup_gain <= 0.0
        {
            return Err(ConfigError::InvalidCompressor {
                slope: conditioner.compressor_slope,
                makeup_gain: conditioner.makeup_gain,
            });
        }
        // The detector validates the frequency range and sample rate, so
        // construct it before the conditioner touches them.
        let detector = PitchDetector::from_options(sample_rate, lowest, highest, options.detector)?;
        Ok(PitchProcessor {
            conditioner: Conditioner::from_options(sample_rate, lowest, highest, conditioner),
            detector,
        })
    }

    /// Conditions one input sample and feeds it to the detector. Returns
    /// true when the sample completed an analysis window.
    pub fn update(&mut self, sample: f32) -> bool {
        let conditioned = self.conditioner.update(sample);
        self.detector.update(conditioned)
    }

    /// Processes a buffer of raw input samples, invoking
    /// `result_handler` with a [PitchReading] for every completed
    /// analysis window.
    pub fn process<F>(&mut self, samples: &[f32], mut result_handler: F)
    where
        F: FnMut(&PitchReading),
    {
        for sample in samples.iter() {
            if self.update(*sample) {
                result_handler(&self.detector.reading());
            }
        }
    }

    /// Like [PitchProcessor::process], but also writes the conditioned
    /// sample stream to `conditioned`, which must have the same length
    /// as `samples`. The input is never modified.
    pub fn process_into<F>(
        &mut self,
        samples: &[f32],
        conditioned: &mut [f32],
        mut result_handler: F,
    ) where
        F: FnMut(&PitchReading),
    {
        if samples.len() != conditioned.len() {
            panic!("Input and conditioned output buffers must have the same length")
        }
        for (i, sample) in samples.iter().enumerate() {
            let value = self.conditioner.update(*sample);
            conditioned[i] = value;
            if self.detector.update(value) {
                result_handler(&self.detector.reading());
            }
        }
    }

    pub fn frequency(&self) -> Frequency {
        self.detector.frequency()
    }

    pub fn periodicity(&self) -> f32 {
        self.detector.periodicity()
    }

    /// The most recent published estimate as a reading.
    pub fn reading(&self) -> PitchReading {
        self.detector.reading()
    }

    pub fn detector(&self) -> &PitchDetector {
        &self.detector
    }

    pub fn conditioner(&self) -> &Conditioner {
        &self.conditioner
    }

    /// Returns the processor to its freshly constructed state.
    pub fn reset(&mut self) {
        self.conditioner.reset();
        self.detector.reset();
    }
}
