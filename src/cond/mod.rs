//! Signal conditioning for pitch detection.
//!
//! Raw input is rarely friendly to a period estimator: it carries rumble
//! below the range of interest, harmonics and hiss above it, and an
//! amplitude that varies wildly between and within notes. The
//! [Conditioner] prepares a signal by
//!
//! * band-pass filtering it to the detection frequency range,
//! * tracking its peak envelope,
//! * gating it to silence when the envelope falls below a noise threshold,
//! * compressing and amplifying it towards full scale, and
//! * hard clipping the result.
//!
//! The output is a waveform with roughly uniform amplitude whose zero
//! crossings are far more stable than the raw input's, which is exactly
//! what a bitstream correlator wants to see.

mod dynamics;
mod envelope;
mod gate;
mod one_pole;

pub use dynamics::{hard_clip, Compressor};
pub use envelope::PeakEnvelope;
pub use gate::NoiseGate;
pub use one_pole::{BandPass, OnePoleLowPass};

use crate::common::Frequency;

/// Conditioning chain parameters. The defaults work well for musical
/// instrument signals recorded at sensible levels.
#[derive(Debug, Clone, Copy)]
pub struct ConditionerOptions {
    /// Envelope follower release time in seconds.
    pub envelope_release_seconds: f32,
    /// Compressor threshold in dB relative to full scale.
    pub compressor_threshold_db: f32,
    /// Compressor slope, in (0, 1]. 1 limits, values below 1 compress.
    pub compressor_slope: f32,
    /// Gain applied after compression.
    pub makeup_gain: f32,
    /// Envelope level above which the gate opens.
    pub gate_onset_threshold: f32,
    /// Envelope level at or below which the gate closes.
    pub gate_release_threshold: f32,
}

impl Default for ConditionerOptions {
    fn default() -> Self {
        ConditionerOptions {
            envelope_release_seconds: 0.03,
            compressor_threshold_db: -18.0,
            compressor_slope: 0.25,
            makeup_gain: 4.0,
            gate_onset_threshold: 0.005,
            gate_release_threshold: 0.001,
        }
    }
}

/// Pre-detection signal conditioning chain. See the module documentation
/// for the processing steps.
pub struct Conditioner {
    band_pass: BandPass,
    envelope: PeakEnvelope,
    gate: NoiseGate,
    compressor: Compressor,
    makeup_gain: f32,
}

impl Conditioner {
    /// Creates a conditioner for signals in the given frequency range,
    /// using the default [ConditionerOptions].
    pub fn new(sample_rate: f32, lowest: Frequency, highest: Frequency) -> Self {
        Conditioner::from_options(sample_rate, lowest, highest, ConditionerOptions::default())
    }

    pub fn from_options(
        sample_rate: f32,
        lowest: Frequency,
        highest: Frequency,
        options: ConditionerOptions,
    ) -> Self {
        if options.makeup_gain <= 0.0 {
            panic!("Makeup gain must be greater than 0")
        }
        Conditioner {
            band_pass: BandPass::new(lowest.as_hz(), highest.as_hz(), sample_rate),
            envelope: PeakEnvelope::new(options.envelope_release_seconds, sample_rate),
            gate: NoiseGate::new(options.gate_onset_threshold, options.gate_release_threshold),
            compressor: Compressor::new(options.compressor_threshold_db, options.compressor_slope),
            makeup_gain: options.makeup_gain,
        }
    }

    /// Processes one input sample and returns the conditioned sample.
    /// Returns 0 whenever the gate is closed.
    pub fn update(&mut self, x: f32) -> f32 {
        let filtered = self.band_pass.update(x);
        let envelope = self.envelope.update(filtered);
        if self.gate.update(envelope) {
            let gain = self.compressor.gain(envelope) * self.makeup_gain;
            hard_clip(filtered * gain)
        } else {
            0.0
        }
    }

    /// Returns the current envelope level.
    pub fn envelope(&self) -> f32 {
        self.envelope.envelope()
    }

    pub fn is_gate_open(&self) -> bool {
        self.gate.is_open()
    }

    pub fn reset(&mut self) {
        self.band_pass.reset();
        self.envelope.reset();
        self.gate.reset();
    }
}
