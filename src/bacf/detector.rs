use crate::bacf::edges::EdgePolarity;
use crate::bacf::engine::Bacf;
use crate::common::{db_to_gain, Frequency};
use crate::error::ConfigError;
use micromath::F32Ext;

/// Candidates within 3% of double or half the held frequency count as
/// octave jumps and are debounced.
const OCTAVE_JUMP_TOLERANCE: f32 = 0.03;

/// Detector parameters beyond the frequency range.
#[derive(Debug, Clone, Copy)]
pub struct DetectorOptions {
    /// Zero crossing hysteresis in dB relative to full scale. Must be
    /// negative.
    pub noise_floor_db: f32,
    /// Minimum periodicity a window must reach for its candidate to be
    /// considered, in `[0, 1]`.
    pub min_periodicity: f32,
    /// Keep the previous estimate when a window yields no acceptable
    /// candidate. When false the estimate is cleared to
    /// [Frequency::ZERO] instead.
    pub hold_last_estimate: bool,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        DetectorOptions {
            noise_floor_db: -30.0,
            min_periodicity: 0.8,
            hold_last_estimate: true,
        }
    }
}

/// A timestamped pitch estimate, produced once per completed analysis
/// window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchReading {
    /// Total number of samples consumed when the window completed, i.e
    /// the index just past the sample that triggered the analysis.
    pub sample_index: usize,
    /// The current best estimate, [Frequency::ZERO] if no pitch has been
    /// accepted yet.
    pub frequency: Frequency,
    /// Periodicity of the window the estimate was accepted from, in
    /// `[0, 1]`.
    pub periodicity: f32,
}

/// Streaming monophonic pitch detector based on bitstream
/// autocorrelation.
///
/// Feeds every input sample to a [Bacf] engine. Each time the engine
/// completes a window the detector searches the correlation for the best
/// candidate lag, preferring the smallest lag whose count ties with the
/// maximum, refines the period using pairs of interpolated rising edges
/// spaced about one lag apart, and converts the period to a frequency.
/// Candidates from windows with too little periodicity, or with too few
/// edges to be trusted, leave the published estimate alone.
pub struct PitchDetector {
    engine: Bacf,
    sample_rate: f32,
    frequency: Frequency,
    periodicity: f32,
    min_periodicity: f32,
    hold_last_estimate: bool,
    count_tolerance: u32,
    processed_sample_count: usize,
    octave_candidate: Frequency,
    octave_run: u32,
}

impl PitchDetector {
    /// Largest supported analysis window in samples.
    pub const MAX_WINDOW_SIZE: usize = 32768;
    const MIN_WINDOW_SIZE: usize = 64;

    /// Creates a detector for pitches in `[lowest, highest]` with the
    /// default [DetectorOptions].
    pub fn new(
        sample_rate: f32,
        lowest: Frequency,
        highest: Frequency,
    ) -> Result<Self, ConfigError> {
        PitchDetector::from_options(sample_rate, lowest, highest, DetectorOptions::default())
    }

    pub fn from_options(
        sample_rate: f32,
        lowest: Frequency,
        highest: Frequency,
        options: DetectorOptions,
    ) -> Result<Self, ConfigError> {
        if lowest.as_hz() <= 0.0 || lowest >= highest {
            return Err(ConfigError::InvalidFrequencyRange {
                lowest_hz: lowest.as_hz(),
                highest_hz: highest.as_hz(),
            });
        }
        if sample_rate <= 2.0 * highest.as_hz() {
            return Err(ConfigError::SampleRateTooLow {
                sample_rate,
                highest_hz: highest.as_hz(),
            });
        }
        if options.noise_floor_db >= 0.0 {
            return Err(ConfigError::InvalidNoiseFloor {
                db: options.noise_floor_db,
            });
        }
        if options.min_periodicity < 0.0 || options.min_periodicity > 1.0 {
            return Err(ConfigError::InvalidMinPeriodicity {
                value: options.min_periodicity,
            });
        }

        // The window must contain at least one full period of the lowest
        // detectable frequency. Rounding up to a power of two keeps the
        // bitstream word math aligned.
        let lowest_period = F32Ext::ceil(sample_rate / lowest.as_hz()) as usize;
        let mut window_size = lowest_period
            .next_power_of_two()
            .max(Self::MIN_WINDOW_SIZE);
        let min_lag = F32Ext::round(sample_rate / highest.as_hz()) as usize;
        if min_lag >= window_size {
            window_size *= 2;
        }
        if window_size > Self::MAX_WINDOW_SIZE {
            return Err(ConfigError::WindowTooLarge {
                window_size,
                max: Self::MAX_WINDOW_SIZE,
            });
        }

        Ok(PitchDetector {
            engine: Bacf::new(window_size, min_lag, db_to_gain(options.noise_floor_db)),
            sample_rate,
            frequency: Frequency::ZERO,
            periodicity: 0.0,
            min_periodicity: options.min_periodicity,
            hold_last_estimate: options.hold_last_estimate,
            count_tolerance: (window_size / 16) as u32,
            processed_sample_count: 0,
            octave_candidate: Frequency::ZERO,
            octave_run: 0,
        })
    }

    /// Feeds one sample. Returns true when this sample completed an
    /// analysis window and the published estimate was re-evaluated.
    pub fn update(&mut self, sample: f32) -> bool {
        self.processed_sample_count += 1;
        if self.engine.update(sample) {
            self.evaluate_window();
            return true;
        }
        false
    }

    /// Processes a buffer of samples, invoking `result_handler` with a
    /// fresh [PitchReading] for every completed analysis window.
    pub fn process<F>(&mut self, samples: &[f32], mut result_handler: F)
    where
        F: FnMut(&PitchReading),
    {
        for sample in samples.iter() {
            if self.update(*sample) {
                result_handler(&self.reading());
            }
        }
    }

    /// The most recent published estimate as a reading.
    pub fn reading(&self) -> PitchReading {
        PitchReading {
            sample_index: self.processed_sample_count,
            frequency: self.frequency,
            periodicity: self.periodicity,
        }
    }

    /// The current frequency estimate, [Frequency::ZERO] before the
    /// first accepted window.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Periodicity of the window the current estimate was accepted from.
    pub fn periodicity(&self) -> f32 {
        self.periodicity
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// The fixed analysis window size in samples.
    pub fn window_size(&self) -> usize {
        self.engine.window_size()
    }

    /// Diagnostic access to the underlying correlation engine.
    pub fn bacf(&self) -> &Bacf {
        &self.engine
    }

    /// Returns the detector to its freshly constructed state.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.frequency = Frequency::ZERO;
        self.periodicity = 0.0;
        self.processed_sample_count = 0;
        self.octave_candidate = Frequency::ZERO;
        self.octave_run = 0;
    }

    fn evaluate_window(&mut self) {
        if let Some((frequency, periodicity)) = self.window_candidate() {
            if self.debounce(frequency) {
                self.frequency = frequency;
                self.periodicity = periodicity;
            }
        } else if !self.hold_last_estimate {
            self.frequency = Frequency::ZERO;
            self.periodicity = 0.0;
        }
    }

    /// Extracts the pitch candidate from the freshly completed window,
    /// or None when the window has no acceptable pitch.
    fn window_candidate(&self) -> Option<(Frequency, f32)> {
        let periodicity = self.engine.correlation().periodicity();
        if periodicity < self.min_periodicity {
            return None;
        }
        // A window without transitions is all zero or all one bits and
        // correlates perfectly at every lag. Genuine periodicity needs
        // at least two rising edges.
        if self.engine.edge_count(EdgePolarity::Rising) < 2 {
            return None;
        }
        let lag = self.best_lag();
        let period = self.refined_period(lag).unwrap_or(lag as f32);
        if period <= 0.0 {
            return None;
        }
        Some((Frequency::from_hz(self.sample_rate / period), periodicity))
    }

    /// The lag to convert into a period: a true periodic signal
    /// correlates at every multiple of its period, so of all lags whose
    /// count ties with the maximum the smallest one is taken (avoiding
    /// octave-down errors), then moved up to the local count maximum of
    /// its cluster.
    fn best_lag(&self) -> usize {
        let correlation = self.engine.correlation();
        let counts = correlation.counts();
        let threshold = correlation.max_count().saturating_sub(self.count_tolerance);
        let mut lag = correlation.max_lag();
        for candidate in correlation.min_lag()..counts.len() {
            if counts[candidate] >= threshold {
                lag = candidate;
                break;
            }
        }
        while lag + 1 < counts.len() && counts[lag + 1] > counts[lag] {
            lag += 1;
        }
        lag
    }

    /// Refines an integer lag to a sub-sample period by averaging the
    /// position differences of all rising edge pairs spaced within two
    /// samples of the lag. None when no such pair exists, e.g. because
    /// the edge history was truncated.
    fn refined_period(&self, lag: usize) -> Option<f32> {
        let edges = self.engine.edges();
        let mut sum = 0.0;
        let mut pair_count = 0;
        for (i, first) in edges.iter().enumerate() {
            if first.polarity != EdgePolarity::Rising {
                continue;
            }
            for second in edges[i + 1..].iter() {
                if second.polarity != EdgePolarity::Rising {
                    continue;
                }
                let distance = second.index - first.index;
                if distance + 2 < lag {
                    continue;
                }
                if distance > lag + 2 {
                    break;
                }
                let period = second.position - first.position;
                if period > 0.0 {
                    sum += period;
                    pair_count += 1;
                }
            }
        }
        if pair_count > 0 {
            Some(sum / pair_count as f32)
        } else {
            None
        }
    }

    /// Octave jump debouncing: a candidate at about double or half the
    /// held frequency must repeat in two consecutive windows before it
    /// replaces the held estimate. Any other candidate is accepted
    /// immediately.
    fn debounce(&mut self, candidate: Frequency) -> bool {
        if self.frequency.is_zero() {
            self.octave_run = 0;
            return true;
        }
        let ratio = candidate.ratio(self.frequency);
        let is_octave_jump = relative_error(ratio, 2.0) < OCTAVE_JUMP_TOLERANCE
            || relative_error(ratio, 0.5) < OCTAVE_JUMP_TOLERANCE;
        if !is_octave_jump {
            self.octave_run = 0;
            return true;
        }
        let repeats = !self.octave_candidate.is_zero()
            && relative_error(candidate.ratio(self.octave_candidate), 1.0) < OCTAVE_JUMP_TOLERANCE;
        if repeats {
            self.octave_run += 1;
        } else {
            self.octave_candidate = candidate;
            self.octave_run = 1;
        }
        if self.octave_run >= 2 {
            self.octave_run = 0;
            self.octave_candidate = Frequency::ZERO;
            return true;
        }
        false
    }
}

fn relative_error(value: f32, reference: f32) -> f32 {
    F32Ext::abs(value / reference - 1.0)
}
