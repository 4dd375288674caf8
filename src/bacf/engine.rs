use crate::bacf::bitstream::Bitstream;
use crate::bacf::edges::{Edge, EdgeDetector, EdgePolarity};
use crate::bacf::result::Correlation;

/// Streaming bitstream autocorrelation engine.
///
/// Consumes one sample at a time, maintaining the sign state of the
/// signal as a bit per sample together with the interpolated edge
/// positions the bits were derived from. Once enough samples have
/// accumulated to correlate a full window at every candidate lag, the
/// correlation sweep runs and [Bacf::update] reports readiness. The
/// window then slides forward by one window length and accumulation
/// continues, so after the initial fill a result is produced every
/// `window_size` samples.
///
/// The engine works purely in the sample domain. Translating frequencies
/// to window sizes and lags, and correlation counts back to frequencies,
/// is the pitch detector's job.
pub struct Bacf {
    bitstream: Bitstream,
    edge_detector: EdgeDetector,
    correlation: Correlation,
    window_size: usize,
    write_index: usize,
    needs_shift: bool,
}

impl Bacf {
    /// `window_size` is the analysis window length in samples and must be
    /// a power of two of at least 64. Candidate lags run from `min_lag`
    /// (at least 1) to `window_size - 1`. `hysteresis` is the linear
    /// amplitude below which a negative excursion does not count as a
    /// sign change.
    pub fn new(window_size: usize, min_lag: usize, hysteresis: f32) -> Self {
        if window_size < 64 || !window_size.is_power_of_two() {
            panic!("Window size must be a power of two of at least 64")
        }
        Bacf {
            bitstream: Bitstream::new(2 * window_size),
            edge_detector: EdgeDetector::new(hysteresis, window_size),
            correlation: Correlation::new(window_size, min_lag),
            window_size,
            write_index: 0,
            needs_shift: false,
        }
    }

    /// Feeds one sample. Returns true when this sample completed a window
    /// and a fresh correlation result is available through
    /// [Bacf::correlation].
    ///
    /// The completed window, its correlation counts and its edges stay
    /// readable until the next call, which slides the window forward.
    pub fn update(&mut self, sample: f32) -> bool {
        if self.needs_shift {
            self.bitstream.shift_half();
            self.edge_detector.slide(self.window_size);
            self.write_index = self.window_size;
            self.needs_shift = false;
        }
        let state = self.edge_detector.update(sample, self.write_index);
        self.bitstream.set(self.write_index, state);
        self.write_index += 1;
        if self.write_index == self.bitstream.bit_count() {
            self.correlation.compute(&self.bitstream);
            self.needs_shift = true;
            return true;
        }
        false
    }

    /// The correlation snapshot of the most recently completed window.
    /// All zeros before the first completed window.
    pub fn correlation(&self) -> &Correlation {
        &self.correlation
    }

    /// The edges recorded in the current analysis span, oldest first.
    pub fn edges(&self) -> &[Edge] {
        self.edge_detector.edges()
    }

    /// Returns the number of recorded edges with the given polarity.
    pub fn edge_count(&self, polarity: EdgePolarity) -> usize {
        self.edge_detector.edge_count(polarity)
    }

    /// Read access to one bit of the sign bitstream, for diagnostics.
    pub fn bit(&self, index: usize) -> bool {
        self.bitstream.get(index)
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn min_lag(&self) -> usize {
        self.correlation.min_lag()
    }

    /// Returns the engine to its freshly constructed state.
    pub fn reset(&mut self) {
        self.bitstream.clear();
        self.edge_detector.reset();
        self.correlation.clear();
        self.write_index = 0;
        self.needs_shift = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn generate_sine(sample_rate: f32, frequency: f32, sample_count: usize) -> Vec<f32> {
        (0..sample_count)
            .map(|i| (2.0 * core::f32::consts::PI * frequency * (i as f32) / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_ready_cadence() {
        let window_size = 256;
        let mut engine = Bacf::new(window_size, 8, 0.01);
        let samples = generate_sine(44100.0, 1000.0, 5 * window_size);
        let mut ready_indices: Vec<usize> = Vec::new();
        for (i, sample) in samples.iter().enumerate() {
            if engine.update(*sample) {
                ready_indices.push(i);
            }
        }
        // First result once both window halves are filled, then one per
        // window length.
        assert_eq!(
            ready_indices,
            alloc::vec![511, 767, 1023, 1279]
        );
    }

    #[test]
    fn test_sine_period_found() {
        let sample_rate = 44100.0;
        let window_size = 512;
        let mut engine = Bacf::new(window_size, 16, 0.01);
        // 44100 / 441 Hz = exactly 100 samples per period.
        let samples = generate_sine(sample_rate, 441.0, 2 * window_size);
        let mut ready = false;
        for sample in samples {
            ready |= engine.update(sample);
        }
        assert!(ready);
        let correlation = engine.correlation();
        assert_eq!(correlation.max_lag(), 100);
        assert!(correlation.periodicity() > 0.95);
    }

    #[test]
    fn test_result_stays_readable_until_next_sample() {
        let window_size = 256;
        let mut engine = Bacf::new(window_size, 8, 0.01);
        let samples = generate_sine(44100.0, 1000.0, 2 * window_size);
        let mut ready = false;
        for sample in samples {
            ready |= engine.update(sample);
        }
        assert!(ready);
        let max_lag = engine.correlation().max_lag();
        let edge_count = engine.edges().len();
        assert!(max_lag > 0);
        assert!(edge_count > 0);
        // Readable again without feeding more input.
        assert_eq!(engine.correlation().max_lag(), max_lag);
        assert_eq!(engine.edges().len(), edge_count);
    }

    #[test]
    fn test_edges_translated_after_slide() {
        let window_size = 256;
        let mut engine = Bacf::new(window_size, 8, 0.01);
        let samples = generate_sine(44100.0, 1000.0, 2 * window_size + 1);
        for sample in samples {
            engine.update(sample);
        }
        // One sample past the first completed window the span has slid
        // forward by window_size, so all edges lie within it.
        for edge in engine.edges() {
            assert!(edge.index <= window_size);
        }
    }

    #[test]
    fn test_silent_input_produces_no_edges() {
        let window_size = 256;
        let mut engine = Bacf::new(window_size, 8, 0.01);
        let mut ready_count = 0;
        for _ in 0..4 * window_size {
            if engine.update(0.0) {
                ready_count += 1;
            }
        }
        // Windows complete on schedule but contain no transitions. The
        // all-zero bitstream correlates perfectly at every lag, which is
        // why acceptance requires edges.
        assert!(ready_count > 0);
        assert_eq!(engine.edges().len(), 0);
        assert_eq!(engine.correlation().max_count(), window_size as u32);
    }

    #[test]
    fn test_reset() {
        let window_size = 256;
        let mut engine = Bacf::new(window_size, 8, 0.01);
        for sample in generate_sine(44100.0, 1000.0, 2 * window_size) {
            engine.update(sample);
        }
        engine.reset();
        assert_eq!(engine.edges().len(), 0);
        assert_eq!(engine.correlation().max_count(), 0);
        // After a reset the fill starts over.
        let mut first_ready = None;
        for i in 0..2 * window_size {
            if engine.update(0.1) && first_ready.is_none() {
                first_ready = Some(i);
            }
        }
        assert_eq!(first_ready, Some(2 * window_size - 1));
    }

    #[test]
    #[should_panic]
    fn test_window_size_not_power_of_two() {
        let _ = Bacf::new(300, 8, 0.01);
    }

    #[test]
    #[should_panic]
    fn test_window_size_too_small() {
        let _ = Bacf::new(32, 8, 0.01);
    }
}
