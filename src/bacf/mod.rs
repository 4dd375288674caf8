//! A rust implementation of bitstream autocorrelation (BACF) [pitch](https://en.wikipedia.org/wiki/Pitch_%28music%29)
//! detection, an approach described by Joel de Guzman in
//! [Fast and Efficient Pitch Detection](https://www.cycfi.com/2018/03/fast-and-efficient-pitch-detection-bitstream-autocorrelation/).
//! The input signal is reduced to one bit per sample by a zero crossing detector
//! with hysteresis, and the autocorrelation of the resulting bit pattern is
//! computed with XOR and popcount on whole machine words. The algorithm detects
//! pitch in monophonic, primarily musical, sounds. It cannot be used to detect
//! multiple pitches at once, like in a musical chord.
//!
//! The implementation is fast and suitable for real time use:
//! * No memory is allocated apart from a modest amount on initialization.
//! * Correlation compares 32 samples at a time using XOR and popcount.
//! * Only the signs of the input samples matter, so detection results do not
//!   depend on the input level.
//! * The pitch period is refined from interpolated zero crossing positions,
//!   giving sub-sample resolution.
//!
//! # Examples
//! ## Full pipeline
//! [PitchProcessor] conditions the raw input signal before detection, which is
//! the right choice for microphone or instrument input.
//! ```
//! use bitpitch::bacf::PitchProcessor;
//! use bitpitch::common::Frequency;
//!
//! // Create an input buffer containing a pure tone at 220 Hz.
//! let sample_rate = 44100.0;
//! let sine_frequency = 220.0;
//! let mut chunk: Vec<f32> = vec![0.0; 44100];
//! for i in 0..chunk.len() {
//!     let sine_value = (2.0 * core::f32::consts::PI * sine_frequency * (i as f32) / sample_rate).sin();
//!     chunk[i] = 0.6 * sine_value;
//! }
//!
//! // Create a processor covering the pitch range of a guitar.
//! let mut processor = PitchProcessor::new(
//!     sample_rate,
//!     Frequency::from_hz(80.0),
//!     Frequency::from_hz(800.0),
//! )
//! .unwrap();
//!
//! // Perform pitch detection. The processor invokes the provided callback
//! // once per filled analysis window.
//! let mut reading_count = 0;
//! processor.process(&chunk[..], |reading| {
//!     let frequency = reading.frequency.as_hz();
//!     assert!((frequency - sine_frequency).abs() / sine_frequency < 0.01);
//!     assert!(reading.periodicity > 0.9);
//!     reading_count += 1;
//! });
//! assert!(reading_count > 0);
//! ```
//! ## Detector only
//! [PitchDetector] consumes samples directly. Useful for signals that are
//! already clean, like synthesized tones, or if you want to roll your own
//! conditioning.
//! ```
//! use bitpitch::bacf::PitchDetector;
//! use bitpitch::common::Frequency;
//!
//! let sample_rate = 44100.0;
//! let mut detector = PitchDetector::new(
//!     sample_rate,
//!     Frequency::from_hz(80.0),
//!     Frequency::from_hz(800.0),
//! )
//! .unwrap();
//!
//! for i in 0..(4 * detector.window_size()) {
//!     let sample = (2.0 * core::f32::consts::PI * 440.0 * (i as f32) / sample_rate).sin();
//!     if detector.update(sample) {
//!         println!(
//!             "Frequency {} Hz, periodicity {}",
//!             detector.frequency().as_hz(),
//!             detector.periodicity()
//!         );
//!     }
//! }
//! assert!((detector.frequency().as_hz() - 440.0).abs() <= 4.4);
//! ```
//! # A note on periodicity and silence
//! The number of matching bits at the best lag, divided by the window size,
//! gives a periodicity value between zero and one that indicates to what
//! degree the input signal repeats itself. A reading is only published when
//! the periodicity reaches the configured minimum and the window contains at
//! least two rising edges. The edge check matters because a silent window has
//! a constant bit pattern that correlates perfectly at every lag and would
//! otherwise pass with a periodicity of one.

mod bitstream;
mod detector;
mod edges;
mod engine;
mod processor;
mod result;

pub use bitstream::Bitstream;
pub use detector::{DetectorOptions, PitchDetector, PitchReading};
pub use edges::{Edge, EdgeDetector, EdgePolarity, ZeroCross};
pub use engine::Bacf;
pub use processor::{PitchProcessor, ProcessorOptions};
pub use result::Correlation;
