/// Reasons a detector or processor cannot be constructed with the given
/// parameters. Construction never clamps or adjusts bad parameters, it
/// fails with one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The lowest detectable frequency must be positive and strictly
    /// below the highest.
    InvalidFrequencyRange { lowest_hz: f32, highest_hz: f32 },
    /// The sample rate must exceed twice the highest detectable frequency.
    SampleRateTooLow { sample_rate: f32, highest_hz: f32 },
    /// The frequency range and sample rate imply an analysis window larger
    /// than the supported maximum.
    WindowTooLarge { window_size: usize, max: usize },
    /// The noise floor must be negative (in dB relative to full scale).
    InvalidNoiseFloor { db: f32 },
    /// The minimum periodicity must be in `[0, 1]`.
    InvalidMinPeriodicity { value: f32 },
    /// The gate onset threshold must be greater than the release threshold,
    /// and both must be positive.
    InvalidGateThresholds { onset: f32, release: f32 },
    /// The envelope release time must be positive.
    InvalidEnvelopeRelease { seconds: f32 },
    /// The compressor slope must be in (0, 1] and the makeup gain positive.
    InvalidCompressor { slope: f32, makeup_gain: f32 },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidFrequencyRange {
                lowest_hz,
                highest_hz,
            } => {
                write!(
                    f,
                    "invalid frequency range: lowest {lowest_hz} Hz must be positive and below highest {highest_hz} Hz"
                )
            }
            Self::SampleRateTooLow {
                sample_rate,
                highest_hz,
            } => {
                write!(
                    f,
                    "sample rate {sample_rate} Hz must exceed twice the highest detectable frequency {highest_hz} Hz"
                )
            }
            Self::WindowTooLarge { window_size, max } => {
                write!(
                    f,
                    "required analysis window of {window_size} samples exceeds the maximum of {max}"
                )
            }
            Self::InvalidNoiseFloor { db } => {
                write!(f, "noise floor {db} dB must be negative")
            }
            Self::InvalidMinPeriodicity { value } => {
                write!(f, "minimum periodicity {value} must be in [0, 1]")
            }
            Self::InvalidGateThresholds { onset, release } => {
                write!(
                    f,
                    "gate onset threshold {onset} must be greater than release threshold {release}, both positive"
                )
            }
            Self::InvalidEnvelopeRelease { seconds } => {
                write!(f, "envelope release time {seconds} s must be positive")
            }
            Self::InvalidCompressor { slope, makeup_gain } => {
                write!(
                    f,
                    "compressor slope {slope} must be in (0, 1] and makeup gain {makeup_gain} positive"
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn test_display() {
        let error = ConfigError::InvalidFrequencyRange {
            lowest_hz: 200.0,
            highest_hz: 100.0,
        };
        let message = alloc::format!("{}", error);
        assert!(message.contains("200"));
        assert!(message.contains("100"));
    }
}
