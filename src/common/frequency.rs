use core::ops::{Div, Mul};

/// A frequency in Hz.
///
/// Detection results and frequency range parameters use this type rather
/// than bare `f32` values so that periods, sample rates and frequencies
/// cannot be mixed up at call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Frequency(f32);

impl Frequency {
    /// The "no detected pitch" value.
    pub const ZERO: Frequency = Frequency(0.0);

    pub const fn from_hz(hz: f32) -> Self {
        Frequency(hz)
    }

    pub const fn as_hz(self) -> f32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns the length of one period in samples at the given sample rate.
    pub fn period_in_samples(self, sample_rate: f32) -> f32 {
        sample_rate / self.0
    }

    /// Returns `self / other` as a plain ratio.
    pub fn ratio(self, other: Frequency) -> f32 {
        self.0 / other.0
    }
}

impl Mul<f32> for Frequency {
    type Output = Frequency;

    fn mul(self, rhs: f32) -> Frequency {
        Frequency(self.0 * rhs)
    }
}

impl Div<f32> for Frequency {
    type Output = Frequency;

    fn div(self, rhs: f32) -> Frequency {
        Frequency(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::Frequency;

    #[test]
    fn test_scaling() {
        let a = Frequency::from_hz(110.0);
        assert_eq!((a * 2.0).as_hz(), 220.0);
        assert_eq!((a / 2.0).as_hz(), 55.0);
    }

    #[test]
    fn test_ordering() {
        assert!(Frequency::from_hz(110.0) < Frequency::from_hz(220.0));
        assert!(Frequency::ZERO < Frequency::from_hz(1.0));
    }

    #[test]
    fn test_period() {
        let period = Frequency::from_hz(100.0).period_in_samples(44100.0);
        assert_eq!(period, 441.0);
    }

    #[test]
    fn test_zero() {
        assert!(Frequency::ZERO.is_zero());
        assert!(!Frequency::from_hz(440.0).is_zero());
        assert_eq!(Frequency::default(), Frequency::ZERO);
    }
}
