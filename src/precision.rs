//! Precision `p` defines the number of leading hash bits used as register index,
//! giving `m = 2^p` registers and an expected standard error of `1.04 / sqrt(m)`:
//!   P = 10: 1.04 / sqrt(2^10) = 3.25%
//!   P = 12: 1.04 / sqrt(2^12) = 1.62%
//!   P = 14: 1.04 / sqrt(2^14) = 0.81%
//!   P = 18: 1.04 / sqrt(2^18) = 0.20%
//!
//! Supported range is bounded by the precisions covered with bias tables.
use std::fmt::{Display, Formatter};

use crate::error::SketchError;

/// Smallest supported precision
pub const MIN_PRECISION: u8 = 4;
/// Largest supported precision
pub const MAX_PRECISION: u8 = 18;
/// Precision used by `Sketch::new` and `Precision::default`
pub const DEFAULT_PRECISION: u8 = 14;

/// Validated sketch precision in [4..18] range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u8);

impl Precision {
    /// Create new precision, failing for values outside of [4..18] range
    pub fn new(precision: u8) -> Result<Self, SketchError> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
            return Err(SketchError::InvalidPrecision {
                precision,
                min: MIN_PRECISION,
                max: MAX_PRECISION,
            });
        }
        Ok(Self(precision))
    }

    /// Return the smallest precision whose standard error does not exceed `error_rate`
    pub fn from_error_rate(error_rate: f64) -> Result<Self, SketchError> {
        if !error_rate.is_finite() || error_rate <= 0.0 || error_rate >= 1.0 {
            return Err(SketchError::InvalidErrorRate(error_rate));
        }
        // 1.04 / sqrt(2^p) <= e  <=>  p >= 2 * log2(1.04 / e)
        let p = (2.0 * (1.04 / error_rate).log2()).ceil().max(0.0);
        if p > f64::from(MAX_PRECISION) {
            return Err(SketchError::InvalidPrecision {
                precision: p.min(f64::from(u8::MAX)) as u8,
                min: MIN_PRECISION,
                max: MAX_PRECISION,
            });
        }
        Self::new((p as u8).max(MIN_PRECISION))
    }

    /// Return raw precision value
    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Return number of registers `m = 2^p`
    #[inline]
    pub fn registers(self) -> usize {
        1 << self.0
    }

    /// Return expected relative standard error `1.04 / sqrt(m)`
    pub fn standard_error(self) -> f64 {
        1.04 / (self.registers() as f64).sqrt()
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}

impl TryFrom<u8> for Precision {
    type Error = SketchError;

    fn try_from(precision: u8) -> Result<Self, Self::Error> {
        Self::new(precision)
    }
}

impl From<Precision> for u8 {
    fn from(precision: Precision) -> Self {
        precision.0
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0 => false)]
    #[test_case(3 => false)]
    #[test_case(4 => true)]
    #[test_case(14 => true)]
    #[test_case(18 => true)]
    #[test_case(19 => false)]
    #[test_case(64 => false)]
    fn test_new(p: u8) -> bool {
        Precision::new(p).is_ok()
    }

    #[test]
    fn test_invalid_precision_error() {
        assert_eq!(
            Precision::try_from(20),
            Err(SketchError::InvalidPrecision {
                precision: 20,
                min: 4,
                max: 18
            })
        );
    }

    #[test]
    fn test_default() {
        let p = Precision::default();
        assert_eq!(p.get(), 14);
        assert_eq!(p.registers(), 16384);
        assert!((p.standard_error() - 0.008125).abs() < 1e-6);
    }

    #[test_case(0.5 => 4; "coarse error clamps to min precision")]
    #[test_case(0.033 => 10)]
    #[test_case(0.0163 => 12)]
    #[test_case(0.01 => 14)]
    #[test_case(0.0082 => 14)]
    #[test_case(0.003 => 17)]
    fn test_from_error_rate(e: f64) -> u8 {
        let p = Precision::from_error_rate(e).unwrap();
        assert!(p.standard_error() <= e);
        p.get()
    }

    #[test_case(0.0)]
    #[test_case(-0.1)]
    #[test_case(1.0)]
    #[test_case(f64::NAN)]
    #[test_case(f64::INFINITY)]
    fn test_from_error_rate_invalid(e: f64) {
        assert!(matches!(
            Precision::from_error_rate(e),
            Err(SketchError::InvalidErrorRate(_))
        ));
    }

    #[test]
    fn test_from_error_rate_too_precise() {
        assert!(matches!(
            Precision::from_error_rate(0.0001),
            Err(SketchError::InvalidPrecision { .. })
        ));
    }
}
