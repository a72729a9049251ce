use thiserror::Error;

/// Errors returned when a sketch is configured or combined incorrectly
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    #[error("precision {precision} is outside of supported range [{min}..{max}]")]
    InvalidPrecision { precision: u8, min: u8, max: u8 },
    #[error("error rate {0} must be a finite number in (0, 1) range")]
    InvalidErrorRate(f64),
    #[error("cannot merge sketches of different precisions: {lhs} and {rhs}")]
    PrecisionMismatch { lhs: u8, rhs: u8 },
}
