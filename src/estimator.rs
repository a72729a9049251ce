//! Estimator turns hashes into register updates and registers into cardinality estimates.
//!
//! # Update
//! For precision `P` the top `P` bits of a 64-bit hash select one of `M = 2^P` registers,
//! while the remaining `64 - P` bits give the rank: `1 + leading zeros`, saturating at
//! `64 - P + 1` when all of them are zero. The register keeps the maximum rank seen.
//!
//! # Estimate
//! Raw HyperLogLog estimate `alpha(M) * M^2 / sum(2^-register)` is corrected depending on
//! the range it falls into:
//! - `raw <= 5M/2` - linear counting `M * ln(M / zeros)` while zero registers remain.
//! - raw within bias tables - empirical bias interpolated between the two nearest sample
//!   points is subtracted.
//! - otherwise - large range correction for the 64-bit hash space.
//!
//! [Original HyperLogLog paper](http://algo.inria.fr/flajolet/Publications/FlFuGaMe07.pdf)
//!
//! [HyperLogLog++ paper](https://static.googleusercontent.com/media/research.google.com/en//pubs/archive/40671.pdf)
use std::fmt::{Display, Formatter};

use enum_dispatch::enum_dispatch;

use crate::bias::{threshold, BIASES, RAW_ESTIMATES};
use crate::precision::MIN_PRECISION;
use crate::registers::Registers;

/// Size of the 64-bit hash space
const HASH_SPACE: f64 = 18_446_744_073_709_551_616.0;

/// Correction applied to the raw estimate, selected by its range
#[derive(Debug, Clone, Copy, PartialEq)]
#[enum_dispatch]
pub enum Correction {
    LinearCounting(LinearCounting),
    Uncorrected(Uncorrected),
    BiasCorrected(BiasCorrected),
    LargeRange(LargeRange),
}

/// Correction trait which must be implemented by all corrections.
#[enum_dispatch(Correction)]
pub(crate) trait CorrectionTrait {
    fn apply(&self, raw: f64) -> f64;
}

/// Small range: estimate from the number of registers still set to 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCounting {
    registers: usize,
    zeros: usize,
}

/// Small range without zero registers left: raw estimate is used as is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uncorrected;

/// Mid range: interpolated empirical bias subtracted from raw estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasCorrected {
    bias: f64,
}

/// Large range: correction for hash collisions within 64-bit hash space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LargeRange;

impl CorrectionTrait for LinearCounting {
    #[inline]
    fn apply(&self, _raw: f64) -> f64 {
        let m = self.registers as f64;
        m * (m / self.zeros as f64).ln()
    }
}

impl CorrectionTrait for Uncorrected {
    #[inline]
    fn apply(&self, raw: f64) -> f64 {
        raw
    }
}

impl CorrectionTrait for BiasCorrected {
    #[inline]
    fn apply(&self, raw: f64) -> f64 {
        raw - self.bias
    }
}

impl CorrectionTrait for LargeRange {
    #[inline]
    fn apply(&self, raw: f64) -> f64 {
        if raw >= HASH_SPACE {
            // saturated registers, nothing left to correct against
            return raw;
        }
        -HASH_SPACE * (-raw / HASH_SPACE).ln_1p()
    }
}

impl Display for Correction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Correction::LinearCounting(_) => "LinearCounting",
            Correction::Uncorrected(_) => "Uncorrected",
            Correction::BiasCorrected(_) => "BiasCorrected",
            Correction::LargeRange(_) => "LargeRange",
        })
    }
}

/// Return register index and rank of `hash` for given precision
#[inline]
pub(crate) fn bucket_and_rank(hash: u64, precision: u8) -> (usize, u8) {
    let bucket = (hash >> (64 - precision)) as usize;
    // Index bits are shifted out, leaving `64 - P` tail bits followed by `P` zero bits.
    // Setting the highest of those zero bits caps the rank at `64 - P + 1` without branching.
    let tail = (hash << precision) | (1 << (precision - 1));
    (bucket, tail.leading_zeros() as u8 + 1)
}

/// Return cardinality estimate of `registers` along with correction applied to raw estimate
#[inline]
pub(crate) fn estimate(registers: &Registers, precision: u8) -> (f64, Correction) {
    let (sum, zeros) = harmonic_sum_and_zeros(registers);
    let m = registers.len() as f64;
    let raw = alpha(registers.len()) * m * m / sum;
    let correction = select_correction(raw, zeros, precision);
    (correction.apply(raw).max(0.0), correction)
}

/// Select correction for `raw` estimate based on its range
#[inline]
pub(crate) fn select_correction(raw: f64, zeros: usize, precision: u8) -> Correction {
    if raw <= threshold(precision) {
        if zeros > 0 {
            return LinearCounting {
                registers: 1 << precision,
                zeros,
            }
            .into();
        }
        return Uncorrected.into();
    }
    match estimate_bias(raw, precision) {
        Some(bias) => BiasCorrected { bias }.into(),
        None => LargeRange.into(),
    }
}

/// Return registers' harmonic sum `sum(2^-register)` and number of zero registers
#[inline]
fn harmonic_sum_and_zeros(registers: &Registers) -> (f64, usize) {
    registers.iter().fold((0.0, 0), |(sum, zeros), rank| {
        (
            sum + 1.0 / ((1u64 << rank) as f64),
            zeros + usize::from(rank == 0),
        )
    })
}

/// Parameter for bias correction
#[inline]
fn alpha(m: usize) -> f64 {
    match m {
        16 => 0.673,
        32 => 0.697,
        64 => 0.709,
        _ => 0.7213 / (1.0 + 1.079 / (m as f64)),
    }
}

/// Return empirical bias of `raw` estimate interpolated between its two nearest sample points,
/// or `None` when `raw` is outside of sample points range.
#[inline]
pub(crate) fn estimate_bias(raw: f64, precision: u8) -> Option<f64> {
    let row = usize::from(precision - MIN_PRECISION);
    let estimates = &RAW_ESTIMATES[row];
    let biases = &BIASES[row];

    let i = lower_bound(estimates, raw);
    if i == estimates.len() {
        return None;
    }
    if estimates[i] == raw {
        return Some(biases[i]);
    }
    if i == 0 {
        return None;
    }

    let (x0, x1) = (estimates[i - 1], estimates[i]);
    let (y0, y1) = (biases[i - 1], biases[i]);
    Some(y0 + (raw - x0) * (y1 - y0) / (x1 - x0))
}

/// Return index of the first element of ascending `values` which is not less than `target`,
/// or `values.len()` if there is no such element.
///
/// Among equal elements index of the first one is returned.
///
/// ```
/// use hll_sketch::lower_bound;
///
/// assert_eq!(lower_bound(&[2.0, 3.0, 5.0, 5.0, 6.0], 5.0), 2);
/// assert_eq!(lower_bound(&[2.0, 3.0, 5.0, 6.0], 4.0), 2);
/// assert_eq!(lower_bound(&[2.0, 3.0], 22.0), 2);
/// ```
#[inline]
pub fn lower_bound(values: &[f64], target: f64) -> usize {
    values.partition_point(|&v| v < target)
}
