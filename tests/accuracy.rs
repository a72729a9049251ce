use hll_sketch::{Precision, Sketch};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use test_case::test_case;
use wyhash::WyHash;

const TRIALS: usize = 20;
/// Fewer trials for large precisions where a single trial inserts up to `10 * 2^16` hashes
const LARGE_PRECISION_TRIALS: usize = 4;

/// Cardinalities as fractions of the number of registers, spanning all correction ranges
const LOAD_FACTORS: [f64; 9] = [0.1, 0.5, 1.0, 2.0, 2.5, 3.0, 4.0, 6.0, 10.0];

fn relative_error(estimate: f64, n: usize) -> f64 {
    (estimate - n as f64).abs() / n as f64
}

#[test_case(4, TRIALS)]
#[test_case(6, TRIALS)]
#[test_case(8, TRIALS)]
#[test_case(10, TRIALS)]
#[test_case(12, TRIALS)]
#[test_case(14, TRIALS)]
#[test_case(16, LARGE_PRECISION_TRIALS)]
fn test_relative_error(precision: u8, trials: usize) {
    let sigma = Precision::new(precision).unwrap().standard_error();
    let m = 1usize << precision;
    let mut rng = StdRng::seed_from_u64(u64::from(precision));

    for load in LOAD_FACTORS {
        let n = (load * m as f64) as usize;
        let errors: Vec<f64> = (0..trials)
            .map(|_| {
                let mut sketch = Sketch::<WyHash>::with_precision(precision).unwrap();
                sketch.extend_hashes((0..n).map(|_| rng.gen::<u64>()));
                relative_error(sketch.estimate(), n)
            })
            .collect();

        let mean = errors.iter().sum::<f64>() / trials as f64;
        let max = errors.iter().copied().fold(0.0, f64::max);
        assert!(
            mean < 2.0 * sigma,
            "p = {}, n = {}: mean error {:.5} exceeds {:.5}",
            precision,
            n,
            mean,
            2.0 * sigma
        );
        assert!(
            max < 6.0 * sigma,
            "p = {}, n = {}: max error {:.5} exceeds {:.5}",
            precision,
            n,
            max,
            6.0 * sigma
        );
    }
}

#[test_case("NUM", 48)]
#[test_case("KNUM", 48)]
#[test_case("KNUM", 1293)]
#[test_case("M2NUM", 320)]
#[test_case("90NUM", 320)]
fn test_string_keys(prefix: &str, n: usize) {
    let mut sketch = Sketch::<WyHash>::new();
    for i in 0..n {
        sketch.insert(&format!("{}:{:08}", prefix, i));
    }
    let sigma = sketch.precision().standard_error();
    let error = relative_error(sketch.estimate(), n);
    assert!(error < 5.0 * sigma, "{} keys: error {:.5}", n, error);
}

#[test]
fn test_error_range_around_two_thousand() {
    let mut rng = StdRng::seed_from_u64(2000);
    let sigma = Precision::default().standard_error();
    for n in (1500..=2000).step_by(50) {
        let max = (0..TRIALS)
            .map(|_| {
                let prefix: String = (0..9)
                    .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
                    .collect();
                let mut sketch = Sketch::<WyHash>::new();
                for i in 0..n {
                    sketch.insert(&format!("{}:{:08}", prefix, i));
                }
                relative_error(sketch.estimate(), n)
            })
            .fold(0.0, f64::max);
        assert!(max < 5.0 * sigma, "n = {}: max error {:.5}", n, max);
    }
}

#[test]
fn test_estimate_grows_with_cardinality() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut sketch = Sketch::<WyHash>::with_precision(12).unwrap();
    let mut checkpoints = vec![sketch.estimate()];
    let mut n = 1;
    while n <= 1 << 20 {
        sketch.extend_hashes((0..n).map(|_| rng.gen::<u64>()));
        checkpoints.push(sketch.estimate());
        n *= 2;
    }
    // cardinality doubles between checkpoints
    assert!(checkpoints.windows(2).all(|w| w[0] < w[1]), "{:?}", checkpoints);
}
