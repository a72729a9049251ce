#![no_main]

use hll_sketch::{Sketch, MAX_PRECISION, MIN_PRECISION};
use libfuzzer_sys::fuzz_target;
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let precision = MIN_PRECISION + data[0] % (MAX_PRECISION - MIN_PRECISION + 1);
    let split_index = wyhash(data, 0) as usize % data.len();
    let (first_half, second_half) = data.split_at(split_index);

    let mut sketch1: Sketch = Sketch::with_precision(precision).unwrap();
    for chunk in first_half.chunks(8) {
        let mut buf = [0u8; 8];
        buf[..chunk.len()].copy_from_slice(chunk);
        sketch1.insert_hash(u64::from_le_bytes(buf));
        let estimate = sketch1.estimate();
        assert!(estimate > 0.0 && estimate.is_finite());
    }

    let mut sketch2: Sketch = Sketch::with_precision(precision).unwrap();
    for chunk in second_half.chunks(4) {
        sketch2.insert(&chunk);
        assert!(sketch2.estimate() > 0.0);
    }

    sketch1.merge(&sketch2).unwrap();
    let merged = sketch1.estimate();
    assert!(merged > 0.0 && merged.is_finite());

    let mut reversed = sketch2.clone();
    reversed.merge(&sketch1).unwrap();
    assert_eq!(reversed, sketch1);
});
