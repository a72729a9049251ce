use hll_sketch::{Precision, Sketch};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let precision = Precision::from_error_rate(0.01).expect("valid error rate");

    let mut sketch1: Sketch = Sketch::from_precision(precision);
    for i in 0..10_000 {
        sketch1.insert(&i);
    }
    println!("sketch1 estimate = {:.1} ({:?})", sketch1.estimate(), sketch1);

    let mut sketch2: Sketch = Sketch::from_precision(precision);
    for i in 5_000..60_000 {
        sketch2.insert(&i);
    }
    println!("sketch2 estimate = {:.1} ({:?})", sketch2.estimate(), sketch2);

    sketch1.merge(&sketch2).expect("same precision");
    println!("merged estimate = {:.1} ({:?})", sketch1.estimate(), sketch1);
}
