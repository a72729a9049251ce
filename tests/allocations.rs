#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use hll_sketch::Sketch;
use hyperloglogplus::{HyperLogLog, HyperLogLogPlus};
use std::hash::BuildHasherDefault;
use tabled::{
    settings::{Settings, Style},
    Table, Tabled,
};
use wyhash::WyHash;

#[derive(Tabled)]
struct Record {
    cardinality: usize,
    hll_sketch: String,
    amadeus_streaming: String,
    probabilistic_collections: String,
    hyperloglog: String,
    hyperloglogplus: String,
}

fn measure_memory_usage<T>(
    cardinality: usize,
    create: impl Fn() -> T,
    insert: impl Fn(&mut T, &usize),
) -> (usize, usize, u64)
where
    T: Sized,
{
    let _profiler = dhat::Profiler::builder().testing().build();
    let mut estimator = create();
    for i in 0..cardinality {
        insert(&mut estimator, &i);
    }
    let stats = dhat::HeapStats::get();
    (
        std::mem::size_of::<T>(),
        stats.total_bytes as usize,
        stats.total_blocks,
    )
}

fn format_usage((size, bytes, blocks): (usize, usize, u64)) -> String {
    format!("{} / {} / {}", size, bytes, blocks)
}

#[test]
fn test_allocations() {
    let mut sketch_usages = Vec::new();
    let results: Vec<Record> = std::iter::once(0)
        .chain((0..).map(|c| 1 << c))
        .take_while(|&c| c <= 1 << 16)
        .map(|cardinality| {
            let usage = measure_memory_usage(
                cardinality,
                || Sketch::<WyHash>::with_precision(12).unwrap(),
                |est, i| est.insert(i),
            );
            // packed registers plus one padding word
            assert!(usage.1 >= 4096 * 6 / 8 + 4, "cardinality {}", cardinality);
            sketch_usages.push(usage);

            Record {
                cardinality,
                hll_sketch: format_usage(usage),
                amadeus_streaming: format_usage(measure_memory_usage(
                    cardinality,
                    || amadeus_streaming::HyperLogLog::new(0.01625),
                    |est, i| est.push(i),
                )),
                probabilistic_collections: format_usage(measure_memory_usage(
                    cardinality,
                    || probabilistic_collections::hyperloglog::HyperLogLog::<usize>::new(0.004),
                    |est, i| est.insert(i),
                )),
                hyperloglog: format_usage(measure_memory_usage(
                    cardinality,
                    || hyperloglog::HyperLogLog::new(0.004),
                    |est, i| est.insert(i),
                )),
                hyperloglogplus: format_usage(measure_memory_usage(
                    cardinality,
                    || {
                        HyperLogLogPlus::<usize, _>::new(
                            12,
                            BuildHasherDefault::<WyHash>::default(),
                        )
                        .unwrap()
                    },
                    |est, i| est.insert(i),
                )),
            }
        })
        .collect();

    // registers are allocated once at construction and never grow
    // (first measurement may include one-off logging callsite setup)
    assert!(sketch_usages[1..].windows(2).all(|w| w[0] == w[1]));

    let table_config = Settings::default().with(Style::markdown());
    let markdown = Table::new(results).with(table_config).to_string();
    println!("{}", markdown);
}
