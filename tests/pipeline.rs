use pretty_assertions::assert_eq;
use scaling_report::model::{MeasurementSet, MetricError, build_aggregate};
use scaling_report::render::{Labels, Language, render_summary};
use scaling_report::runlog::{ConcurrencySelector, LogMetricExtractor, split_blocks};

const RUN_A: &str = "\
Loading input...
mpirun: 4 slots

np=1, OMP_NUM_THREADS=4, ppn=1
Total execution time: 10.000

np=2, OMP_NUM_THREADS=4, ppn=1
Total execution time: 6.000

np=4, OMP_NUM_THREADS=4, ppn=2
Segmentation fault
";

const RUN_B: &str = "\
np=4, OMP_NUM_THREADS=4, ppn=2
Total execution time: 3.000

np=2, OMP_NUM_THREADS=4, ppn=1
Total execution time: 6.000
";

#[test]
fn text_to_summary() {
    let ex = LogMetricExtractor::new(ConcurrencySelector::Processes).unwrap();
    let mut set = MeasurementSet::new();
    for run in [RUN_A, RUN_B] {
        set.accumulate(&ex, split_blocks(run), 2);
    }

    let agg = build_aggregate(&set).unwrap();
    let labels = Labels::new(Language::En);
    let summary = render_summary(&agg, "np", |n| labels.node_group(n));

    assert_eq!(
        summary,
        "=== 2 nodes ===\n  \
         np=1: 1 runs, mean=10.000000, speedup=1.00, efficiency=1.00\n  \
         np=2: 2 runs, mean=6.000000, speedup=1.67, efficiency=0.83\n  \
         np=4: 1 runs, mean=3.000000, speedup=3.33, efficiency=0.83\n\n"
    );
}

#[test]
fn thread_mode_groups_by_omp_threads() {
    let ex = LogMetricExtractor::new(ConcurrencySelector::Threads).unwrap();
    let mut set = MeasurementSet::new();
    set.accumulate(&ex, split_blocks(RUN_A), 4);
    set.accumulate(&ex, split_blocks(RUN_B), 4);

    let agg = build_aggregate(&set).unwrap();
    let group = &agg.groups[&4];
    assert_eq!(group.points.keys().copied().collect::<Vec<_>>(), vec![4]);
    assert_eq!(group.points[&4].runs, 4);
    assert_eq!(group.points[&4].mean_time, 6.25);
}

#[test]
fn zero_time_base_is_reported() {
    let ex = LogMetricExtractor::new(ConcurrencySelector::Processes).unwrap();
    let mut set = MeasurementSet::new();
    set.accumulate(
        &ex,
        split_blocks("np=1\nTotal execution time: 0.0\n\nnp=2\nTotal execution time: 1.0"),
        8,
    );

    let err = build_aggregate(&set).unwrap_err();
    let MetricError::InGroup { node_count, source } = err else {
        panic!("expected a node group error");
    };
    assert_eq!(node_count, 8);
    assert_eq!(
        *source,
        MetricError::DegenerateMeasurement {
            concurrency: 1,
            mean: 0.0
        }
    );
}

#[test]
fn vanishing_time_does_not_leak_infinity() {
    let ex = LogMetricExtractor::new(ConcurrencySelector::Processes).unwrap();
    let tiny = format!("0.{}1", "0".repeat(319));
    let log = format!(
        "np=1\nTotal execution time: 1000.0\n\nnp=2\nTotal execution time: {}",
        tiny
    );
    let mut set = MeasurementSet::new();
    assert_eq!(set.accumulate(&ex, split_blocks(&log), 2), 2);

    let err = build_aggregate(&set).unwrap_err();
    let MetricError::InGroup { source, .. } = err else {
        panic!("expected a node group error");
    };
    assert!(matches!(
        *source,
        MetricError::DegenerateMeasurement { concurrency: 2, .. }
    ));
}
