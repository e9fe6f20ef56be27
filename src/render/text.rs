use crate::model::{AggregateResult, MeanTimes};

/// Console summary: one section per group, one line per concurrency.
///
/// `key` is the header key printed before each concurrency ("np", ...).
pub fn render_summary(
    agg: &AggregateResult,
    key: &str,
    group_label: impl Fn(u32) -> String,
) -> String {
    let mut out = String::new();
    for group in agg.groups.values() {
        out.push_str(&format!("=== {} ===\n", group_label(group.node_count)));
        for (c, s) in &group.points {
            out.push_str(&format!(
                "  {}={}: {} runs, mean={:.6}, speedup={:.2}, efficiency={:.2}\n",
                key, c, s.runs, s.mean_time, s.speedup, s.efficiency
            ));
        }
        out.push('\n');
    }
    out
}

/// Console summary of mean times only.
pub fn render_mean_summary(
    means: &MeanTimes,
    key: &str,
    group_label: impl Fn(u32) -> String,
) -> String {
    let mut out = String::new();
    for (&node_count, points) in &means.groups {
        out.push_str(&format!("=== {} ===\n", group_label(node_count)));
        for (c, p) in points {
            out.push_str(&format!(
                "  {}={}: {} runs, mean={:.6}\n",
                key, c, p.runs, p.mean_time
            ));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MeasurementSet, RunConfiguration, build_aggregate, build_mean_times};
    use crate::render::{Labels, Language};
    use pretty_assertions::assert_eq;

    #[test]
    fn summary_lines() {
        let mut set = MeasurementSet::new();
        for (c, t) in [(1, 10.0), (1, 10.0), (2, 6.0), (4, 3.0)] {
            set.record(
                RunConfiguration {
                    node_count: 2,
                    concurrency: c,
                },
                t,
            );
        }
        let agg = build_aggregate(&set).unwrap();
        let labels = Labels::new(Language::En);

        let text = render_summary(&agg, "np", |n| labels.node_group(n));
        assert_eq!(
            text,
            "=== 2 nodes ===\n\
             \x20 np=1: 2 runs, mean=10.000000, speedup=1.00, efficiency=1.00\n\
             \x20 np=2: 1 runs, mean=6.000000, speedup=1.67, efficiency=0.83\n\
             \x20 np=4: 1 runs, mean=3.000000, speedup=3.33, efficiency=0.83\n\n"
        );
    }

    #[test]
    fn mean_summary_has_no_scaling_columns() {
        let mut set = MeasurementSet::new();
        for (c, t) in [(1, 0.0), (2, 4.5)] {
            set.record(
                RunConfiguration {
                    node_count: 2,
                    concurrency: c,
                },
                t,
            );
        }
        let means = build_mean_times(&set).unwrap();
        let labels = Labels::new(Language::En);

        let text = render_mean_summary(&means, "mpi", |n| labels.cpu_group(n));
        assert_eq!(
            text,
            "=== 2 CPUs ===\n  \
             mpi=1: 1 runs, mean=0.000000\n  \
             mpi=2: 1 runs, mean=4.500000\n\n"
        );
    }
}
