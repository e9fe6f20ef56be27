//! Final per-group statistics handed to the presentation layer.

use crate::model::{
    MeasurementSet, MetricError, compute_scaling, compute_weak_efficiency, ideal_speedup,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigStats {
    pub runs: usize,
    pub mean_time: f64,
    pub speedup: f64,
    pub ideal_speedup: f64,
    pub efficiency: f64,
    /// Approximation; see `compute_weak_efficiency`.
    pub weak_efficiency: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAggregate {
    pub node_count: u32,
    pub base_concurrency: u32,
    /// Keyed by concurrency, ascending.
    pub points: BTreeMap<u32, ConfigStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    /// Keyed by node count, ascending.
    pub groups: BTreeMap<u32, GroupAggregate>,
}

/// Run count and mean time of one configuration, without scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeanPoint {
    pub runs: usize,
    pub mean_time: f64,
}

/// Mean times per node group and concurrency. Used where only raw times are
/// charted (serial sweeps), so zero times are accepted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MeanTimes {
    /// node count -> concurrency -> point, both ascending.
    pub groups: BTreeMap<u32, BTreeMap<u32, MeanPoint>>,
}

pub fn build_mean_times(set: &MeasurementSet) -> Result<MeanTimes, MetricError> {
    let mut groups: BTreeMap<u32, BTreeMap<u32, MeanPoint>> = BTreeMap::new();
    for (config, mean_time) in set.compute_means()? {
        let runs = set.samples(&config).map_or(0, <[f64]>::len);
        groups
            .entry(config.node_count)
            .or_default()
            .insert(config.concurrency, MeanPoint { runs, mean_time });
    }
    Ok(MeanTimes { groups })
}

/// Derive means and scaling metrics for every node group in one pass.
///
/// Fails on the first group whose means cannot be scaled; nothing partial is
/// returned.
pub fn build_aggregate(set: &MeasurementSet) -> Result<AggregateResult, MetricError> {
    let mut groups = BTreeMap::new();

    for node_count in set.node_counts() {
        let group = build_group(set, node_count)
            .map_err(|e| MetricError::in_group(node_count, e))?;
        groups.insert(node_count, group);
    }

    Ok(AggregateResult { groups })
}

fn build_group(set: &MeasurementSet, node_count: u32) -> Result<GroupAggregate, MetricError> {
    let means = set.group_means(node_count)?;
    let strong = compute_scaling(&means)?;
    let weak = compute_weak_efficiency(&means)?;

    let mut points = BTreeMap::new();
    for (config, samples) in set.iter().filter(|(c, _)| c.node_count == node_count) {
        let c = config.concurrency;
        // All maps were built from the same key set.
        let (Some(&mean_time), Some(&speedup), Some(&efficiency), Some(&weak_efficiency)) = (
            means.get(&c),
            strong.speedup.get(&c),
            strong.efficiency.get(&c),
            weak.get(&c),
        ) else {
            return Err(MetricError::empty(format!("no statistics for concurrency {c}")));
        };

        points.insert(
            c,
            ConfigStats {
                runs: samples.len(),
                mean_time,
                speedup,
                ideal_speedup: ideal_speedup(c, strong.base),
                efficiency,
                weak_efficiency,
            },
        );
    }

    Ok(GroupAggregate {
        node_count,
        base_concurrency: strong.base,
        points,
    })
}
