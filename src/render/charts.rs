//! Chart series built from aggregates. The HTML template only draws them.

use crate::runlog::ConcurrencySelector;
use crate::model::{AggregateResult, ConfigStats, GroupAggregate, MeanTimes};
use crate::render::Labels;
use clap::ValueEnum;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    /// (x, y) pairs sorted by x.
    pub points: Vec<[f64; 2]>,
    pub dashed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

/// X axis of the serial sweep chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SerialAxis {
    /// One line per CPU count, x = MPI processes.
    #[default]
    Mpi,
    /// One line per MPI process count, x = CPUs.
    Cpus,
}

fn series_of(
    label: String,
    group: &GroupAggregate,
    value: impl Fn(&ConfigStats) -> f64,
) -> Series {
    Series {
        label,
        points: group
            .points
            .iter()
            .map(|(&c, stats)| [f64::from(c), value(stats)])
            .collect(),
        dashed: false,
    }
}

/// Mean time for all groups, speedup and efficiency per group, then the
/// weak-efficiency approximation for all groups.
pub fn scaling_charts(
    agg: &AggregateResult,
    labels: &Labels,
    selector: ConcurrencySelector,
) -> Vec<Chart> {
    let x_label = labels.concurrency_axis(selector).to_string();
    let mut charts = Vec::new();

    charts.push(Chart {
        title: labels.mean_time_title(selector).to_string(),
        x_label: x_label.clone(),
        y_label: labels.mean_time_axis().to_string(),
        series: agg
            .groups
            .values()
            .map(|g| series_of(labels.node_group(g.node_count), g, |s| s.mean_time))
            .collect(),
    });

    for group in agg.groups.values() {
        let mut ideal = series_of(labels.ideal().to_string(), group, |s| s.ideal_speedup);
        ideal.dashed = true;

        charts.push(Chart {
            title: labels.speedup_title(group.node_count),
            x_label: x_label.clone(),
            y_label: labels.speedup_axis().to_string(),
            series: vec![
                series_of(labels.node_group(group.node_count), group, |s| s.speedup),
                ideal,
            ],
        });
        charts.push(Chart {
            title: labels.efficiency_title(group.node_count),
            x_label: x_label.clone(),
            y_label: labels.efficiency_axis().to_string(),
            series: vec![series_of(
                labels.node_group(group.node_count),
                group,
                |s| s.efficiency,
            )],
        });
    }

    charts.push(Chart {
        title: labels.weak_efficiency_title().to_string(),
        x_label,
        y_label: labels.weak_efficiency_axis().to_string(),
        series: agg
            .groups
            .values()
            .map(|g| series_of(labels.node_group(g.node_count), g, |s| s.weak_efficiency))
            .collect(),
    });

    charts
}

/// Execution time of a serial sweep, where node groups are CPU counts and
/// concurrency is the MPI process count.
pub fn serial_chart(means: &MeanTimes, labels: &Labels, axis: SerialAxis) -> Chart {
    match axis {
        SerialAxis::Mpi => Chart {
            title: labels.serial_by_mpi_title().to_string(),
            x_label: labels.mpi_count_axis().to_string(),
            y_label: labels.serial_time_axis().to_string(),
            series: means
                .groups
                .iter()
                .map(|(&cpus, points)| Series {
                    label: labels.cpu_group(cpus),
                    points: points
                        .iter()
                        .map(|(&mpi, p)| [f64::from(mpi), p.mean_time])
                        .collect(),
                    dashed: false,
                })
                .collect(),
        },
        SerialAxis::Cpus => {
            let all_mpi: BTreeSet<u32> = means
                .groups
                .values()
                .flat_map(|points| points.keys().copied())
                .collect();

            let series = all_mpi
                .into_iter()
                .map(|mpi| Series {
                    label: labels.mpi_group(mpi),
                    points: means
                        .groups
                        .iter()
                        .filter_map(|(&cpus, points)| {
                            points.get(&mpi).map(|p| [f64::from(cpus), p.mean_time])
                        })
                        .collect(),
                    dashed: false,
                })
                .collect();

            Chart {
                title: labels.serial_by_cpu_title().to_string(),
                x_label: labels.cpu_count_axis().to_string(),
                y_label: labels.serial_time_axis().to_string(),
                series,
            }
        }
    }
}
