//! Aggregation model: samples keyed by run configuration, means, and scaling
//! curves derived from them.

pub mod aggregate;
pub mod error;
pub mod measurements;
pub mod scaling;

pub use aggregate::{
    AggregateResult, ConfigStats, GroupAggregate, MeanPoint, MeanTimes, build_aggregate,
    build_mean_times,
};
pub use error::MetricError;
pub use measurements::{MeasurementSet, RunConfiguration, mean};
pub use scaling::{StrongScaling, compute_scaling, compute_weak_efficiency, ideal_speedup};
