/// Arithmetic failures while turning samples into scaling metrics.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MetricError {
    /// No samples where at least one is required. Unreachable through
    /// `MeasurementSet::record`; kept as a consistency check.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A zero, negative or non-finite mean time would poison every ratio
    /// derived from it.
    #[error("degenerate measurement: mean time {mean} at concurrency {concurrency}")]
    DegenerateMeasurement { concurrency: u32, mean: f64 },

    #[error("concurrency must be positive")]
    ZeroConcurrency,

    #[error("node group {node_count}")]
    InGroup {
        node_count: u32,
        #[source]
        source: Box<MetricError>,
    },
}

impl MetricError {
    pub fn empty(what: impl Into<String>) -> Self {
        Self::EmptyInput(what.into())
    }

    pub fn in_group(node_count: u32, source: MetricError) -> Self {
        Self::InGroup {
            node_count,
            source: Box::new(source),
        }
    }
}
