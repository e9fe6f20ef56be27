use crate::runlog::{ExecutionTime, LogMetricExtractor};
use crate::model::MetricError;
use serde::Serialize;
use std::collections::BTreeMap;

/// One experiment configuration: the node group a run belongs to and the
/// concurrency (processes or threads) it ran with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RunConfiguration {
    pub node_count: u32,
    pub concurrency: u32,
}

/// Execution-time samples per configuration, in run order.
///
/// Every entry holds at least one sample: entries are only created by
/// `record`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementSet {
    samples: BTreeMap<RunConfiguration, Vec<ExecutionTime>>,
}

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, config: RunConfiguration, time: ExecutionTime) {
        self.samples.entry(config).or_default().push(time);
    }

    /// Parse every block and record each successful sample under
    /// `node_count`. Returns how many samples were added.
    pub fn accumulate<I, S>(
        &mut self,
        extractor: &LogMetricExtractor,
        blocks: I,
        node_count: u32,
    ) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for block in blocks {
            let block = block.as_ref();
            match extractor.parse_block(block, node_count) {
                Some((config, time)) => {
                    self.record(config, time);
                    added += 1;
                }
                None => log::trace!("dropping block without header/time: {:?}", block),
            }
        }
        added
    }

    /// Fold another set into this one, appending samples after ours.
    pub fn merge(&mut self, other: MeasurementSet) {
        for (config, times) in other.samples {
            self.samples.entry(config).or_default().extend(times);
        }
    }

    pub fn samples(&self, config: &RunConfiguration) -> Option<&[ExecutionTime]> {
        self.samples.get(config).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RunConfiguration, &[ExecutionTime])> {
        self.samples.iter().map(|(c, v)| (c, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Node groups present, ascending.
    pub fn node_counts(&self) -> Vec<u32> {
        let mut out: Vec<u32> = self.samples.keys().map(|c| c.node_count).collect();
        out.dedup();
        out
    }

    /// Arithmetic mean per configuration.
    pub fn compute_means(&self) -> Result<BTreeMap<RunConfiguration, f64>, MetricError> {
        self.samples
            .iter()
            .map(|(config, times)| Ok((*config, mean(times)?)))
            .collect()
    }

    /// Means of one node group keyed by concurrency.
    pub fn group_means(&self, node_count: u32) -> Result<BTreeMap<u32, f64>, MetricError> {
        self.samples
            .iter()
            .filter(|(config, _)| config.node_count == node_count)
            .map(|(config, times)| Ok((config.concurrency, mean(times)?)))
            .collect()
    }
}

pub fn mean(samples: &[f64]) -> Result<f64, MetricError> {
    if samples.is_empty() {
        return Err(MetricError::empty("mean of zero samples"));
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}
