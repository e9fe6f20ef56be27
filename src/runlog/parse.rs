use crate::model::RunConfiguration;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

/// Execution time of one run, in seconds.
pub type ExecutionTime = f64;

// Header variants seen in run logs:
//   np=8
//   np=8, OMP_NUM_THREADS=4
//   np=8, OMP_NUM_THREADS=4, ppn=2
const HEADER_RE: &str = r"np=(\d+)(?:,\s*OMP_NUM_THREADS=(\d+))?(?:,\s*ppn=(\d+))?";

// Strict decimal: no sign, no exponent, at least one fractional digit.
const TIME_RE: &str = r"Total execution time:\s*([0-9]+\.[0-9]+)";

/// Which header field counts as the concurrency of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcurrencySelector {
    /// MPI process count (`np=`).
    #[default]
    Processes,
    /// OpenMP thread count (`OMP_NUM_THREADS=`).
    Threads,
}

impl ConcurrencySelector {
    /// Header key as it appears in the logs; also used in summaries.
    pub fn header_key(self) -> &'static str {
        match self {
            ConcurrencySelector::Processes => "np",
            ConcurrencySelector::Threads => "OMP_NUM_THREADS",
        }
    }

    fn capture_index(self) -> usize {
        match self {
            ConcurrencySelector::Processes => 1,
            ConcurrencySelector::Threads => 2,
        }
    }
}

/// Turns raw run-log blocks into (configuration, execution time) samples.
///
/// Compiled once per scan; parsing itself never fails loudly. A block that
/// lacks a header, lacks a time statement, or carries an unparsable number
/// yields `None` and is dropped by the caller.
#[derive(Debug, Clone)]
pub struct LogMetricExtractor {
    header: Regex,
    time: Regex,
    selector: ConcurrencySelector,
}

impl LogMetricExtractor {
    pub fn new(selector: ConcurrencySelector) -> anyhow::Result<Self> {
        Ok(Self {
            header: Regex::new(HEADER_RE)?,
            time: Regex::new(TIME_RE)?,
            selector,
        })
    }

    /// Parse one block into a sample for the caller-supplied node group.
    ///
    /// Both the header and the time statement must be present in the same
    /// block; the first match of each is used.
    pub fn parse_block(
        &self,
        text: &str,
        node_count: u32,
    ) -> Option<(RunConfiguration, ExecutionTime)> {
        let header = self.header.captures(text)?;
        let concurrency = self.concurrency(&header)?;
        let execution_time = self.parse_execution_time(text)?;

        Some((
            RunConfiguration {
                node_count,
                concurrency,
            },
            execution_time,
        ))
    }

    /// Find the first `Total execution time:` statement in `text`.
    pub fn parse_execution_time(&self, text: &str) -> Option<ExecutionTime> {
        let caps = self.time.captures(text)?;
        let value: f64 = caps.get(1)?.as_str().parse().ok()?;
        // Absurdly long digit runs overflow to infinity.
        value.is_finite().then_some(value)
    }

    fn concurrency(&self, header: &Captures<'_>) -> Option<u32> {
        let value: u32 = header
            .get(self.selector.capture_index())?
            .as_str()
            .parse()
            .ok()?;
        (value > 0).then_some(value)
    }
}
