//! Log parsing for benchmark run output (`saida` files and serial sweeps).

pub mod block;
pub mod parse;

pub use block::split_blocks;
pub use parse::{ConcurrencySelector, ExecutionTime, LogMetricExtractor};
