//! Parse MPI/OpenMP benchmark run logs and derive mean time, speedup and
//! parallel efficiency per node group.
//!
//! `runlog` and `model` are pure: they take text and return numbers.
//! `scan` reads directories and `render` produces charts and summaries.

pub mod config;
pub mod model;
pub mod render;
pub mod runlog;
pub mod scan;

pub type Result<T> = anyhow::Result<T>;
