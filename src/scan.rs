//! Filesystem side of a scan: find run logs and feed them to the extractor.
//!
//! Layouts:
//!   <base>/<NN_nodes>/<run>/<run_file>     blocks of "np=..." + timing
//!   <base>/serial_<NN>_cpus/<mpi>.txt     one timing statement per file

use crate::Result;
use crate::config::{ValidatedScan, count_from_name};
use crate::runlog::{LogMetricExtractor, split_blocks};
use crate::model::{MeasurementSet, RunConfiguration};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Scan every configured node directory. Missing directories are skipped
/// with a warning and leave no group behind.
pub fn scan_node_groups(
    scan: &ValidatedScan,
    extractor: &LogMetricExtractor,
) -> Result<MeasurementSet> {
    let mut set = MeasurementSet::new();

    for group in &scan.groups {
        let node_path = scan.base_dir.join(&group.dir_name);
        if !node_path.is_dir() {
            log::warn!("Skipping missing directory: {}", group.dir_name);
            continue;
        }
        let group_set = scan_group(&node_path, group.node_count, &scan.run_file, extractor)?;
        if group_set.is_empty() {
            log::warn!("no timed runs found under {}", node_path.display());
        }
        set.merge(group_set);
    }

    Ok(set)
}

fn scan_group(
    node_path: &Path,
    node_count: u32,
    run_file: &str,
    extractor: &LogMetricExtractor,
) -> Result<MeasurementSet> {
    let mut set = MeasurementSet::new();

    // Runs are visited in name order so sample order is reproducible.
    for run_path in sorted_entries(node_path)? {
        let log_path = run_path.join(run_file);
        if !log_path.is_file() {
            continue;
        }
        let content = fs::read_to_string(&log_path)
            .with_context(|| format!("read run log {}", log_path.display()))?;
        let added = set.accumulate(extractor, split_blocks(&content), node_count);
        log::debug!("{}: {} samples", log_path.display(), added);
    }

    Ok(set)
}

/// Scan serial sweep directories (`serial_<cpus>_cpus/<mpi>.txt`).
///
/// Each file contributes the first timing statement it contains, keyed by
/// CPU count (as the node group) and MPI process count.
pub fn scan_serial_dirs(
    base_dir: &Path,
    dirs: &[String],
    extractor: &LogMetricExtractor,
) -> Result<MeasurementSet> {
    let mut set = MeasurementSet::new();

    for dir_name in dirs {
        let Some(cpu_count) = count_from_name(dir_name) else {
            log::warn!("Skipping directory without a CPU count: {}", dir_name);
            continue;
        };
        let dir = base_dir.join(dir_name);
        if !dir.is_dir() {
            log::warn!("Skipping missing directory: {}", dir_name);
            continue;
        }

        for path in sorted_entries(&dir)? {
            if path.extension().and_then(|e| e.to_str()) != Some("txt") || !path.is_file() {
                continue;
            }
            let Some(mpi_procs) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u32>().ok())
                .filter(|&n| n > 0)
            else {
                log::warn!("Skipping {}: file name is not a process count", path.display());
                continue;
            };

            let content = fs::read_to_string(&path)
                .with_context(|| format!("read serial log {}", path.display()))?;
            match extractor.parse_execution_time(&content) {
                Some(time) => set.record(
                    RunConfiguration {
                        node_count: cpu_count,
                        concurrency: mpi_procs,
                    },
                    time,
                ),
                None => log::warn!(
                    "No time found in {} inside {}",
                    path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default(),
                    dir_name
                ),
            }
        }
    }

    Ok(set)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("list directory {}", dir.display()))? {
        out.push(entry?.path());
    }
    out.sort();
    Ok(out)
}
