//! Scan configuration (scan.json) plus command-line overrides.
//!
//! JSON shape (every field optional):
//! {
//!   "base_dir": ".",
//!   "node_dirs": ["02_nodes", "04_nodes"],
//!   "run_file": "saida",
//!   "selector": "processes",      // or "threads"
//!   "language": "en"              // or "pt"
//! }
//!
//! Node counts come from the first run of digits in each directory name
//! ("02_nodes" => 2, "serial_16_cpus" => 16).

use crate::Result;
use crate::runlog::ConcurrencySelector;
use crate::render::Language;
use anyhow::{Context, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunScanConfig {
    pub base_dir: String,
    pub node_dirs: Vec<String>,
    pub run_file: String,
    pub selector: ConcurrencySelector,
    pub language: Language,
}

impl Default for RunScanConfig {
    fn default() -> Self {
        Self {
            base_dir: ".".to_string(),
            node_dirs: ["02_nodes", "04_nodes", "06_nodes", "08_nodes"]
                .into_iter()
                .map(String::from)
                .collect(),
            run_file: "saida".to_string(),
            selector: ConcurrencySelector::default(),
            language: Language::default(),
        }
    }
}

/// One node directory and the node count it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeGroup {
    pub dir_name: String,
    pub node_count: u32,
}

/// Validated scan settings, ready for the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedScan {
    pub base_dir: PathBuf,
    pub groups: Vec<NodeGroup>,
    pub run_file: String,
    pub selector: ConcurrencySelector,
    pub language: Language,
}

impl RunScanConfig {
    /// Read a JSON config file, or fall back to defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text =
            fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
        serde_json::from_str(&text).with_context(|| format!("parse config file {}", path))
    }

    /// Check node directories and resolve their node counts.
    pub fn validate_and_build(&self) -> Result<ValidatedScan> {
        if self.node_dirs.is_empty() {
            bail!("no node directories configured");
        }
        if self.run_file.trim().is_empty() {
            bail!("run file name must not be empty");
        }

        let mut seen: BTreeMap<u32, &str> = BTreeMap::new();
        let mut groups = Vec::new();
        for dir_name in &self.node_dirs {
            let node_count = count_from_name(dir_name).with_context(|| {
                format!("node directory {:?} has no positive integer in its name", dir_name)
            })?;
            if let Some(prev) = seen.insert(node_count, dir_name.as_str()) {
                if prev == dir_name {
                    bail!("duplicate node directory: {}", dir_name);
                }
                bail!(
                    "node directories {} and {} both map to {} nodes",
                    prev,
                    dir_name,
                    node_count
                );
            }
            groups.push(NodeGroup {
                dir_name: dir_name.clone(),
                node_count,
            });
        }

        Ok(ValidatedScan {
            base_dir: PathBuf::from(&self.base_dir),
            groups,
            run_file: self.run_file.clone(),
            selector: self.selector,
            language: self.language,
        })
    }
}

/// First run of ASCII digits in `name`, if it is a positive `u32`.
pub fn count_from_name(name: &str) -> Option<u32> {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().filter(|&n| n > 0)
}
