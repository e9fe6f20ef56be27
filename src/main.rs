use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use scaling_report::config::RunScanConfig;
use scaling_report::model::{build_aggregate, build_mean_times};
use scaling_report::render::{self, Labels, Language, SerialAxis};
use scaling_report::runlog::{ConcurrencySelector, LogMetricExtractor};
use scaling_report::{Result, scan};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Parser)]
#[command(name = "scaling-report")]
#[command(about = "Mean time, speedup and efficiency from MPI/OpenMP run logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan node directories of run logs and report strong/weak scaling.
    Report {
        /// JSON scan config; flags below override its fields.
        #[arg(long)]
        config: Option<String>,

        #[arg(long)]
        base_dir: Option<String>,

        /// Node directories, e.g. 02_nodes,04_nodes
        #[arg(long, value_delimiter = ',')]
        nodes: Option<Vec<String>>,

        /// Run log file name inside each run directory.
        #[arg(long)]
        run_file: Option<String>,

        /// Header field used as concurrency.
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        #[arg(long, value_enum)]
        lang: Option<Language>,

        /// HTML report path.
        #[arg(short = 'o', long)]
        out: Option<String>,

        /// JSON dump of the aggregates.
        #[arg(long)]
        json: Option<String>,
    },

    /// Chart a serial sweep (serial_<cpus>_cpus/<mpi>.txt).
    Serial {
        #[arg(long, default_value = ".")]
        base_dir: String,

        #[arg(long, value_delimiter = ',', required = true)]
        dirs: Vec<String>,

        #[arg(long, value_enum, default_value_t = SerialAxis::Mpi)]
        by: SerialAxis,

        #[arg(long, value_enum, default_value_t = Language::En)]
        lang: Language,

        #[arg(short = 'o', long)]
        out: Option<String>,

        #[arg(long)]
        json: Option<String>,
    },
}

/// Command-line spelling of `ConcurrencySelector`.
#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// MPI process count (np=).
    Processes,
    /// OpenMP thread count (OMP_NUM_THREADS=).
    Threads,
}

impl From<Mode> for ConcurrencySelector {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Processes => ConcurrencySelector::Processes,
            Mode::Threads => ConcurrencySelector::Threads,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Report {
            config,
            base_dir,
            nodes,
            run_file,
            mode,
            lang,
            out,
            json,
        } => {
            // 1) Load config and apply overrides.
            let mut cfg = RunScanConfig::load(config.as_deref())?;
            if let Some(base_dir) = base_dir {
                cfg.base_dir = base_dir;
            }
            if let Some(nodes) = nodes {
                cfg.node_dirs = nodes;
            }
            if let Some(run_file) = run_file {
                cfg.run_file = run_file;
            }
            if let Some(mode) = mode {
                cfg.selector = mode.into();
            }
            if let Some(lang) = lang {
                cfg.language = lang;
            }
            let validated = cfg.validate_and_build()?;

            // 2) Scan + parse.
            let extractor = LogMetricExtractor::new(validated.selector)?;
            let set = scan::scan_node_groups(&validated, &extractor)?;

            // 3) Aggregate.
            let agg = build_aggregate(&set).context("compute scaling metrics")?;

            // 4) Present.
            let labels = Labels::new(validated.language);
            let key = validated.selector.header_key();
            print!(
                "{}",
                render::render_summary(&agg, key, |n| labels.node_group(n))
            );
            let charts = render::scaling_charts(&agg, &labels, validated.selector);
            if let Some(out) = out {
                let html = render::render_html_report(labels.report_title(), &charts)?;
                write_output(&out, &html)?;
            }
            if let Some(json) = json {
                write_json(&json, &agg)?;
            }
        }

        Commands::Serial {
            base_dir,
            dirs,
            by,
            lang,
            out,
            json,
        } => {
            let extractor = LogMetricExtractor::new(ConcurrencySelector::Processes)?;
            let set = scan::scan_serial_dirs(Path::new(&base_dir), &dirs, &extractor)?;
            let means = build_mean_times(&set).context("compute serial sweep means")?;

            let labels = Labels::new(lang);
            print!(
                "{}",
                render::render_mean_summary(&means, "mpi", |n| labels.cpu_group(n))
            );
            if let Some(out) = out {
                let chart = render::serial_chart(&means, &labels, by);
                let html = render::render_html_report(
                    labels.serial_report_title(),
                    std::slice::from_ref(&chart),
                )?;
                write_output(&out, &html)?;
            }
            if let Some(json) = json {
                write_json(&json, &means)?;
            }
        }
    }

    Ok(())
}

fn write_output(path: &str, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path))?;
    log::info!("Wrote {}", path);
    Ok(())
}

fn write_json(path: &str, value: &impl Serialize) -> Result<()> {
    write_output(path, &serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_flag_maps_to_selector() {
        let cli = Cli::try_parse_from(["scaling-report", "report", "--mode", "threads"]).unwrap();
        let Commands::Report { mode, .. } = cli.cmd else {
            panic!("expected report command");
        };
        assert_eq!(
            mode.map(ConcurrencySelector::from),
            Some(ConcurrencySelector::Threads)
        );
        assert_eq!(
            ConcurrencySelector::from(Mode::Processes),
            ConcurrencySelector::Processes
        );
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["scaling-report", "report", "--mode", "ppn"]).is_err());
    }
}
