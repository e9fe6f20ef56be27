use crate::runlog::ConcurrencySelector;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

/// Axis labels, titles and legend entries in one language.
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    language: Language,
}

impl Labels {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn pick(&self, en: &'static str, pt: &'static str) -> &'static str {
        match self.language {
            Language::En => en,
            Language::Pt => pt,
        }
    }

    pub fn report_title(&self) -> &'static str {
        self.pick("Scaling report", "Relatório de escalabilidade")
    }

    pub fn serial_report_title(&self) -> &'static str {
        self.pick("Serial sweep", "Varredura serial")
    }

    pub fn concurrency_axis(&self, selector: ConcurrencySelector) -> &'static str {
        match selector {
            ConcurrencySelector::Processes => self.pick(
                "np (number of MPI processes)",
                "np (número de processos MPI)",
            ),
            ConcurrencySelector::Threads => self.pick(
                "OMP_NUM_THREADS (number of OpenMP threads)",
                "OMP_NUM_THREADS (número de threads OpenMP)",
            ),
        }
    }

    pub fn mean_time_title(&self, selector: ConcurrencySelector) -> &'static str {
        match selector {
            ConcurrencySelector::Processes => self.pick(
                "Execution Time vs MPI Processes",
                "Tempo de Execução vs Processos MPI",
            ),
            ConcurrencySelector::Threads => self.pick(
                "Execution Time vs OpenMP Threads",
                "Tempo de Execução vs Threads OpenMP",
            ),
        }
    }

    pub fn mean_time_axis(&self) -> &'static str {
        self.pick("Mean execution time (s)", "Tempo médio de execução (s)")
    }

    pub fn speedup_axis(&self) -> &'static str {
        "Speedup"
    }

    pub fn efficiency_axis(&self) -> &'static str {
        self.pick("Efficiency", "Eficiência")
    }

    pub fn weak_efficiency_axis(&self) -> &'static str {
        self.pick("Weak scaling efficiency", "Eficiência de escalabilidade fraca")
    }

    pub fn weak_efficiency_title(&self) -> &'static str {
        self.pick(
            "Weak Scaling Efficiency (approx.)",
            "Eficiência de Escalabilidade Fraca (aprox.)",
        )
    }

    pub fn ideal(&self) -> &'static str {
        "Ideal"
    }

    pub fn node_group(&self, nodes: u32) -> String {
        format!("{} {}", nodes, self.pick("nodes", "nós"))
    }

    pub fn speedup_title(&self, nodes: u32) -> String {
        format!(
            "{} - {}",
            self.pick("Speedup (Strong Scaling)", "Speedup (Escalabilidade Forte)"),
            self.node_group(nodes)
        )
    }

    pub fn efficiency_title(&self, nodes: u32) -> String {
        format!(
            "{} - {}",
            self.pick("Parallel Efficiency", "Eficiência Paralela"),
            self.node_group(nodes)
        )
    }

    pub fn serial_time_axis(&self) -> &'static str {
        self.pick("Execution time (seconds)", "Tempo de execução (segundos)")
    }

    pub fn mpi_count_axis(&self) -> &'static str {
        self.pick("MPI process count", "Número de processos MPI")
    }

    pub fn cpu_count_axis(&self) -> &'static str {
        self.pick("CPU count", "Número de CPUs")
    }

    pub fn serial_by_mpi_title(&self) -> &'static str {
        self.pick(
            "Execution time vs MPI process count",
            "Tempo de execução vs número de processos MPI",
        )
    }

    pub fn serial_by_cpu_title(&self) -> &'static str {
        self.pick(
            "Execution time vs CPU count",
            "Tempo de execução vs número de CPUs",
        )
    }

    pub fn cpu_group(&self, cpus: u32) -> String {
        format!("{} CPUs", cpus)
    }

    pub fn mpi_group(&self, procs: u32) -> String {
        format!("{} {}", procs, self.pick("MPI processes", "processos MPI"))
    }
}
