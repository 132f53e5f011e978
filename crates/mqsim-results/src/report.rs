//! Flattened report rows and CSV serialization.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::error::ParseError;
use crate::results::ResultMetrics;
use crate::workload::{read_workload_file, Scenario, ScenarioParams};

/// Report column names, in output order.
const HEADER: [&str; 14] = [
    "Scenario_ID",
    "Scenario_File",
    "Type",
    "Read_Percentage",
    "Queue_Depth",
    "Seed",
    "Trace_File",
    "Percentage_To_Be_Executed",
    "Device_Response_Time(us)",
    "Avg_Read_Latency(ns)",
    "Avg_Write_Latency(ns)",
    "IOPS",
    "IOPS_Read",
    "IOPS_Write",
];

/// One row of the summary report.
///
/// Field order matches [`HEADER`]; absent values serialize as empty fields.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Scenario_ID")]
    pub scenario_id: Option<usize>,
    #[serde(rename = "Scenario_File")]
    pub scenario_file: String,
    #[serde(rename = "Type")]
    pub scenario_type: Option<String>,
    #[serde(rename = "Read_Percentage")]
    pub read_percentage: Option<String>,
    #[serde(rename = "Queue_Depth")]
    pub queue_depth: Option<String>,
    #[serde(rename = "Seed")]
    pub seed: Option<String>,
    #[serde(rename = "Trace_File")]
    pub trace_file: Option<String>,
    #[serde(rename = "Percentage_To_Be_Executed")]
    pub percentage_to_be_executed: Option<String>,
    #[serde(rename = "Device_Response_Time(us)")]
    pub device_response_time: Option<String>,
    #[serde(rename = "Avg_Read_Latency(ns)")]
    pub avg_read_latency: Option<String>,
    #[serde(rename = "Avg_Write_Latency(ns)")]
    pub avg_write_latency: Option<String>,
    #[serde(rename = "IOPS")]
    pub iops: Option<String>,
    #[serde(rename = "IOPS_Read")]
    pub iops_read: Option<String>,
    #[serde(rename = "IOPS_Write")]
    pub iops_write: Option<String>,
}

impl ReportRow {
    /// Creates a row carrying only the measured metrics.
    pub fn from_metrics(metrics: ResultMetrics) -> Self {
        Self {
            scenario_file: metrics.scenario_file,
            device_response_time: metrics.device_response_time,
            avg_read_latency: metrics.avg_read_latency,
            avg_write_latency: metrics.avg_write_latency,
            iops: metrics.iops,
            iops_read: metrics.iops_read,
            iops_write: metrics.iops_write,
            ..Default::default()
        }
    }

    /// Fills the scenario columns from `scenario`.
    ///
    /// The metric columns are left untouched, the two field sets are
    /// disjoint by name.
    pub fn apply_scenario(&mut self, scenario: &Scenario) {
        self.scenario_id = Some(scenario.id);
        self.scenario_type = scenario.params.as_ref().map(|p| p.kind().to_string());
        match &scenario.params {
            Some(ScenarioParams::Synthetic {
                read_percentage,
                queue_depth,
                seed,
            }) => {
                self.read_percentage = read_percentage.clone();
                self.queue_depth = queue_depth.clone();
                self.seed = seed.clone();
            }
            Some(ScenarioParams::Trace {
                trace_file,
                percentage_to_be_executed,
            }) => {
                self.trace_file = trace_file.clone();
                self.percentage_to_be_executed = percentage_to_be_executed.clone();
            }
            None => {}
        }
    }
}

/// Builds one report row per result file, in the order given.
///
/// The workload file is parsed once, then the i-th result file (1-based) is
/// matched with the i-th scenario. Rows past the scenario count keep their
/// scenario columns empty. The first file that fails to parse aborts the
/// whole batch.
pub fn build_report<P: AsRef<Path>>(
    workload_path: impl AsRef<Path>,
    result_paths: &[P],
) -> Result<Vec<ReportRow>, ParseError> {
    let scenarios = read_workload_file(workload_path)?;
    if scenarios.len() != result_paths.len() {
        // Correspondence is positional, so a count mismatch silently leaves
        // the extra scenarios or result files unmatched.
        warn!(
            "Workload defines {} scenarios but {} result files were given",
            scenarios.len(),
            result_paths.len()
        );
    }

    let mut rows = Vec::with_capacity(result_paths.len());
    for (idx, result_path) in result_paths.iter().enumerate() {
        let metrics = ResultMetrics::from_file(result_path)?;
        let mut row = ReportRow::from_metrics(metrics);
        if let Some(scenario) = scenarios.get(idx) {
            row.apply_scenario(scenario);
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Writes the report as CSV with a fixed header to `writer`.
pub fn write_report<W: Write>(writer: W, rows: &[ReportRow]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the report to a CSV file at `path`.
pub fn save_report(path: impl AsRef<Path>, rows: &[ReportRow]) -> Result<(), csv::Error> {
    let path = path.as_ref();
    write_report(File::create(path)?, rows)?;
    info!("Saved report with {} rows to {}", rows.len(), path.display());
    Ok(())
}
