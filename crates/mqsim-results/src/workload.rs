//! Extraction of per-scenario parameters from workload definitions.

use std::path::Path;

use log::info;
use xmltree::{Element, XMLNode};

use crate::error::ParseError;
use crate::xml::{child_text, parse_file};

/// Tag of a scenario entry.
const SCENARIO_TAG: &str = "IO_Scenario";
/// Tag of the synthetic parameter set inside a scenario.
const SYNTHETIC_TAG: &str = "IO_Flow_Parameter_Set_Synthetic";
/// Tag of the trace-based parameter set inside a scenario.
const TRACE_TAG: &str = "IO_Flow_Parameter_Set_Trace_Based";

/// Parameters of one I/O scenario, keyed by how the scenario generates its
/// requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioParams {
    /// Parametrically generated workload.
    Synthetic {
        read_percentage: Option<String>,
        queue_depth: Option<String>,
        seed: Option<String>,
    },
    /// Workload replayed from a captured trace.
    Trace {
        trace_file: Option<String>,
        percentage_to_be_executed: Option<String>,
    },
}

impl ScenarioParams {
    /// Scenario type name as it appears in the report.
    pub fn kind(&self) -> &'static str {
        match self {
            ScenarioParams::Synthetic { .. } => "Synthetic",
            ScenarioParams::Trace { .. } => "Trace",
        }
    }
}

/// One scenario entry from a workload definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// 1-based position of the scenario in the workload file.
    pub id: usize,
    /// Scenario parameters, or `None` when the entry carries no parameter set.
    pub params: Option<ScenarioParams>,
}

/// Reads all scenario entries from the workload file at `path`.
///
/// Scenario elements are collected from anywhere in the tree in document
/// order, which defines their 1-based ids and thereby the positional
/// correspondence with result files.
pub fn read_workload_file(path: impl AsRef<Path>) -> Result<Vec<Scenario>, ParseError> {
    let path = path.as_ref();
    let root = parse_file(path)?;
    let mut scenarios = Vec::new();
    collect_scenarios(&root, &mut scenarios);
    info!("Read {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

fn collect_scenarios(el: &Element, out: &mut Vec<Scenario>) {
    if el.name == SCENARIO_TAG {
        out.push(Scenario {
            id: out.len() + 1,
            params: extract_params(el),
        });
    }
    for child in el.children.iter().filter_map(XMLNode::as_element) {
        collect_scenarios(child, out);
    }
}

// The synthetic parameter set wins if a scenario carries both kinds.
fn extract_params(scenario: &Element) -> Option<ScenarioParams> {
    if let Some(synthetic) = scenario.get_child(SYNTHETIC_TAG) {
        return Some(ScenarioParams::Synthetic {
            read_percentage: child_text(synthetic, "Read_Percentage"),
            queue_depth: child_text(synthetic, "Average_No_of_Reqs_in_Queue"),
            seed: child_text(synthetic, "Seed"),
        });
    }
    if let Some(trace) = scenario.get_child(TRACE_TAG) {
        return Some(ScenarioParams::Trace {
            trace_file: child_text(trace, "File_Path"),
            percentage_to_be_executed: child_text(trace, "Percentage_To_Be_Executed"),
        });
    }
    None
}
