//! Extraction of measured metrics from simulator result reports.

use std::path::Path;

use log::debug;
use xmltree::Element;

use crate::error::ParseError;
use crate::xml::{child_text, find_descendant, parse_file};

/// Tag of the element holding host-side flow metrics.
const HOST_FLOW_TAG: &str = "Host.IO_Flow";
/// Tag of the element holding device-side stream metrics.
const DEVICE_STREAM_TAG: &str = "SSDDevice.IO_Stream";

/// Metrics measured by one simulation run.
///
/// Each metric keeps the raw field text from the report. A metric whose
/// element is missing from the report is `None`, reports are read
/// best-effort rather than validated against a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultMetrics {
    /// Base name of the result file the metrics were read from.
    pub scenario_file: String,
    /// Average device response time in microseconds.
    pub device_response_time: Option<String>,
    /// Average read transaction turnaround time in nanoseconds.
    pub avg_read_latency: Option<String>,
    /// Average write transaction turnaround time in nanoseconds.
    pub avg_write_latency: Option<String>,
    /// Total I/O operations per second.
    pub iops: Option<String>,
    /// Read I/O operations per second.
    pub iops_read: Option<String>,
    /// Write I/O operations per second.
    pub iops_write: Option<String>,
}

impl ResultMetrics {
    /// Reads metrics from the result report at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let root = parse_file(path)?;
        let scenario_file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("Extracting metrics from {}", path.display());
        Ok(Self::extract(&root, scenario_file))
    }

    fn extract(root: &Element, scenario_file: String) -> Self {
        let host_flow = find_descendant(root, HOST_FLOW_TAG);
        let device_stream = find_descendant(root, DEVICE_STREAM_TAG);
        Self {
            scenario_file,
            device_response_time: host_flow.and_then(|el| child_text(el, "Device_Response_Time")),
            avg_read_latency: device_stream
                .and_then(|el| child_text(el, "Average_Read_Transaction_Turnaround_Time")),
            avg_write_latency: device_stream
                .and_then(|el| child_text(el, "Average_Write_Transaction_Turnaround_Time")),
            iops: host_flow.and_then(|el| child_text(el, "IOPS")),
            iops_read: host_flow.and_then(|el| child_text(el, "IOPS_Read")),
            iops_write: host_flow.and_then(|el| child_text(el, "IOPS_Write")),
        }
    }
}
