use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::detection::types::UIComponent;
use crate::detection::Backend;
use crate::errors::{VisionError, VisionResult};

/// Fixed artifact name so downstream pipeline stages can locate the report
/// without discovery logic.
pub const REPORT_FILENAME: &str = "ui_components.json";

/// Input of the run, keyed by mode in the artifact (`"video"` or
/// `"input_dir"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportSource {
    #[serde(rename = "video")]
    Video(String),
    #[serde(rename = "input_dir")]
    InputDir(String),
}

/// The aggregate, ordered result of one run. Built incrementally by
/// `ReportBuilder`, written once, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionReport {
    #[serde(flatten)]
    pub source: ReportSource,
    pub backend: String,
    pub frames_processed: u64,
    pub ui_components: Vec<UIComponent>,
}

/// Accumulates per-frame detections in call order. Single-writer: owned by
/// the pipeline loop for the duration of one run.
pub struct ReportBuilder {
    report: DetectionReport,
}

impl ReportBuilder {
    pub fn start(source: ReportSource, backend: Backend) -> Self {
        Self {
            report: DetectionReport {
                source,
                backend: backend.as_str().to_string(),
                frames_processed: 0,
                ui_components: Vec::new(),
            },
        }
    }

    /// Count one frame and append its components, each tagged with
    /// `frame_id`. An empty `components` still counts the frame.
    pub fn record(&mut self, frame_id: &str, components: Vec<UIComponent>) {
        self.report.frames_processed += 1;
        for mut component in components {
            component.frame = Some(frame_id.to_string());
            self.report.ui_components.push(component);
        }
    }

    /// Finalized report. Idempotent: repeated calls return equal reports.
    pub fn finish(&self) -> DetectionReport {
        self.report.clone()
    }
}

/// Serialize `report` to `<output_dir>/ui_components.json` with 2-space
/// indentation. The full buffer is staged in a temp file in the same
/// directory and renamed into place, so no partial JSON ever lands.
pub fn write_report(report: &DetectionReport, output_dir: &Path) -> VisionResult<PathBuf> {
    std::fs::create_dir_all(output_dir).map_err(|e| VisionError::Write {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    let path = output_dir.join(REPORT_FILENAME);

    let mut buf = serde_json::to_vec_pretty(report)?;
    buf.push(b'\n');

    let mut staged = tempfile::NamedTempFile::new_in(output_dir).map_err(|e| VisionError::Write {
        path: path.clone(),
        source: e,
    })?;
    staged.write_all(&buf).map_err(|e| VisionError::Write {
        path: path.clone(),
        source: e,
    })?;
    staged.persist(&path).map_err(|e| VisionError::Write {
        path: path.clone(),
        source: e.error,
    })?;

    Ok(path)
}
