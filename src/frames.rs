use std::path::PathBuf;

use crate::errors::{VisionError, VisionResult};
use crate::report::ReportSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// A still image extracted upstream from the recording.
    Image,
    /// A whole video treated as one logical unit; frame extraction is the
    /// upstream collaborator's job, not ours.
    VideoUnit,
}

/// One unit of work for a detection strategy. Immutable once produced.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Position in source order, 0-based.
    pub index: usize,
    /// Identifier the report tags components with: the filename in
    /// directory mode, the full path in video mode.
    pub id: String,
    pub path: PathBuf,
    pub kind: FrameKind,
}

/// Where the frames of one run come from.
#[derive(Debug, Clone)]
pub enum FrameSource {
    Video(PathBuf),
    Directory(PathBuf),
}

impl FrameSource {
    /// Resolve the ordered frame sequence. Read-only filesystem scan; no
    /// image decoding happens here.
    ///
    /// Directory mode lists files matching `extension` sorted
    /// lexicographically by filename and fails with `EmptyInput` when none
    /// match. Video mode yields exactly one `VideoUnit` frame, failing with
    /// an IO error if the file is not accessible.
    pub fn resolve(&self, extension: &str) -> VisionResult<Vec<Frame>> {
        match self {
            Self::Video(path) => {
                std::fs::metadata(path)?;
                Ok(vec![Frame {
                    index: 0,
                    id: path.display().to_string(),
                    path: path.clone(),
                    kind: FrameKind::VideoUnit,
                }])
            }
            Self::Directory(dir) => {
                let mut entries: Vec<(String, PathBuf)> = Vec::new();
                for entry in std::fs::read_dir(dir)? {
                    let entry = entry?;
                    let path = entry.path();
                    if !path.is_file() {
                        continue;
                    }
                    let matches = path
                        .extension()
                        .map(|ext| ext.eq_ignore_ascii_case(extension))
                        .unwrap_or(false);
                    if !matches {
                        continue;
                    }
                    let name = entry.file_name().to_string_lossy().into_owned();
                    entries.push((name, path));
                }

                if entries.is_empty() {
                    return Err(VisionError::EmptyInput(dir.clone()));
                }
                entries.sort_by(|a, b| a.0.cmp(&b.0));

                Ok(entries
                    .into_iter()
                    .enumerate()
                    .map(|(index, (name, path))| Frame {
                        index,
                        id: name,
                        path,
                        kind: FrameKind::Image,
                    })
                    .collect())
            }
        }
    }

    pub fn report_source(&self) -> ReportSource {
        match self {
            Self::Video(path) => ReportSource::Video(path.display().to_string()),
            Self::Directory(dir) => ReportSource::InputDir(dir.display().to_string()),
        }
    }
}
