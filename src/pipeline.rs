/// Run pipeline — frame resolution, backend selection, sequential per-frame
/// detection, aggregation and the final report write.
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::detection::select_backend;
use crate::errors::{VisionError, VisionResult};
use crate::report::{write_report, DetectionReport, ReportBuilder};

pub enum RunOutcome {
    /// Report written; the artifact lives at `path`.
    Written {
        path: PathBuf,
        report: DetectionReport,
    },
    /// The frame source matched nothing. Not an error: the run ends with a
    /// diagnostic and no artifact.
    NoFrames { searched: PathBuf },
}

/// Run one full pass:
///
/// 1. Select the detection strategy (fatal on an unknown backend, before any
///    filesystem work).
/// 2. Resolve the ordered frame sequence.
/// 3. Detect on each frame in source order. A per-frame failure is contained:
///    the frame is recorded with zero components and still counted.
/// 4. Finish the report and write it atomically.
pub async fn run(config: &RunConfig) -> VisionResult<RunOutcome> {
    let strategy = select_backend(&config.backend, &config.pipeline)?;

    let frames = match config.source.resolve(&config.pipeline.frame_extension) {
        Ok(frames) => frames,
        Err(VisionError::EmptyInput(dir)) => {
            tracing::warn!(dir = %dir.display(), "no frames matched — nothing to do");
            return Ok(RunOutcome::NoFrames { searched: dir });
        }
        Err(e) => return Err(e),
    };
    tracing::info!(
        frames = frames.len(),
        backend = %strategy.backend(),
        "processing frames"
    );

    let mut builder = ReportBuilder::start(config.source.report_source(), strategy.backend());
    for frame in &frames {
        match strategy.detect(frame).await {
            Ok(components) => {
                tracing::debug!(frame = %frame.id, count = components.len(), "frame detections");
                builder.record(&frame.id, components);
            }
            Err(e) => {
                tracing::warn!(frame = %frame.id, error = %e, "detection failed; recording empty frame");
                builder.record(&frame.id, Vec::new());
            }
        }
    }

    let report = builder.finish();
    let path = write_report(&report, &config.output_dir)?;
    tracing::info!(
        path = %path.display(),
        frames = report.frames_processed,
        components = report.ui_components.len(),
        "report written"
    );

    Ok(RunOutcome::Written { path, report })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PipelineConfig, SamplingConfig};
    use crate::frames::FrameSource;
    use crate::report::REPORT_FILENAME;

    fn frame_dir(count: u32) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for i in 1..=count {
            let path = dir.path().join(format!("frame_{:04}.jpg", i));
            image::RgbImage::new(64, 48).save(&path).unwrap();
        }
        dir
    }

    fn run_config(backend: &str, source: FrameSource, output_dir: PathBuf) -> RunConfig {
        RunConfig {
            backend: backend.to_string(),
            source,
            output_dir,
            pipeline: PipelineConfig::default(),
        }
    }

    #[tokio::test]
    async fn ten_frames_paddle_flags_the_fifth_and_tenth() {
        let frames = frame_dir(10);
        let out = tempfile::tempdir().unwrap();
        let config = run_config(
            "paddle",
            FrameSource::Directory(frames.path().to_path_buf()),
            out.path().to_path_buf(),
        );

        let outcome = run(&config).await.unwrap();
        let RunOutcome::Written { path, report } = outcome else {
            panic!("expected a written report");
        };

        assert_eq!(report.frames_processed, 10);
        assert_eq!(report.ui_components.len(), 2);
        assert_eq!(
            report.ui_components[0].frame.as_deref(),
            Some("frame_0005.jpg")
        );
        assert_eq!(
            report.ui_components[1].frame.as_deref(),
            Some("frame_0010.jpg")
        );
        assert!(path.ends_with(REPORT_FILENAME));
        assert!(path.exists());
    }

    #[tokio::test]
    async fn corrupt_frame_is_counted_with_zero_components() {
        let frames = frame_dir(5);
        // replace the sampled frame with garbage so detection fails on it
        std::fs::write(frames.path().join("frame_0005.jpg"), b"garbage").unwrap();
        let out = tempfile::tempdir().unwrap();
        let config = run_config(
            "omniparser",
            FrameSource::Directory(frames.path().to_path_buf()),
            out.path().to_path_buf(),
        );

        let RunOutcome::Written { report, .. } = run(&config).await.unwrap() else {
            panic!("expected a written report");
        };
        assert_eq!(report.frames_processed, 5);
        assert!(report.ui_components.is_empty());
    }

    #[tokio::test]
    async fn empty_directory_writes_nothing() {
        let frames = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let config = run_config(
            "paddle",
            FrameSource::Directory(frames.path().to_path_buf()),
            out.path().to_path_buf(),
        );

        let outcome = run(&config).await.unwrap();
        assert!(matches!(outcome, RunOutcome::NoFrames { .. }));
        assert!(!out.path().join(REPORT_FILENAME).exists());
    }

    #[tokio::test]
    async fn unknown_backend_aborts_before_output() {
        let frames = frame_dir(1);
        let out = tempfile::tempdir().unwrap();
        let config = run_config(
            "tesseract",
            FrameSource::Directory(frames.path().to_path_buf()),
            out.path().to_path_buf(),
        );

        let result = run(&config).await;
        assert!(matches!(result, Err(VisionError::UnknownBackend(_))));
        assert!(!out.path().join(REPORT_FILENAME).exists());
    }

    #[tokio::test]
    async fn video_mode_is_one_logical_unit() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("session.mp4");
        std::fs::write(&video, b"mock recording").unwrap();
        let out = tempfile::tempdir().unwrap();
        let config = run_config(
            "omniparser",
            FrameSource::Video(video),
            out.path().to_path_buf(),
        );

        let RunOutcome::Written { report, .. } = run(&config).await.unwrap() else {
            panic!("expected a written report");
        };
        assert_eq!(report.frames_processed, 1);
        assert_eq!(report.ui_components.len(), 1);
    }

    #[tokio::test]
    async fn interval_override_changes_sampling() {
        let frames = frame_dir(4);
        let out = tempfile::tempdir().unwrap();
        let mut config = run_config(
            "paddle",
            FrameSource::Directory(frames.path().to_path_buf()),
            out.path().to_path_buf(),
        );
        config.pipeline.sampling = SamplingConfig {
            sample_interval: 2,
            min_confidence: 0.0,
        };

        let RunOutcome::Written { report, .. } = run(&config).await.unwrap() else {
            panic!("expected a written report");
        };
        assert_eq!(report.frames_processed, 4);
        assert_eq!(report.ui_components.len(), 2);
    }
}
