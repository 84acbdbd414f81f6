use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::config::{load_pipeline_config, RunConfig};
use crate::errors::{VisionError, VisionResult};
use crate::frames::FrameSource;

#[derive(Parser, Debug)]
#[command(name = "vision_processor", version, about = "Vision Processor")]
#[command(group(ArgGroup::new("source").required(true).args(["input", "input_dir"])))]
pub struct Args {
    /// Processing backend: omniparser (GPU) or paddle (CPU OCR)
    #[arg(long)]
    pub backend: String,

    /// Input video file
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Directory of pre-extracted frame images
    #[arg(long = "input_dir")]
    pub input_dir: Option<PathBuf>,

    /// Output directory for ui_components.json
    #[arg(long)]
    pub output: PathBuf,

    /// Optional TOML file overriding the sampling policy
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn into_run_config(self) -> VisionResult<RunConfig> {
        let pipeline = load_pipeline_config(self.config.as_deref())?;
        // clap's arg group guarantees exactly one of the two is present
        let source = match (self.input, self.input_dir) {
            (Some(video), _) => FrameSource::Video(video),
            (None, Some(dir)) => FrameSource::Directory(dir),
            (None, None) => {
                return Err(VisionError::Config(
                    "either --input or --input_dir is required".into(),
                ))
            }
        };
        Ok(RunConfig {
            backend: self.backend,
            source,
            output_dir: self.output,
            pipeline,
        })
    }
}
