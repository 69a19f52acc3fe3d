use crate::constants::{ENCODER_METHOD, ENCODER_PASSES, ENCODER_PRESET, ENCODER_QUALITY};
use crate::planner::EncodingStrategy;
use std::ffi::OsString;
use std::path::Path;

/// Fixed cwebp tuning shared by every job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderSettings {
    pub preset: &'static str,
    pub quality: u8,
    pub method: u8,
    pub passes: u8,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            preset: ENCODER_PRESET,
            quality: ENCODER_QUALITY,
            method: ENCODER_METHOD,
            passes: ENCODER_PASSES,
        }
    }
}

impl EncoderSettings {
    /// Build the cwebp argument vector for one image.
    ///
    /// `-resize <w> 0` lets cwebp derive the height from the aspect ratio.
    /// The input goes after `--` so names starting with `-` are not read as flags.
    pub fn args(&self, strategy: EncodingStrategy, output: &Path, input: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-preset".into(),
            self.preset.into(),
            "-q".into(),
            self.quality.to_string().into(),
            "-m".into(),
            self.method.to_string().into(),
            "-pass".into(),
            self.passes.to_string().into(),
        ];

        if let EncodingStrategy::ResizeTo(width) = strategy {
            args.push("-resize".into());
            args.push(width.to_string().into());
            args.push("0".into());
        }

        args.push("-mt".into());
        args.push("-quiet".into());
        args.push("-o".into());
        args.push(output.as_os_str().to_os_string());
        args.push("--".into());
        args.push(input.as_os_str().to_os_string());
        args
    }
}
