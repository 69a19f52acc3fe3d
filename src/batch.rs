use crate::encoder::EncoderSettings;
use crate::error::{ConvertError, Result};
use crate::inspector::ImageInspector;
use crate::planner::{plan, ConversionTarget, EncodingStrategy};
use crate::process::ProcessRunner;
use crate::progress::ProgressReporter;
use crate::tools::Toolchain;
use crate::utils::output_path_for;
use crate::verbose;
use std::fs;
use std::path::{Path, PathBuf};

/// One planned conversion, alive only while its encoder runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub source: PathBuf,
    pub output: PathBuf,
    pub strategy: EncodingStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    pub path: PathBuf,
    pub detail: String,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    pub output_dir: PathBuf,
    pub succeeded: usize,
    pub failed: Vec<FailedItem>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Drives probe -> plan -> encode for each file, strictly one after another.
pub struct BatchConverter<'a, R: ProcessRunner> {
    runner: &'a R,
    reporter: &'a dyn ProgressReporter,
    tools: Toolchain,
    settings: EncoderSettings,
}

impl<'a, R: ProcessRunner> BatchConverter<'a, R> {
    pub fn new(runner: &'a R, reporter: &'a dyn ProgressReporter, tools: Toolchain) -> Self {
        Self {
            runner,
            reporter,
            tools,
            settings: EncoderSettings::default(),
        }
    }

    /// Convert `files` in order into `output_dir`.
    ///
    /// The output directory is created first, even for an empty list.
    /// A failed encode is recorded and the run moves on; a failed probe aborts
    /// the whole run with `ConvertError::ProbeFailure`.
    pub fn run(
        &self,
        files: &[PathBuf],
        target: ConversionTarget,
        output_dir: &Path,
    ) -> Result<BatchResult> {
        fs::create_dir_all(output_dir).map_err(|source| ConvertError::DirectoryCreationFailed {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let mut result = BatchResult {
            output_dir: output_dir.to_path_buf(),
            ..Default::default()
        };

        if files.is_empty() {
            self.reporter.warning("There is no image file to process.");
            return Ok(result);
        }

        let inspector = ImageInspector::new(self.runner, &self.tools.prober);
        let total = files.len();
        self.reporter.begin(total);

        for (idx, file) in files.iter().enumerate() {
            self.reporter.item_started(idx + 1, total, file);

            let width = match inspector.width_of(file) {
                Ok(width) => width,
                Err(e) => {
                    self.reporter.aborted();
                    return Err(e);
                }
            };
            let job = ConversionJob {
                source: file.clone(),
                output: output_path_for(file, output_dir),
                strategy: plan(width, target),
            };
            verbose!("{}: {}px wide, {}", file.display(), width, job.strategy);

            match self.encode(&job) {
                Ok(()) => {
                    result.succeeded += 1;
                    self.reporter.item_finished(file);
                }
                Err(ConvertError::EncodeFailure { path, detail }) => {
                    self.reporter.item_failed(&path, &detail);
                    result.failed.push(FailedItem { path, detail });
                }
                Err(e) => {
                    self.reporter.aborted();
                    return Err(e);
                }
            }
        }

        self.reporter.finish(&result);
        Ok(result)
    }

    /// Run cwebp for one job; any failure comes back as `ConvertError::EncodeFailure`.
    fn encode(&self, job: &ConversionJob) -> Result<()> {
        let args = self.settings.args(job.strategy, &job.output, &job.source);
        let failed = |detail: String| ConvertError::EncodeFailure {
            path: job.source.clone(),
            detail,
        };

        let output = self
            .runner
            .run(self.tools.encoder.as_os_str(), &args)
            .map_err(|e| failed(e.to_string()))?;

        if output.success() {
            Ok(())
        } else {
            Err(failed(output.diagnostic()))
        }
    }
}
