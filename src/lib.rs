pub mod logger;

pub mod batch;
pub mod cli;
pub mod constants;
pub mod encoder;
pub mod error;
pub mod inspector;
pub mod natural;
pub mod planner;
pub mod process;
pub mod progress;
pub mod resolver;
pub mod tools;
pub mod utils;

pub use batch::{BatchConverter, BatchResult, ConversionJob, FailedItem};
pub use error::{ConvertError, Result};
pub use inspector::ImageInspector;
pub use natural::{natural_cmp, sort_paths};
pub use planner::{plan, ConversionTarget, EncodingStrategy};
pub use process::{ProcessOutput, ProcessRunner, SystemRunner};
pub use progress::{ConsoleReporter, ProgressReporter, SilentReporter};
pub use resolver::{output_directory_for, parent_directory_of, resolve_inputs};
pub use tools::{require_tools, PathLocator, ToolLocator, Toolchain};
pub use utils::is_image_file;
