use crate::constants::DEFAULT_WIDTH;
use std::fmt;

/// Target output width for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionTarget {
    width: u32,
}

impl ConversionTarget {
    /// Any width `<= 0` (or too large to fit `u32`) falls back to 1280.
    pub fn new(width: i64) -> Self {
        let width = u32::try_from(width)
            .ok()
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_WIDTH);
        Self { width }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

impl Default for ConversionTarget {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

/// How one image is handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingStrategy {
    /// Encode at native resolution.
    PassThrough,
    /// Downscale to this width, height follows the aspect ratio.
    ResizeTo(u32),
}

impl fmt::Display for EncodingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingStrategy::PassThrough => write!(f, "native size"),
            EncodingStrategy::ResizeTo(width) => write!(f, "resize to {}px", width),
        }
    }
}

/// Images already at or below the target width pass through untouched.
pub fn plan(measured_width: u32, target: ConversionTarget) -> EncodingStrategy {
    if measured_width <= target.width() {
        EncodingStrategy::PassThrough
    } else {
        EncodingStrategy::ResizeTo(target.width())
    }
}
