use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "webp-batch",
    about = "Batch-convert images to WebP with cwebp",
    long_about = "webp-batch converts a single image, or every BMP/JPEG/PNG/WebP file in a directory, \
                  into WebP. Images wider than the target width are downscaled by cwebp, narrower ones \
                  are encoded at their native size. Results land in a 'converted' directory next to the input.",
    version,
    after_help = "EXAMPLES:\n  \
    webp-batch                      Convert all images in the current directory to 1280px-wide WebP\n  \
    webp-batch ./scans -w 1920\n  \
    webp-batch photo.jpg --cwebp /opt/libwebp/bin/cwebp"
)]
pub struct Args {
    #[arg(
        value_name = "FILE|DIR",
        help = "File or directory to search and process image files (default: current directory)"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'w',
        long,
        value_name = "POSITIVE_INTEGER",
        default_value_t = 1280,
        allow_negative_numbers = true,
        help = "Width of output WebP image in pixels",
        long_help = "Width of output WebP image in pixels. \
                     Will set to 1280 if 0 or a negative value is provided."
    )]
    pub width: i64,

    #[arg(
        long,
        value_name = "PATH",
        env = "WEBP_BATCH_CWEBP",
        help = "Path to the cwebp executable (default: search PATH)"
    )]
    pub cwebp: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        env = "WEBP_BATCH_MAGICK",
        help = "Path to the ImageMagick 'magick' executable (default: search PATH)"
    )]
    pub magick: Option<PathBuf>,

    #[arg(short = 'q', long, conflicts_with = "verbose", help = "Only print errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Print the measured width and chosen strategy per file")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["webp-batch"]).unwrap();
        assert_eq!(args.input, None);
        assert_eq!(args.width, 1280);
        assert!(!args.quiet);
    }

    #[test]
    fn test_negative_width_is_accepted() {
        let args = Args::try_parse_from(["webp-batch", "photos", "-w", "-5"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("photos")));
        assert_eq!(args.width, -5);
    }

    #[test]
    fn test_non_numeric_width_is_rejected() {
        assert!(Args::try_parse_from(["webp-batch", "--width", "wide"]).is_err());
    }
}
