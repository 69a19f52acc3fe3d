use anyhow::Context;
use clap::Parser;
use std::env;
use std::process::ExitCode;
use webp_batch::batch::BatchConverter;
use webp_batch::cli::Args;
use webp_batch::logger;
use webp_batch::planner::ConversionTarget;
use webp_batch::process::SystemRunner;
use webp_batch::progress::ConsoleReporter;
use webp_batch::resolver::{output_directory_for, resolve_inputs};
use webp_batch::tools::{require_tools, PathLocator};
use webp_batch::{error, verbose};

fn main() -> ExitCode {
    let args = Args::parse();
    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let input = match args.input {
        Some(input) => input,
        None => env::current_dir().context("Failed to read the current directory")?,
    };

    let files = resolve_inputs(&input)?;
    let output_dir = output_directory_for(&input)?;
    let tools = require_tools(&PathLocator, args.cwebp.as_deref(), args.magick.as_deref())?;
    verbose!("Encoder: {}", tools.encoder.display());
    verbose!("Prober: {}", tools.prober.display());

    let target = ConversionTarget::new(args.width);
    let reporter = ConsoleReporter::new();
    let converter = BatchConverter::new(&SystemRunner, &reporter, tools);
    converter.run(&files, target, &output_dir)?;

    Ok(())
}
