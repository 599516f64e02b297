use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use sleepchart_rs::logger;
use sleepchart_rs::sleep_chart::{ExtractionConfig, SleepStageExtractor};
use sleepchart_rs::sleep_chart::config::{DEFAULT_GRID_SPACING_MINUTES, DEFAULT_REM_SEARCH_HEIGHT};
use sleepchart_rs::sleep_chart::report::{self, DEFAULT_REPORT_LIMIT};

use tracing::{debug, error, info};

/// Extract sleep stages from a rendered hypnogram chart
#[derive(Parser, Debug)]
#[clap(name = "sleepchart")]
#[clap(about = "Extract sleep stages from image charts")]
struct Args {
    /// Path to the input chart image
    image_path: PathBuf,

    /// Minutes between two adjacent vertical gridlines
    #[clap(long, default_value_t = DEFAULT_GRID_SPACING_MINUTES)]
    grid_spacing: f64,

    /// Rows above the baseline searched for the REM bar
    #[clap(long, default_value_t = DEFAULT_REM_SEARCH_HEIGHT)]
    rem_search_height: u32,

    /// Maximum number of stage changes to print
    #[clap(long, default_value_t = DEFAULT_REPORT_LIMIT)]
    limit: usize,
}

fn main() -> ExitCode {
    logger::init();

    let args = Args::parse();
    debug!(?args, "Parsed arguments");

    let config = ExtractionConfig::builder()
        .grid_spacing_minutes(args.grid_spacing)
        .rem_search_height(args.rem_search_height)
        .build();
    let extractor = SleepStageExtractor::new(config);

    info!("Grid spacing: {} min", extractor.config().grid_spacing_minutes);
    info!("REM search height: {} rows", extractor.config().rem_search_height);

    match extractor.extract_file(&args.image_path) {
        Ok(timeline) => {
            print!("{}", report::render(&args.image_path, &timeline, args.limit));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Extraction failed: {}", e);
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
