use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};

use realty_pipeline::infrastructure::reports::{
    CLEANED_FILE, DUPLICATE_FILE, ERROR_FILE, STATS_FILE,
};
use realty_pipeline::{CleaningPipeline, PipelineConfig, ReportWriter, Result};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("Usage: realty-pipeline <input.csv> [output-dir]");
            return Err(realty_pipeline::AppError::ValidationError(
                "missing input file argument".to_string(),
            ));
        }
    };

    let mut config = PipelineConfig::load()?;
    if let Some(output_dir) = args.next() {
        config.output_dir = output_dir;
    }

    let writer = ReportWriter::new(&config.output_dir);
    let pipeline = CleaningPipeline::new(config);

    // A read failure aborts here, before any output file is touched
    let report = pipeline.run_file(&input)?;
    writer.write_all(&report)?;

    info!(
        cleaned = %writer.path_of(CLEANED_FILE).display(),
        errors = %writer.path_of(ERROR_FILE).display(),
        duplicates = %writer.path_of(DUPLICATE_FILE).display(),
        stats = %writer.path_of(STATS_FILE).display(),
        "reports written"
    );

    Ok(())
}
