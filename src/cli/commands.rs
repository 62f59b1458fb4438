use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::error::Result;
use crate::processors::Pipeline;
use crate::readers::source_from_spec;
use crate::settings::MapSettings;
use crate::utils::filename::generate_default_output_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{
    legend_bands, GeoJsonDocument, LeafletDocument, MapDocument, MemorySurface, RejectionWriter,
};
use std::fs::File;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, Level};

pub async fn run(cli: Cli) -> Result<()> {
    let Cli {
        command,
        verbose,
        log_file,
        config,
    } = cli;

    init_logging(verbose, log_file.as_deref())?;

    match command {
        Commands::Render {
            source,
            output_file,
            format,
            center_lat,
            center_lng,
            zoom,
        } => {
            let settings = MapSettings::load(config.as_deref())?
                .with_overrides(center_lat, center_lng, zoom)?;
            let output_file = output_file
                .unwrap_or_else(|| generate_default_output_filename(format.extension()));

            println!("Rendering point data...");
            println!("Source: {}", source);
            println!("Output file: {}", output_file.display());

            let data_source = source_from_spec(&source);
            let pipeline = Pipeline::new(settings);
            let mut document: Box<dyn MapDocument> = match format {
                OutputFormat::Html => Box::new(LeafletDocument::new(pipeline.settings())),
                OutputFormat::Geojson => Box::new(GeoJsonDocument::new(pipeline.settings())),
            };

            let progress = ProgressReporter::new_spinner("Fetching data...", quiet_terminal());
            let report = pipeline
                .run(data_source.as_ref(), document.as_mut(), Some(&progress))
                .await?;

            println!("\n{}", report.summary());

            document.write_file(&output_file)?;
            println!("Map written to {}", output_file.display());
        }

        Commands::Validate { source, report } => {
            let settings = MapSettings::load(config.as_deref())?;

            println!("Validating point data...");
            println!("Source: {}", source);

            let data_source = source_from_spec(&source);
            let pipeline = Pipeline::new(settings);
            let mut surface = MemorySurface::new();

            let progress = ProgressReporter::new_spinner("Fetching data...", quiet_terminal());
            let pipeline_report = pipeline
                .run(data_source.as_ref(), &mut surface, Some(&progress))
                .await?;

            println!("\n{}", pipeline_report.summary());

            if pipeline_report.rejections.is_empty() {
                println!("✅ All rows have valid coordinates");
            } else {
                println!(
                    "⚠️  Found {} rows with invalid coordinates",
                    pipeline_report.rejected()
                );
                for rejection in &pipeline_report.rejections {
                    println!("  {}", rejection);
                }
            }

            if let Some(path) = report {
                RejectionWriter::new().write_file(&pipeline_report.rejections, &path)?;
                println!("Rejection report written to {}", path.display());
            }
        }

        Commands::Legend => {
            println!("Value Range");
            for band in legend_bands() {
                println!(
                    "{:>6}  {:<16} {}",
                    band.label(),
                    band.color.to_string(),
                    band.color.to_hex()
                );
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    // A subscriber may already be installed (e.g. by an embedding test harness)
    if let Err(e) = installed {
        debug!("Keeping existing tracing subscriber: {}", e);
    }

    Ok(())
}

/// Spinners only make sense when stderr is a terminal.
fn quiet_terminal() -> bool {
    !std::io::stderr().is_terminal()
}
