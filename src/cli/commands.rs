use tracing::{error, info};

use crate::analyzers::RecordAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::processors::RecordPipeline;
use crate::readers::WeatherReader;
use crate::utils::filename::generate_default_chart_filename;
use crate::utils::progress::ProgressReporter;
use crate::writers::{ChartLabels, ChartWriter, SeriesWriter};

pub fn run(cli: Cli) -> Result<()> {
    let result = execute(&cli);
    if let Err(ref e) = result {
        error!(kind = e.kind(), "Run failed: {}", e);
    }
    result
}

fn execute(cli: &Cli) -> Result<()> {
    let config = PipelineConfig::load(cli.config.as_deref(), &cli.overrides())?;
    let pipeline = RecordPipeline::from_config(&config)?;
    info!(
        "Comparing {} against {} for {}",
        config.comparison_year,
        pipeline.windows().baseline_label(),
        config.location
    );

    let progress = ProgressReporter::new_spinner("Reading station record...", cli.quiet);
    let raw = WeatherReader::new().read_readings(&cli.input)?;

    match cli.selected_command() {
        Commands::Render {
            output: output_path,
            series_output,
            width,
            height,
        } => {
            let output = pipeline.run(&raw, Some(&progress))?;
            progress.stage("Rendering chart...");

            let chart_path =
                output_path.unwrap_or_else(|| generate_default_chart_filename(config.comparison_year));
            let labels = ChartLabels::new(&output.windows, &config.location);
            ChartWriter::new()
                .with_size(width, height)
                .write_chart(&output.prepared, &labels, &chart_path)?;

            if let Some(path) = series_output {
                SeriesWriter::new().write_series(&output.prepared, &path)?;
                println!("Series written to {}", path.display());
            }

            progress.finish_with_message("Analysis complete");

            let summary = RecordAnalyzer::new().analyze(&output, &config.location);
            println!("\n{}", output.stats.summary());
            println!("\n{}", summary.summary());
            println!("\nChart written to {}", chart_path.display());
        }

        Commands::Records { json } => {
            let output = pipeline.run(&raw, Some(&progress))?;
            progress.finish_with_message("Analysis complete");

            let summary = RecordAnalyzer::new().analyze(&output, &config.location);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("\n{}", summary.detailed_summary());
            }
        }

        Commands::Validate => {
            let stats = pipeline.inspect(&raw, Some(&progress))?;
            progress.finish_with_message("Validation complete");

            println!("\n{}", stats.summary());
            println!("✅ Input is usable for {}", config.chart_title());
        }
    }

    Ok(())
}
