use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;
use crate::utils::constants::{CHART_HEIGHT, CHART_WIDTH, DEFAULT_INPUT_FILE};

#[derive(Parser)]
#[command(name = "record-temps")]
#[command(about = "Find and chart record-breaking daily temperatures against a station baseline")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, default_value = DEFAULT_INPUT_FILE, help = "Station record CSV with Date and Data_Value columns")]
    pub input: PathBuf,

    #[arg(long, global = true, help = "Configuration file (TOML, JSON or YAML)")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "First year of the baseline window")]
    pub baseline_start: Option<i32>,

    #[arg(long, global = true, help = "Last year of the baseline window")]
    pub baseline_end: Option<i32>,

    #[arg(long, global = true, help = "Year compared against the baseline")]
    pub comparison_year: Option<i32>,

    #[arg(long, global = true, help = "Location named in the chart title")]
    pub location: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide the progress spinner")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the full analysis and render the chart (default)
    Render {
        #[arg(
            short,
            long,
            help = "Output SVG path [default: output/record-temperatures-{YEAR}.svg]"
        )]
        output: Option<PathBuf>,

        #[arg(long, help = "Also export the aligned daily series as CSV")]
        series_output: Option<PathBuf>,

        #[arg(long, default_value_t = CHART_WIDTH, value_parser = clap::value_parser!(u32).range(1..), help = "Chart width in pixels")]
        width: u32,

        #[arg(long, default_value_t = CHART_HEIGHT, value_parser = clap::value_parser!(u32).range(1..), help = "Chart height in pixels")]
        height: u32,
    },

    /// Run the analysis and list the record days without rendering
    Records {
        #[arg(long, default_value = "false", help = "Print the summary as JSON")]
        json: bool,
    },

    /// Check that the input parses and both year windows have data
    Validate,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            baseline_start: self.baseline_start,
            baseline_end: self.baseline_end,
            comparison_year: self.comparison_year,
            location: self.location.clone(),
        }
    }

    /// The subcommand to run; a bare invocation renders the chart
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Render {
            output: None,
            series_output: None,
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
        })
    }
}
