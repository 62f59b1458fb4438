use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pointmap")]
#[command(about = "Render CSV point measurements as colour-graded map markers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Map settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Html,
    Geojson,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => crate::utils::constants::FORMAT_HTML,
            OutputFormat::Geojson => crate::utils::constants::FORMAT_GEOJSON,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a dataset and render it as a map document
    Render {
        #[arg(short, long, help = "Dataset URL (http/https) or file path")]
        source: String,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/pointmap-{YYMMDD}.{format}]"
        )]
        output_file: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        #[arg(long, allow_hyphen_values = true)]
        center_lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        center_lng: Option<f64>,

        #[arg(short, long)]
        zoom: Option<u8>,
    },

    /// Check a dataset's coordinates without writing a map
    Validate {
        #[arg(short, long, help = "Dataset URL (http/https) or file path")]
        source: String,

        #[arg(short, long, help = "Write rejected rows to this CSV file")]
        report: Option<PathBuf>,
    },

    /// Print the legend bands and their colors
    Legend,
}
