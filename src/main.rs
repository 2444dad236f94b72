extern crate log;
pub mod config;
pub mod convert;
pub mod error;
pub mod geofile;
pub mod kml;
use crate::config::{read_config_file, Config, DEFAULT_INPUT_FILEPATH, DEFAULT_OUTPUT_FILEPATH};
use crate::convert::{convert_kml_to_geojson, ConvertOptions};
use clap::Parser;
use std::path::PathBuf;

/// Convert a KML export into a GeoJSON FeatureCollection with marker colors.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input KML file.
    #[arg(short, long, default_value = DEFAULT_INPUT_FILEPATH)]
    input: PathBuf,

    /// Path of the GeoJSON file to write. An existing file is overwritten.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILEPATH)]
    output: PathBuf,

    /// Warn about placemarks without geometry and unresolved styles.
    #[arg(long)]
    strict: bool,

    /// Path to a YAML config file. Replaces the other arguments when given.
    #[arg(short, long)]
    config_filepath: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            input_path: args.input,
            output_path: args.output,
            strict: args.strict,
        }
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::try_parse()?;
    let config = match args.config_filepath.clone() {
        Some(config_filepath) => read_config_file(&config_filepath)?,
        None => Config::from(args),
    };

    log::info!(
        "Converting {:?} to {:?} with marker colors",
        &config.input_path,
        &config.output_path
    );
    let report = convert_kml_to_geojson(
        &config.input_path,
        &config.output_path,
        &ConvertOptions {
            strict: config.strict,
        },
    )?;
    if !report.diagnostics.is_empty() {
        log::warn!("{} issues found in the input", report.diagnostics.len());
    }
    log::info!(
        "Converted {} features to {:?}",
        report.features_written,
        &config.output_path
    );
    Ok(())
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
