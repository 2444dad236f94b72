use std::{fs::read_to_string, path::Path, path::PathBuf};

use anyhow::{anyhow, Context};
use serde::Deserialize;

pub const DEFAULT_INPUT_FILEPATH: &str = "mymap.kml";
pub const DEFAULT_OUTPUT_FILEPATH: &str = "mymap.geojson";

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default)]
    pub strict: bool,
}

pub fn read_config_file(config_filepath: &Path) -> anyhow::Result<Config> {
    if !config_filepath.exists() {
        return Err(anyhow!("Config file {:?} not found", config_filepath));
    }
    let config_contents = read_to_string(config_filepath)?;
    serde_yaml::from_str(&config_contents)
        .with_context(|| format!("Parsing config file {:?}", config_filepath))
}
