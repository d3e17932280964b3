use serde::Deserialize;

use super::common::Repository;

/// Raw content of the YAML config file. Every field may be omitted.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    pub source: Option<Repository>,
    pub destination: Option<Repository>,
    pub token_variable: Option<String>,
    pub api_url: Option<String>,
    pub project_board: Option<bool>,
}

pub fn read_config(config: &str) -> Result<Config, serde_yaml::Error> {
    // An empty file deserializes to null rather than to an empty mapping.
    if config.trim().is_empty() {
        return Ok(Config::default());
    }

    serde_yaml::from_str(config)
}
