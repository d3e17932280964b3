use reqwest::Url;

use super::{common::Repository, credentials::TOKEN_VARIABLE, reader};
use crate::errors::ConfigError;

/// Everything a migration run needs apart from the token.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub source: Repository,
    pub destination: Repository,
    pub token_variable: String,
    pub api_url: Option<Url>,
    pub project_board: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: Repository::default_source(),
            destination: Repository::default_destination(),
            token_variable: TOKEN_VARIABLE.to_string(),
            api_url: None,
            project_board: true,
        }
    }
}

pub fn parse_config(config: reader::Config) -> Result<Settings, ConfigError> {
    let defaults = Settings::default();

    let api_url = config.api_url.map(|url| parse_api_url(&url)).transpose()?;

    Ok(Settings {
        source: config.source.unwrap_or(defaults.source),
        destination: config.destination.unwrap_or(defaults.destination),
        token_variable: config.token_variable.unwrap_or(defaults.token_variable),
        api_url,
        project_board: config.project_board.unwrap_or(defaults.project_board),
    })
}

fn parse_api_url(val: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(val).map_err(|e| ConfigError::InvalidApiUrl {
        url: val.to_string(),
        reason: e.to_string(),
    })?;

    // Routes are joined relative to the base, so its path needs a trailing slash.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
