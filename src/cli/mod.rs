pub mod common;
pub mod credentials;
pub mod parser;
pub mod reader;

pub use common::*;
pub use credentials::{load_token, TOKEN_VARIABLE};
pub use parser::{parse_config, Settings};

use anyhow::{Context, Result};
use clap::Parser;
use reader::read_config;

#[derive(Parser)]
pub struct Args {
    /// YAML file overriding the source, destination and API settings.
    #[clap(short, long, parse(from_os_str))]
    config: Option<std::path::PathBuf>,
}

pub fn run() -> Result<Settings> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let result = std::fs::read_to_string(path)
                .with_context(|| format!("could not read file `{:?}`", path))?;

            read_config(&result).with_context(|| format!("could not parse file `{:?}`", path))?
        }
        None => reader::Config::default(),
    };

    let settings = parse_config(config)?;

    Ok(settings)
}
