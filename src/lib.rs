pub mod board;
pub mod cli;
pub mod errors;
pub mod fixtures;
pub mod github_provider;
pub mod issues;
pub mod labels;
pub mod logging;
pub mod migration;
pub mod model;
pub mod provider;
