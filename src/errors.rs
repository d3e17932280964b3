use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} is required to continue", variable)]
    MissingToken { variable: String },

    #[error("Invalid API url `{}`,\n  caused by: {}", url, reason)]
    InvalidApiUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("GitHub API call failed,\n  caused by: {}", source)]
    Api {
        #[from]
        source: octocrab::Error,
    },

    #[error("No project board found in repository {}", repository)]
    NoProjectBoard { repository: String },
}

pub type Result<T, E = MigrationError> = std::result::Result<T, E>;
