use crate::errors::ConfigError;

pub const TOKEN_VARIABLE: &str = "GITHUB_TOKEN";

/// Reads the access token through `lookup`, which stands in for the process
/// environment. An empty value counts as missing.
pub fn load_token<F>(variable: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(variable) {
        Some(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(ConfigError::MissingToken {
            variable: variable.to_string(),
        }),
    }
}
