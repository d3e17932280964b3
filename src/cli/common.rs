use std::fmt;

use serde::Deserialize;

pub const DEFAULT_SOURCE_OWNER: &str = "alan-turing-institute";
pub const DEFAULT_SOURCE_NAME: &str = "OpenSourceSA";
pub const DEFAULT_DESTINATION_OWNER: &str = "sgibson91";
pub const DEFAULT_DESTINATION_NAME: &str = "open-practices-toolkit";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn default_source() -> Self {
        Self::new(DEFAULT_SOURCE_OWNER, DEFAULT_SOURCE_NAME)
    }

    pub fn default_destination() -> Self {
        Self::new(DEFAULT_DESTINATION_OWNER, DEFAULT_DESTINATION_NAME)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
