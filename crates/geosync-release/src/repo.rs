//! Repository reference parsing

use geosync_core::{Error, Result};
use std::fmt;

/// A parsed owner/name repository reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    /// Repository owner
    pub owner: String,

    /// Repository name
    pub name: String,
}

impl RepoRef {
    /// Parse an `owner/name` string, tolerating one trailing slash
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.strip_suffix('/').unwrap_or(input);
        let mut parts = trimmed.splitn(2, '/');
        match (parts.next(), parts.next()) {
            (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::invalid_repo_format(input)),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
