//! Repository context
//!
//! The owner/name pair the filter compiler scopes unqualified terms to.
//! Always passed explicitly; nothing in the crate reads it ambiently.

use std::fmt;

/// Errors building a [`RepoContext`].
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("repository must be in \"owner/name\" form: {0:?}")]
    Malformed(String),

    #[error("no repository context: GITHUB_REPOSITORY is unset and --repository was not given")]
    Missing,
}

/// The repository a run operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoContext {
    pub owner: String,
    pub name: String,
}

impl RepoContext {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// Parse an `owner/name` slug.
    pub fn parse(slug: &str) -> Result<Self, ContextError> {
        match slug.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self::new(owner, name))
            }
            _ => Err(ContextError::Malformed(slug.to_string())),
        }
    }

    /// Context from the runner environment (`GITHUB_REPOSITORY`).
    pub fn from_env() -> Result<Self, ContextError> {
        match std::env::var("GITHUB_REPOSITORY") {
            Ok(slug) => Self::parse(&slug),
            Err(_) => Err(ContextError::Missing),
        }
    }

    /// Search qualifier scoping a query to this repository.
    pub fn search_scope(&self) -> String {
        format!("repo:{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let ctx = RepoContext::parse("acme/widgets").unwrap();
        assert_eq!(ctx.owner, "acme");
        assert_eq!(ctx.name, "widgets");
        assert_eq!(ctx.to_string(), "acme/widgets");
    }

    #[test]
    fn test_search_scope() {
        let ctx = RepoContext::new("acme", "widgets");
        assert_eq!(ctx.search_scope(), "repo:acme/widgets");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for slug in ["", "acme", "/widgets", "acme/", "acme/widgets/extra"] {
            assert!(RepoContext::parse(slug).is_err(), "expected {slug:?} to be rejected");
        }
    }
}
