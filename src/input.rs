//! Request parsing for the `argsplit` binary.

use serde::Deserialize;
use thiserror::Error;

use crate::shell::Format;
use crate::verbs::Verb;

/// Errors that can occur when parsing a request.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A request to split one command line.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitRequest {
    /// The raw command line.
    pub command_line: String,

    /// Convention to apply; the configured default when absent.
    #[serde(default)]
    pub format: Option<Format>,

    /// Verbs to look up in the resulting tokens.
    #[serde(default)]
    pub verbs: Vec<VerbQuery>,

    /// Whether to report the non-verb remainder.
    #[serde(default)]
    pub remainder: bool,
}

/// One verb to look up.
#[derive(Debug, Clone, Deserialize)]
pub struct VerbQuery {
    pub long: String,
    #[serde(default)]
    pub short: Option<char>,
}

impl VerbQuery {
    pub fn as_verb(&self) -> Verb<'_> {
        Verb {
            long: &self.long,
            short: self.short,
        }
    }
}

impl SplitRequest {
    /// Parse from JSON string.
    pub fn parse(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }
}
