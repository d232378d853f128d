//! Choosing and running a scanner.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{detect, posix, windows};
use crate::diagnostic::{DiagnosticSink, LogSink};

/// A concrete quoting convention, i.e. one of the two scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    Posix,
    Windows,
}

impl Convention {
    /// The convention of the host this crate was built for.
    pub fn native() -> Self {
        if cfg!(windows) {
            Convention::Windows
        } else {
            Convention::Posix
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Convention::Posix => "posix",
            Convention::Windows => "windows",
        })
    }
}

/// How the caller wants a command line to be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Guess from the text itself.
    #[default]
    #[serde(rename = "auto", alias = "autodetect")]
    AutoDetect,
    Posix,
    Windows,
}

impl Format {
    /// The scanner `split` will run for `input`.
    pub fn resolve(self, input: &str) -> Convention {
        match self {
            Format::AutoDetect => detect::detect(input),
            Format::Posix => Convention::Posix,
            Format::Windows => Convention::Windows,
        }
    }
}

impl From<Convention> for Format {
    fn from(convention: Convention) -> Self {
        match convention {
            Convention::Posix => Format::Posix,
            Convention::Windows => Format::Windows,
        }
    }
}

/// Split `input` into arguments, reporting anomalies through the `log` facade.
pub fn split(input: &str, format: Format) -> Vec<String> {
    split_with(input, format, &mut LogSink)
}

/// Split `input` into arguments, reporting anomalies to `sink`.
pub fn split_with(input: &str, format: Format, sink: &mut dyn DiagnosticSink) -> Vec<String> {
    match format.resolve(input) {
        Convention::Posix => posix::split_with(input, sink),
        Convention::Windows => windows::split_with(input, sink),
    }
}
