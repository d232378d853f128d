//! argsplit - split raw command lines into arguments.
//!
//! Supports POSIX-shell and Windows quoting rules, and can guess which
//! of the two a command line was written for.

pub mod config;
pub mod diagnostic;
pub mod input;
pub mod output;
pub mod shell;
pub mod verbs;

pub use config::{CompiledConfig, Config};
pub use diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink};
pub use input::SplitRequest;
pub use output::{SplitResponse, format_response};
pub use shell::{Convention, Format, split, split_with};
pub use verbs::{Verb, VerbLookup, VerbOptions};
