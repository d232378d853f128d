//! Non-fatal diagnostics reported while scanning.

use std::fmt;

use crate::shell::Convention;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Input ended inside a `'...'` region.
    UnterminatedSingleQuote,
    /// Input ended inside a `"..."` region.
    UnterminatedDoubleQuote,
}

/// A recoverable lexical anomaly. The scan that produced it still completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The scanner that reported it.
    pub convention: Convention,
    /// The anomaly.
    pub kind: DiagnosticKind,
    /// Character index of the quote that was never closed.
    pub offset: usize,
}

impl Diagnostic {
    pub fn unterminated(convention: Convention, kind: DiagnosticKind, offset: usize) -> Self {
        Self {
            convention,
            kind,
            offset,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quote = match self.kind {
            DiagnosticKind::UnterminatedSingleQuote => "single",
            DiagnosticKind::UnterminatedDoubleQuote => "double",
        };
        write!(
            f,
            "unterminated {} quote opened at offset {} ({} rules); keeping partial token",
            quote, self.offset, self.convention
        )
    }
}

/// Receives diagnostics from a scanner.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
