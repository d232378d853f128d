//! Heuristic guessing of which quoting convention a command line uses.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::shell::Convention;

/// Backslash escaping something that is not a quote, another backslash, a
/// newline or a path component character.
static POSIX_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\\[^"\\\n\w.\-]"#).expect("valid regex"));

static LINE_CONTINUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\n").expect("valid regex"));

/// `$name` or `${name}`.
static SHELL_VARIABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:[A-Za-z_][A-Za-z0-9_]*|\{[A-Za-z_][A-Za-z0-9_]*\})").expect("valid regex")
});

/// `%name%`.
static PERCENT_VARIABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[A-Za-z_][A-Za-z0-9_]*%").expect("valid regex"));

/// `X:\` at the start or after a space.
static DRIVE_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[ \t])[A-Za-z]:\\").expect("valid regex"));

/// `\\server` at the start or after a space.
static UNC_PATH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[ \t])\\\\[\w.\-]").expect("valid regex"));

/// Backslash used as a path separator.
static PATH_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\\[^"\\\n\s']"#).expect("valid regex"));

/// Which heuristics fired for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signals {
    pub posix: bool,
    pub windows: bool,
}

impl Signals {
    /// The convention these signals point at, if they are unambiguous.
    pub fn verdict(self) -> Option<Convention> {
        match (self.posix, self.windows) {
            (true, false) => Some(Convention::Posix),
            (false, true) => Some(Convention::Windows),
            _ => None,
        }
    }
}

/// Evaluate both heuristics over the raw text.
pub fn signals(input: &str) -> Signals {
    let posix = input.contains('\'')
        || POSIX_ESCAPE.is_match(input)
        || LINE_CONTINUATION.is_match(input)
        || SHELL_VARIABLE.is_match(input);

    let windows = PERCENT_VARIABLE.is_match(input)
        || DRIVE_PATH.is_match(input)
        || UNC_PATH.is_match(input)
        || PATH_SEPARATOR.is_match(input);

    Signals { posix, windows }
}

/// Guess the convention of `input`.
///
/// Ambiguous or signal-free input falls back to the host's native convention.
pub fn detect(input: &str) -> Convention {
    let signals = signals(input);
    let convention = signals.verdict().unwrap_or_else(Convention::native);
    log::debug!(
        "detected {} rules (posix signal: {}, windows signal: {})",
        convention,
        signals.posix,
        signals.windows
    );
    convention
}
