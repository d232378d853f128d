//! Windows-style splitting (double quotes and backslash runs, no single quotes).

use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink};
use crate::shell::Convention;

/// Split a command line into arguments using Windows quoting rules.
///
/// Unterminated quotes are reported through the `log` facade.
pub fn split(input: &str) -> Vec<String> {
    split_with(input, &mut LogSink)
}

/// Split a command line into arguments using Windows quoting rules,
/// reporting unterminated quotes to `sink`.
///
/// A run of `k` backslashes followed by `"` produces `k / 2` backslashes;
/// an odd run also makes the quote literal, an even run leaves it to
/// toggle quoting. Backslashes not followed by a quote are literal.
pub fn split_with(input: &str, sink: &mut dyn DiagnosticSink) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quote = false;
    let mut quote_start = 0;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                let run = chars[i..].iter().take_while(|&&ch| ch == '\\').count();
                let after = i + run;
                in_token = true;
                if chars.get(after) == Some(&'"') {
                    current.extend(std::iter::repeat_n('\\', run / 2));
                    if run % 2 == 1 {
                        current.push('"');
                    } else {
                        if !in_quote {
                            quote_start = after;
                        }
                        in_quote = !in_quote;
                    }
                    i = after + 1;
                } else {
                    current.extend(std::iter::repeat_n('\\', run));
                    i = after;
                }
                continue;
            }
            '"' => {
                if !in_quote {
                    quote_start = i;
                }
                in_quote = !in_quote;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quote => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            _ => {
                current.push(c);
                in_token = true;
            }
        }
        i += 1;
    }

    if in_quote {
        sink.report(Diagnostic::unterminated(
            Convention::Windows,
            DiagnosticKind::UnterminatedDoubleQuote,
            quote_start,
        ));
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}
