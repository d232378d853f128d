//! POSIX-shell-style splitting (single quotes, double quotes, backslash escapes).

use crate::diagnostic::{Diagnostic, DiagnosticKind, DiagnosticSink, LogSink};
use crate::shell::Convention;

/// Split a command line into arguments using POSIX quoting rules.
///
/// Unterminated quotes are reported through the `log` facade.
pub fn split(input: &str) -> Vec<String> {
    split_with(input, &mut LogSink)
}

/// Split a command line into arguments using POSIX quoting rules,
/// reporting unterminated quotes to `sink`.
///
/// - `'...'` keeps everything literally, backslashes included.
/// - `"..."` honours `\$`, `` \` ``, `\"`, `\\` and backslash-newline; any
///   other backslash is kept together with the character after it.
/// - Outside quotes a backslash escapes the next character.
/// - An empty quoted pair (`''` or `""`) yields an empty argument.
pub fn split_with(input: &str, sink: &mut dyn DiagnosticSink) -> Vec<String> {
    let input = input.replace("\r\n", "\n");
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut quote_start = 0;
    let mut chars = input.chars().enumerate().peekable();

    while let Some((pos, c)) = chars.next() {
        if in_single_quote {
            if c == '\'' {
                in_single_quote = false;
            } else {
                current.push(c);
            }
            continue;
        }

        if in_double_quote {
            match c {
                '"' => in_double_quote = false,
                '\\' => match chars.peek().map(|&(_, next)| next) {
                    Some(next @ ('$' | '`' | '"' | '\\')) => {
                        chars.next();
                        current.push(next);
                    }
                    Some('\n') => {
                        chars.next();
                    }
                    Some(next) => {
                        chars.next();
                        current.push('\\');
                        current.push(next);
                    }
                    None => current.push('\\'),
                },
                _ => current.push(c),
            }
            continue;
        }

        match c {
            '\\' => match chars.next() {
                // Line continuation
                Some((_, '\n')) => {}
                Some((_, next)) => {
                    current.push(next);
                    in_token = true;
                }
                None => {
                    current.push('\\');
                    in_token = true;
                }
            },
            '\'' => {
                in_single_quote = true;
                quote_start = pos;
                in_token = true;
            }
            '"' => {
                in_double_quote = true;
                quote_start = pos;
                in_token = true;
            }
            c if c.is_whitespace() => {
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
    }

    if in_single_quote || in_double_quote {
        let kind = if in_single_quote {
            DiagnosticKind::UnterminatedSingleQuote
        } else {
            DiagnosticKind::UnterminatedDoubleQuote
        };
        sink.report(Diagnostic::unterminated(Convention::Posix, kind, quote_start));
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet(input: &str) -> Vec<String> {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let tokens = split_with(input, &mut sink);
        assert!(sink.is_empty(), "unexpected diagnostics: {:?}", sink);
        tokens
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(quiet("ls -la /tmp"), vec!["ls", "-la", "/tmp"]);
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(quiet("").is_empty());
        assert!(quiet(" \t\n  ").is_empty());
    }

    #[test]
    fn test_double_quoted_header() {
        assert_eq!(
            quiet(r#"-h "Content-Length: 0" -X POST"#),
            vec!["-h", "Content-Length: 0", "-X", "POST"]
        );
    }

    #[test]
    fn test_single_quotes_are_literal() {
        assert_eq!(quiet(r"echo 'a\b $HOME'"), vec!["echo", r"a\b $HOME"]);
    }

    #[test]
    fn test_empty_quotes_yield_empty_token() {
        assert_eq!(quiet("''"), vec![""]);
        assert_eq!(quiet(r#"a "" b"#), vec!["a", "", "b"]);
    }

    #[test]
    fn test_adjacent_quotes_join() {
        assert_eq!(quiet(r#"foo'bar'"baz""#), vec!["foobarbaz"]);
    }

    #[test]
    fn test_escaped_space() {
        assert_eq!(quiet(r"echo hello\ world"), vec!["echo", "hello world"]);
    }

    #[test]
    fn test_unquoted_backslash_drops() {
        assert_eq!(quiet(r"C:\Users\foo"), vec!["C:Usersfoo"]);
        assert_eq!(quiet(r"a\\b"), vec![r"a\b"]);
    }

    #[test]
    fn test_double_quote_escapes() {
        assert_eq!(quiet(r#""a\"b""#), vec![r#"a"b"#]);
        assert_eq!(quiet(r#""\$HOME""#), vec!["$HOME"]);
        assert_eq!(quiet(r#""a\\b""#), vec![r"a\b"]);
        assert_eq!(quiet(r#""a\`b""#), vec!["a`b"]);
        assert_eq!(quiet(r#""a\nb""#), vec![r"a\nb"]);
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(quiet("abc\\\ndef"), vec!["abcdef"]);
        assert_eq!(quiet("a \\\n b"), vec!["a", "b"]);
        assert_eq!(quiet("\"abc\\\ndef\""), vec!["abcdef"]);
    }

    #[test]
    fn test_continuation_inside_empty_quotes() {
        assert_eq!(quiet("\"\\\n\""), vec![""]);
    }

    #[test]
    fn test_crlf_normalized() {
        assert_eq!(quiet("abc\\\r\ndef"), vec!["abcdef"]);
        assert_eq!(quiet("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_trailing_backslash_kept() {
        assert_eq!(quiet("abc\\"), vec!["abc\\"]);
    }

    #[test]
    fn test_unicode_whitespace_separates() {
        assert_eq!(quiet("a\u{00A0}b\u{2003}c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unterminated_double_quote() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let tokens = split_with(r#"say "hello"#, &mut sink);
        assert_eq!(tokens, vec!["say", "hello"]);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].kind, DiagnosticKind::UnterminatedDoubleQuote);
        assert_eq!(sink[0].offset, 4);
        assert_eq!(sink[0].convention, Convention::Posix);
    }

    #[test]
    fn test_unterminated_single_quote() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let tokens = split_with("echo 'it", &mut sink);
        assert_eq!(tokens, vec!["echo", "it"]);
        assert_eq!(sink[0].kind, DiagnosticKind::UnterminatedSingleQuote);
    }

    #[test]
    fn test_unterminated_empty_quote_still_flushes() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        assert_eq!(split_with("'", &mut sink), vec![""]);
        assert_eq!(sink.len(), 1);
    }
}
