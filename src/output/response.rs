//! Response building and formatting for the binary.

use serde::Serialize;

use crate::config::CompiledConfig;
use crate::diagnostic::Diagnostic;
use crate::input::SplitRequest;
use crate::shell::{self, Convention};
use crate::verbs::VerbLookup;

/// JSON response for one split request.
#[derive(Debug, Serialize)]
pub struct SplitResponse {
    /// The scanner that ran.
    pub convention: Convention,
    pub tokens: Vec<String>,
    /// Diagnostics raised while scanning.
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub verbs: Vec<VerbReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remainder: Option<Vec<String>>,
}

/// Lookup results for one requested verb.
#[derive(Debug, Serialize)]
pub struct VerbReport {
    pub long: String,
    pub present: bool,
    pub first_value: Option<String>,
    pub values: Vec<String>,
}

impl SplitResponse {
    /// Split the request's command line and answer its verb queries.
    pub fn build(request: &SplitRequest, config: &CompiledConfig) -> Self {
        let format = request.format.unwrap_or(config.format);
        let convention = format.resolve(&request.command_line);

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let tokens = shell::split_with(&request.command_line, convention.into(), &mut diagnostics);
        for d in &diagnostics {
            log::warn!("{}", d);
        }

        let lookup = VerbLookup::new(&tokens, config.verbs.clone());
        let verbs = request
            .verbs
            .iter()
            .map(|q| {
                let verb = q.as_verb();
                VerbReport {
                    long: q.long.clone(),
                    present: lookup.is_present(&verb),
                    first_value: lookup.first_value_after(&verb).map(String::from),
                    values: lookup
                        .all_values_after(&verb)
                        .into_iter()
                        .map(String::from)
                        .collect(),
                }
            })
            .collect();
        let remainder = request
            .remainder
            .then(|| lookup.remainder().into_iter().map(String::from).collect());

        Self {
            convention,
            tokens,
            warnings: diagnostics.iter().map(ToString::to_string).collect(),
            verbs,
            remainder,
        }
    }
}

/// Format a response as a single JSON line.
pub fn format_response(response: &SplitResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| r#"{"tokens":[]}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn config() -> CompiledConfig {
        Config::default().compile().unwrap()
    }

    #[test]
    fn test_build_tokens() {
        let req = SplitRequest::parse(r#"{"command_line":"a 'b c'","format":"posix"}"#).unwrap();
        let resp = SplitResponse::build(&req, &config());
        assert_eq!(resp.convention, Convention::Posix);
        assert_eq!(resp.tokens, vec!["a", "b c"]);
        assert!(resp.warnings.is_empty());
    }

    #[test]
    fn test_build_reports_warnings() {
        let req = SplitRequest::parse(r#"{"command_line":"say \"hello","format":"posix"}"#).unwrap();
        let resp = SplitResponse::build(&req, &config());
        assert_eq!(resp.tokens, vec!["say", "hello"]);
        assert_eq!(resp.warnings.len(), 1);
        assert!(resp.warnings[0].contains("unterminated"));
    }

    #[test]
    fn test_build_verbs_and_remainder() {
        let json = r#"{
            "command_line": "curl -X POST -h \"Accept: */*\" example.com",
            "format": "posix",
            "verbs": [{"long": "request", "short": "X"}, {"long": "data", "short": "d"}],
            "remainder": true
        }"#;
        let resp = SplitResponse::build(&SplitRequest::parse(json).unwrap(), &config());
        assert!(resp.verbs[0].present);
        assert_eq!(resp.verbs[0].first_value.as_deref(), Some("POST"));
        assert_eq!(resp.verbs[0].values, vec!["POST"]);
        assert!(!resp.verbs[1].present);
        assert_eq!(resp.remainder, Some(vec!["curl".to_string(), "example.com".to_string()]));
    }

    #[test]
    fn test_request_format_overrides_config() {
        let compiled = Config::parse("format = \"windows\"").unwrap().compile().unwrap();
        let req = SplitRequest::parse(r#"{"command_line":"'a b'"}"#).unwrap();
        assert_eq!(SplitResponse::build(&req, &compiled).tokens, vec!["'a", "b'"]);
        let req = SplitRequest::parse(r#"{"command_line":"'a b'","format":"posix"}"#).unwrap();
        assert_eq!(SplitResponse::build(&req, &compiled).tokens, vec!["a b"]);
    }

    #[test]
    fn test_format_response_json() {
        let req = SplitRequest::parse(r#"{"command_line":"x y","format":"windows"}"#).unwrap();
        let json = format_response(&SplitResponse::build(&req, &config()));
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["convention"], "windows");
        assert_eq!(parsed["tokens"][1], "y");
        assert!(parsed.get("verbs").is_none());
        assert!(parsed.get("remainder").is_none());
    }
}
