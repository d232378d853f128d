//! Flag lookup over an already split argument list.

/// Prefixes and matching policy for verbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbOptions {
    /// Prefix of the short form, `-` by default.
    pub short_prefix: String,
    /// Prefix of the long form, `--` by default.
    pub long_prefix: String,
    /// Whether verb names must match case exactly.
    pub case_sensitive: bool,
}

impl Default for VerbOptions {
    fn default() -> Self {
        Self {
            short_prefix: "-".to_string(),
            long_prefix: "--".to_string(),
            case_sensitive: true,
        }
    }
}

/// A flag with a long name and an optional one-character short form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verb<'a> {
    pub long: &'a str,
    pub short: Option<char>,
}

impl<'a> Verb<'a> {
    /// A verb with only a long form (`--name`).
    pub fn long(long: &'a str) -> Self {
        Self { long, short: None }
    }

    /// Add a short form (`-c`).
    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }
}

/// Looks up verbs and their values in a token list.
#[derive(Debug, Clone)]
pub struct VerbLookup<'t> {
    tokens: &'t [String],
    options: VerbOptions,
}

impl<'t> VerbLookup<'t> {
    pub fn new(tokens: &'t [String], options: VerbOptions) -> Self {
        Self { tokens, options }
    }

    pub fn tokens(&self) -> &'t [String] {
        self.tokens
    }

    pub fn options(&self) -> &VerbOptions {
        &self.options
    }

    /// Whether `token` names `verb` in its long or short form.
    ///
    /// Matching is by prefix, so `--verbose` also matches the verb `verb`.
    pub fn matches(&self, token: &str, verb: &Verb<'_>) -> bool {
        let long = format!("{}{}", self.options.long_prefix, verb.long);
        let short = verb
            .short
            .map(|c| format!("{}{}", self.options.short_prefix, c));

        if self.options.case_sensitive {
            token.starts_with(&long) || short.is_some_and(|s| token.starts_with(&s))
        } else {
            let token = token.to_lowercase();
            token.starts_with(&long.to_lowercase())
                || short.is_some_and(|s| token.starts_with(&s.to_lowercase()))
        }
    }

    /// Whether any token names `verb`.
    pub fn is_present(&self, verb: &Verb<'_>) -> bool {
        self.tokens.iter().any(|t| self.matches(t, verb))
    }

    /// The token right after the first occurrence of `verb`.
    pub fn first_value_after(&self, verb: &Verb<'_>) -> Option<&'t str> {
        let idx = self.tokens.iter().position(|t| self.matches(t, verb))?;
        self.tokens.get(idx + 1).map(String::as_str)
    }

    /// Every token following an occurrence of `verb`, up to the next token
    /// starting with the short prefix.
    ///
    /// That token is itself checked against `verb`, so repeated occurrences
    /// (`-i a -x -i b c`) contribute all of their values.
    pub fn all_values_after(&self, verb: &Verb<'_>) -> Vec<&'t str> {
        let mut values = Vec::new();
        let mut collecting = false;
        for token in self.tokens {
            if token.starts_with(&self.options.short_prefix) {
                collecting = self.matches(token, verb);
            } else if collecting {
                values.push(token.as_str());
            } else if self.matches(token, verb) {
                collecting = true;
            }
        }
        values
    }

    /// Tokens that are neither verbs nor the value directly after one.
    pub fn remainder(&self) -> Vec<&'t str> {
        let prefix = self.options.short_prefix.as_str();
        let mut rest = Vec::new();
        let mut after_verb = false;
        for token in self.tokens {
            let is_verb = token.starts_with(prefix);
            if !is_verb && !after_verb {
                rest.push(token.as_str());
            }
            after_verb = is_verb;
        }
        rest
    }
}
