//! Typed access to verb values.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use super::lookup::{Verb, VerbLookup};

/// Errors that can occur when converting a verb value.
#[derive(Debug, Error)]
pub enum CoerceError {
    #[error("invalid value '{value}' for --{verb}: {message}")]
    Parse {
        verb: String,
        value: String,
        message: String,
    },

    #[error("file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),
}

impl VerbLookup<'_> {
    /// Parse the value after `verb` as `T`.
    ///
    /// Returns `Ok(None)` when the verb is absent or has no value.
    pub fn value_as<T>(&self, verb: &Verb<'_>) -> Result<Option<T>, CoerceError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(value) = self.first_value_after(verb) else {
            return Ok(None);
        };
        value.parse::<T>().map(Some).map_err(|e| CoerceError::Parse {
            verb: verb.long.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        })
    }

    /// The value after `verb` as a path to an existing file.
    pub fn file_after(&self, verb: &Verb<'_>) -> Result<Option<PathBuf>, CoerceError> {
        let Some(value) = self.first_value_after(verb) else {
            return Ok(None);
        };
        let path = PathBuf::from(value);
        if path.is_file() {
            Ok(Some(path))
        } else {
            Err(CoerceError::FileNotFound(path))
        }
    }

    /// The value after `verb` as a path to an existing directory.
    pub fn directory_after(&self, verb: &Verb<'_>) -> Result<Option<PathBuf>, CoerceError> {
        let Some(value) = self.first_value_after(verb) else {
            return Ok(None);
        };
        let path = PathBuf::from(value);
        if path.is_dir() {
            Ok(Some(path))
        } else {
            Err(CoerceError::DirectoryNotFound(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verbs::VerbOptions;
    use tempfile::TempDir;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_numeric_value() {
        let t = tokens(&["--count", "42", "--ratio", "0.5"]);
        let lookup = VerbLookup::new(&t, VerbOptions::default());
        assert_eq!(lookup.value_as::<u32>(&Verb::long("count")).unwrap(), Some(42));
        assert_eq!(lookup.value_as::<f64>(&Verb::long("ratio")).unwrap(), Some(0.5));
        assert_eq!(lookup.value_as::<u32>(&Verb::long("missing")).unwrap(), None);
    }

    #[test]
    fn test_invalid_numeric_value() {
        let t = tokens(&["--count", "many"]);
        let lookup = VerbLookup::new(&t, VerbOptions::default());
        let err = lookup.value_as::<u32>(&Verb::long("count")).unwrap_err();
        assert!(matches!(err, CoerceError::Parse { .. }));
        assert!(err.to_string().contains("many"));
    }

    #[test]
    fn test_file_after() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("input.txt");
        std::fs::write(&file, "x").unwrap();

        let t = vec![
            "--in".to_string(),
            file.to_string_lossy().into_owned(),
            "--out".to_string(),
            dir.path().join("nope").to_string_lossy().into_owned(),
        ];
        let lookup = VerbLookup::new(&t, VerbOptions::default());
        assert_eq!(lookup.file_after(&Verb::long("in")).unwrap(), Some(file));
        assert!(matches!(
            lookup.file_after(&Verb::long("out")),
            Err(CoerceError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_directory_after() {
        let dir = TempDir::new().unwrap();
        let t = vec!["-C".to_string(), dir.path().to_string_lossy().into_owned()];
        let lookup = VerbLookup::new(&t, VerbOptions::default());
        let verb = Verb::long("directory").with_short('C');
        assert_eq!(
            lookup.directory_after(&verb).unwrap(),
            Some(dir.path().to_path_buf())
        );
        // A plain file is not a directory
        let file = dir.path().join("f");
        std::fs::write(&file, "").unwrap();
        let t = vec!["-C".to_string(), file.to_string_lossy().into_owned()];
        let lookup = VerbLookup::new(&t, VerbOptions::default());
        assert!(matches!(
            lookup.directory_after(&verb),
            Err(CoerceError::DirectoryNotFound(_))
        ));
    }
}
