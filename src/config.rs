use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::{Analyzer, StopWords};

/// Where the analyzer's stopwords come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StopWordSource {
    /// built-in English list
    #[default]
    English,
    /// keep every token
    None,
    /// newline / whitespace separated list file
    File(PathBuf),
}

/// TF weighting used when vectorizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Weighting {
    /// raw term counts
    #[default]
    Raw,
    /// 1 + ln(count)
    Sublinear,
}

/// Search pipeline settings, usually read from a JSON file.
/// Every field is optional in the file.
///
/// ```json
/// { "lowercase": true, "min_token_len": 2, "stopwords": { "file": "stop.txt" }, "top_k": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub lowercase: bool,
    pub min_token_len: usize,
    pub stopwords: StopWordSource,
    pub top_k: Option<usize>,
    pub weighting: Weighting,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_len: 1,
            stopwords: StopWordSource::English,
            top_k: None,
            weighting: Weighting::Raw,
        }
    }
}

impl SearchConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_token_len == 0 {
            return Err(Error::Config("min_token_len must be at least 1".to_string()));
        }
        if self.top_k == Some(0) {
            return Err(Error::Config("top_k must be at least 1 when set".to_string()));
        }
        Ok(())
    }

    /// Analyzer described by this config. Reads the stopword file if any.
    pub fn build_analyzer(&self) -> Result<Analyzer> {
        self.validate()?;
        let stopwords = match &self.stopwords {
            StopWordSource::English => StopWords::english(),
            StopWordSource::None => StopWords::empty(),
            StopWordSource::File(path) => StopWords::from_file(path)?,
        };
        Ok(Analyzer::new()
            .with_stopwords(stopwords)
            .with_lowercase(self.lowercase)
            .with_min_token_len(self.min_token_len))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SearchConfig::from_json_str("{}").unwrap(), SearchConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let config = SearchConfig::from_json_str(
            r#"{"lowercase": false, "min_token_len": 3, "stopwords": "none", "top_k": 5, "weighting": "sublinear"}"#,
        )
        .unwrap();
        assert!(!config.lowercase);
        assert_eq!(config.min_token_len, 3);
        assert_eq!(config.stopwords, StopWordSource::None);
        assert_eq!(config.top_k, Some(5));
        assert_eq!(config.weighting, Weighting::Sublinear);
    }

    #[test]
    fn rejects_zero_min_token_len() {
        let err = SearchConfig::from_json_str(r#"{"min_token_len": 0}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = SearchConfig::from_json_str("{not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn stopword_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pasta").unwrap();
        let json = serde_json::json!({ "stopwords": { "file": file.path() } }).to_string();
        let analyzer = SearchConfig::from_json_str(&json).unwrap().build_analyzer().unwrap();
        assert_eq!(analyzer.analyze("the pasta water"), vec!["the", "water"]);
    }
}
