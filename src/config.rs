use crate::candidates::MAX_KEY_TERMS;
use crate::error::{HashcrackError, Result};
use crate::hash::HashFamily;
use std::path::PathBuf;

/// Default file that generated candidates are dumped to
pub const DEFAULT_GEN_FILE: &str = "generated.txt";

/// Default upper bound on generated candidates
pub const DEFAULT_MAX_CANDIDATES: u64 = 100_000;

/// Validated, immutable run configuration
#[derive(Debug, Clone)]
pub struct CrackConfig {
    pub hash: HashFamily,
    pub key_terms: Vec<String>,
    pub generated_path: PathBuf,
    pub preload_path: Option<PathBuf>,
    /// Lowercase hex digest; `None` runs in generate-only mode
    pub target: Option<String>,
    pub max_candidates: u64,
}

impl CrackConfig {
    /// Build a configuration, rejecting anything that would fail later
    pub fn new(
        hash: HashFamily,
        key_terms: Vec<String>,
        generated_path: PathBuf,
        preload_path: Option<PathBuf>,
        target: Option<String>,
        max_candidates: u64,
    ) -> Result<Self> {
        if max_candidates < 1 {
            return Err(HashcrackError::InvalidMaximum);
        }
        if key_terms.is_empty() {
            return Err(HashcrackError::NoKeyTerms);
        }
        if key_terms.len() > MAX_KEY_TERMS {
            return Err(HashcrackError::TooManyKeyTerms(key_terms.len(), MAX_KEY_TERMS));
        }
        if let Some(index) = key_terms.iter().position(|t| t.is_empty()) {
            return Err(HashcrackError::EmptyKeyTerm(index + 1));
        }

        let target = match target.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(digest) => Some(hash.normalize_digest(digest)?),
        };

        Ok(Self {
            hash,
            key_terms,
            generated_path,
            preload_path,
            target,
            max_candidates,
        })
    }

    /// Generation limit as a length bound
    pub fn candidate_limit(&self) -> usize {
        usize::try_from(self.max_candidates).unwrap_or(usize::MAX)
    }
}

/// Split the raw `--terms` value on commas
pub fn parse_key_terms(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::md5_hex;

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn build(key_terms: Vec<String>, target: Option<&str>, max: u64) -> Result<CrackConfig> {
        CrackConfig::new(
            HashFamily::Md5,
            key_terms,
            PathBuf::from(DEFAULT_GEN_FILE),
            None,
            target.map(str::to_string),
            max,
        )
    }

    #[test]
    fn test_parse_key_terms() {
        assert_eq!(parse_key_terms("sun,7"), terms(&["sun", "7"]));
        assert_eq!(parse_key_terms("single"), terms(&["single"]));
        assert!(parse_key_terms("").is_empty());
        assert_eq!(parse_key_terms("a,,b"), terms(&["a", "", "b"]));
    }

    #[test]
    fn test_valid_config() {
        let target = md5_hex("sun7").to_uppercase();
        let cfg = build(terms(&["sun", "7"]), Some(&target), 10).unwrap();
        assert_eq!(cfg.target.as_deref(), Some(md5_hex("sun7").as_str()));
        assert_eq!(cfg.candidate_limit(), 10);
    }

    #[test]
    fn test_blank_target_means_generate_only() {
        let cfg = build(terms(&["sun"]), Some(""), 10).unwrap();
        assert!(cfg.target.is_none());
    }

    #[test]
    fn test_rejects_empty_terms() {
        assert!(matches!(build(Vec::new(), None, 10), Err(HashcrackError::NoKeyTerms)));
        assert!(matches!(
            build(terms(&["a", "", "b"]), None, 10),
            Err(HashcrackError::EmptyKeyTerm(2))
        ));
    }

    #[test]
    fn test_rejects_zero_maximum() {
        assert!(matches!(
            build(terms(&["a"]), None, 0),
            Err(HashcrackError::InvalidMaximum)
        ));
    }

    #[test]
    fn test_rejects_too_many_terms() {
        let many: Vec<String> = (0..=MAX_KEY_TERMS).map(|i| i.to_string()).collect();
        assert!(matches!(
            build(many, None, 10),
            Err(HashcrackError::TooManyKeyTerms(64, 63))
        ));
    }

    #[test]
    fn test_rejects_malformed_target() {
        assert!(matches!(
            build(terms(&["a"]), Some("not-a-digest"), 10),
            Err(HashcrackError::InvalidDigest(_))
        ));
    }
}
