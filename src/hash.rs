use crate::error::{HashcrackError, Result};
use digest::Digest;
use md5::Md5;
use serde::Serialize;
use sha2::Sha256;
use std::fmt;

/// Hash family used to compare candidates against the target digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HashFamily {
    #[default]
    Sha256,
    Md5,
}

impl HashFamily {
    /// Lowercase hex digest of `text` under this family
    pub fn digest_hex(self, text: &str) -> String {
        match self {
            HashFamily::Sha256 => sha256_hex(text),
            HashFamily::Md5 => md5_hex(text),
        }
    }

    /// Number of hex characters in a digest of this family
    pub fn hex_len(self) -> usize {
        match self {
            HashFamily::Sha256 => 64,
            HashFamily::Md5 => 32,
        }
    }

    /// Validate a user supplied digest and normalize it to lowercase hex
    pub fn normalize_digest(self, digest: &str) -> Result<String> {
        let digest = digest.trim().to_lowercase();
        if digest.len() != self.hex_len() {
            return Err(HashcrackError::InvalidDigest(format!(
                "expected {} hex characters for {}, got {}",
                self.hex_len(),
                self,
                digest.len()
            )));
        }
        hex::decode(&digest).map_err(|e| HashcrackError::InvalidDigest(e.to_string()))?;
        Ok(digest)
    }
}

impl std::str::FromStr for HashFamily {
    type Err = HashcrackError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sha256" => Ok(Self::Sha256),
            "md5" => Ok(Self::Md5),
            _ => Err(HashcrackError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashFamily::Sha256 => write!(f, "sha256"),
            HashFamily::Md5 => write!(f, "md5"),
        }
    }
}

/// SHA-256 of the UTF-8 bytes of `text`, as lowercase hex
pub fn sha256_hex(text: &str) -> String {
    hex::encode(Sha256::digest(text.as_bytes()))
}

/// MD5 of the UTF-8 bytes of `text`, as lowercase hex
pub fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}
