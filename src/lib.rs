//! Hashcrack - key-term password candidate generator and digest cracker
//!
//! Builds password candidates from a handful of key terms (names, dates,
//! words) and optionally scans them for a candidate whose md5 or sha256
//! digest matches a target.
//!
//! ## Candidate Pipeline
//!
//! ```text
//! Key terms → Combinations → Case → Leet → Specials → Scan → Save
//! ```
//!
//! - **Combinations**: every non-empty subset of the terms, concatenated in order
//! - **Case**: every upper/lower case rendering
//! - **Leet**: every letter/digit substitution (a↔4, b↔8, e↔3, g↔9, i↔1, o↔0, s↔5, t↔7)
//! - **Specials**: one or two suffixes from `@`..`@@@@@`, `#`..`#####`, `1`..`12345`
//!
//! Every expansion stage runs over all candidates gathered so far, not just the
//! previous stage's output. The list is written out when the run ends, also
//! when it is interrupted.
//!
//! ## Example
//!
//! ```no_run
//! use hashcrack::{crack, md5_hex, CancelToken, CrackConfig, CrackOutcome, HashFamily};
//! use std::path::PathBuf;
//!
//! let config = CrackConfig::new(
//!     HashFamily::Md5,
//!     vec!["sun".into(), "7".into()],
//!     PathBuf::from("generated.txt"),
//!     None,
//!     Some(md5_hex("sun7")),
//!     100_000,
//! ).unwrap();
//!
//! let report = crack(&config, &CancelToken::new()).unwrap();
//! assert_eq!(
//!     report.outcome,
//!     CrackOutcome::Cracked { plaintext: "sun7".into(), index: 2 }
//! );
//! ```

pub mod cancel;
pub mod candidates;
pub mod cli;
pub mod config;
pub mod crack;
pub mod error;
pub mod hash;
pub mod wordlist;

/// Crate version shown in the startup banner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cancel::{install_interrupt_handler, CancelToken, Interrupt};
pub use config::{parse_key_terms, CrackConfig};
pub use crack::{crack, CrackOutcome, CrackReport, CrackState, SaveStatus};
pub use error::{HashcrackError, Result};
pub use hash::{md5_hex, sha256_hex, HashFamily};
