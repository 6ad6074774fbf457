use crate::cancel::Interrupt;
use crate::candidates::{generate, GenerationStatus};
use crate::config::CrackConfig;
use crate::error::Result;
use crate::hash::HashFamily;
use crate::wordlist::{load_candidates, save_candidates};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Exit status for a run stopped by Ctrl+C
pub const INTERRUPTED_EXIT_CODE: u8 = 130;

/// States of the crack loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrackState {
    Generating,
    Scanning,
    Generated,
    Cracked,
    Exhausted,
    Interrupted,
}

impl fmt::Display for CrackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrackState::Generating => write!(f, "generating"),
            CrackState::Scanning => write!(f, "scanning"),
            CrackState::Generated => write!(f, "generated"),
            CrackState::Cracked => write!(f, "cracked"),
            CrackState::Exhausted => write!(f, "exhausted"),
            CrackState::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Terminal result of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CrackOutcome {
    /// No target digest: candidates were only generated
    Generated,
    Cracked { plaintext: String, index: usize },
    Exhausted,
    /// Stopped by an interrupt observed while in `during`
    Interrupted { during: CrackState },
}

impl CrackOutcome {
    pub fn state(&self) -> CrackState {
        match self {
            CrackOutcome::Generated => CrackState::Generated,
            CrackOutcome::Cracked { .. } => CrackState::Cracked,
            CrackOutcome::Exhausted => CrackState::Exhausted,
            CrackOutcome::Interrupted { .. } => CrackState::Interrupted,
        }
    }
}

/// What happened when the candidate list was written out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SaveStatus {
    Saved { path: PathBuf, count: usize },
    Failed { path: PathBuf, error: String },
}

/// Everything a front end needs to report a run
#[derive(Debug, Clone, Serialize)]
pub struct CrackReport {
    pub hash: HashFamily,
    pub outcome: CrackOutcome,
    /// Candidates held when the run ended
    pub candidates: usize,
    /// Generation stopped at the candidate limit
    pub capped: bool,
    pub save: SaveStatus,
}

impl CrackReport {
    pub fn is_success(&self) -> bool {
        matches!(
            self.outcome,
            CrackOutcome::Generated | CrackOutcome::Cracked { .. }
        )
    }

    pub fn exit_code(&self) -> u8 {
        match self.outcome {
            CrackOutcome::Generated | CrackOutcome::Cracked { .. } => 0,
            CrackOutcome::Exhausted => 1,
            CrackOutcome::Interrupted { .. } => INTERRUPTED_EXIT_CODE,
        }
    }
}

/// Generate (or preload) candidates and scan them for the target digest
///
/// The candidate list is written to `config.generated_path` on every
/// terminal outcome, including interruption. A failed write is recorded in
/// the report rather than returned as an error. Only configuration and
/// preload failures are returned as `Err`.
pub fn crack<I: Interrupt + ?Sized>(config: &CrackConfig, interrupt: &I) -> Result<CrackReport> {
    let mut capped = false;

    let (candidates, interrupted) = match &config.preload_path {
        Some(path) => {
            let candidates = load_candidates(path)?;
            log::info!("loaded {} candidates from {}", candidates.len(), path.display());
            (candidates, None)
        }
        None => {
            log::debug!("state: {}", CrackState::Generating);
            let generation = generate(&config.key_terms, config.candidate_limit(), interrupt)?;
            match generation.status {
                GenerationStatus::Interrupted => (
                    generation.candidates,
                    Some(CrackOutcome::Interrupted {
                        during: CrackState::Generating,
                    }),
                ),
                GenerationStatus::Capped => {
                    capped = true;
                    log::warn!(
                        "generation stopped at the maximum of {} candidates",
                        config.max_candidates
                    );
                    (generation.candidates, None)
                }
                GenerationStatus::Complete => (generation.candidates, None),
            }
        }
    };

    let outcome = match interrupted {
        Some(outcome) => outcome,
        None => {
            log::debug!("state: {}", CrackState::Scanning);
            scan(config, &candidates, interrupt)
        }
    };
    log::debug!("state: {}", outcome.state());
    if let CrackOutcome::Interrupted { during } = outcome {
        log::warn!(
            "interrupted while {}, saving {} candidates",
            during,
            candidates.len()
        );
    }

    let save = persist(&config.generated_path, &candidates);
    Ok(CrackReport {
        hash: config.hash,
        outcome,
        candidates: candidates.len(),
        capped,
        save,
    })
}

/// Compare each candidate's digest with the target, in order
fn scan<I: Interrupt + ?Sized>(config: &CrackConfig, candidates: &[String], interrupt: &I) -> CrackOutcome {
    let target = match &config.target {
        Some(target) => target,
        None => {
            if interrupt.is_interrupted() {
                return CrackOutcome::Interrupted {
                    during: CrackState::Scanning,
                };
            }
            return CrackOutcome::Generated;
        }
    };

    let start = Instant::now();
    for (index, candidate) in candidates.iter().enumerate() {
        if interrupt.is_interrupted() {
            return CrackOutcome::Interrupted {
                during: CrackState::Scanning,
            };
        }
        if config.hash.digest_hex(candidate) == *target {
            log::info!(
                "match at candidate {} after {:?}",
                index,
                start.elapsed()
            );
            return CrackOutcome::Cracked {
                plaintext: candidate.clone(),
                index,
            };
        }
    }
    log::info!(
        "scanned {} candidates in {:?} without a match",
        candidates.len(),
        start.elapsed()
    );
    CrackOutcome::Exhausted
}

fn persist(path: &Path, candidates: &[String]) -> SaveStatus {
    match save_candidates(path, candidates) {
        Ok(count) => {
            log::info!("saved {} candidates to {}", count, path.display());
            SaveStatus::Saved {
                path: path.to_path_buf(),
                count,
            }
        }
        Err(e) => {
            log::warn!("failed to save candidates to {}: {}", path.display(), e);
            SaveStatus::Failed {
                path: path.to_path_buf(),
                error: e.to_string(),
            }
        }
    }
}
