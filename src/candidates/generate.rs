use crate::cancel::Interrupt;
use crate::candidates::{case_forms, leet_forms, specials, Combinations};
use crate::error::Result;
use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Pipeline stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Combinations,
    Case,
    Leet,
    Specials,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Combinations => write!(f, "combinations"),
            Stage::Case => write!(f, "case"),
            Stage::Leet => write!(f, "leet"),
            Stage::Specials => write!(f, "specials"),
        }
    }
}

/// How generation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Complete,
    /// Stopped at the candidate limit
    Capped,
    Interrupted,
}

/// Candidates added by one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageSummary {
    pub stage: Stage,
    pub added: usize,
}

/// Result of running the candidate pipeline
#[derive(Debug, Clone)]
pub struct Generation {
    pub candidates: Vec<String>,
    pub status: GenerationStatus,
    pub stages: Vec<StageSummary>,
}

/// Candidates appended between interrupt polls inside one expansion
pub const INTERRUPT_POLL_INTERVAL: usize = 4096;

/// Bounded, append-only candidate list
struct Accumulator {
    candidates: Vec<String>,
    limit: usize,
}

impl Accumulator {
    /// Append from `items` until it runs dry, the limit is hit or an
    /// interrupt is seen. Returns the status generation must stop with, if any
    fn feed<I, It>(&mut self, items: It, interrupt: &I) -> Option<GenerationStatus>
    where
        I: Interrupt + ?Sized,
        It: Iterator<Item = String>,
    {
        let mut appended = 0usize;
        for item in items {
            if self.candidates.len() >= self.limit {
                if interrupt.is_interrupted() {
                    return Some(GenerationStatus::Interrupted);
                }
                return Some(GenerationStatus::Capped);
            }
            self.candidates.push(item);
            appended += 1;
            if appended % INTERRUPT_POLL_INTERVAL == 0 && interrupt.is_interrupted() {
                return Some(GenerationStatus::Interrupted);
            }
        }
        None
    }

    fn finish(self, status: GenerationStatus, stages: Vec<StageSummary>) -> Generation {
        Generation {
            candidates: self.candidates,
            status,
            stages,
        }
    }
}

type Expansion = fn(&str) -> Box<dyn Iterator<Item = String> + '_>;

fn expand_case(s: &str) -> Box<dyn Iterator<Item = String> + '_> {
    Box::new(case_forms(s))
}

fn expand_leet(s: &str) -> Box<dyn Iterator<Item = String> + '_> {
    Box::new(leet_forms(s))
}

fn expand_specials(s: &str) -> Box<dyn Iterator<Item = String> + '_> {
    Box::new(specials(s))
}

/// Run the full pipeline: combinations, then case, leet and special suffixes
///
/// Each expansion stage walks every candidate present when the stage starts,
/// so leet and suffix expansion also apply to the results of all earlier
/// stages, not only the one before. At most `limit` candidates are kept, and
/// expansions are produced lazily so nothing past the limit is built.
/// `interrupt` is polled before every stage, before each candidate is
/// expanded, every `INTERRUPT_POLL_INTERVAL` candidates inside an expansion
/// and once more before stopping at the limit. On interruption the
/// candidates gathered so far are returned.
pub fn generate<I: Interrupt + ?Sized>(
    terms: &[String],
    limit: usize,
    interrupt: &I,
) -> Result<Generation> {
    let combinations = Combinations::new(terms)?;
    let mut acc = Accumulator {
        candidates: Vec::new(),
        limit,
    };
    let mut stages = Vec::with_capacity(4);

    if interrupt.is_interrupted() {
        return Ok(acc.finish(GenerationStatus::Interrupted, stages));
    }
    let start = Instant::now();
    for combo in combinations {
        if interrupt.is_interrupted() {
            return Ok(acc.finish(GenerationStatus::Interrupted, stages));
        }
        if let Some(status) = acc.feed(std::iter::once(combo), interrupt) {
            return Ok(acc.finish(status, stages));
        }
    }
    stages.push(StageSummary {
        stage: Stage::Combinations,
        added: acc.candidates.len(),
    });
    log::info!(
        "{}: {} candidates in {:?}",
        Stage::Combinations,
        acc.candidates.len(),
        start.elapsed()
    );

    let expansions: [(Stage, Expansion); 3] = [
        (Stage::Case, expand_case),
        (Stage::Leet, expand_leet),
        (Stage::Specials, expand_specials),
    ];

    for (stage, expand) in expansions {
        if interrupt.is_interrupted() {
            return Ok(acc.finish(GenerationStatus::Interrupted, stages));
        }
        let start = Instant::now();
        let sources = acc.candidates.len();
        for i in 0..sources {
            if interrupt.is_interrupted() {
                return Ok(acc.finish(GenerationStatus::Interrupted, stages));
            }
            let source = acc.candidates[i].clone();
            if let Some(status) = acc.feed(expand(&source), interrupt) {
                if status == GenerationStatus::Capped {
                    log::info!("{}: candidate limit of {} reached", stage, limit);
                }
                return Ok(acc.finish(status, stages));
            }
        }
        let added = acc.candidates.len() - sources;
        stages.push(StageSummary { stage, added });
        log::info!(
            "{}: expanded {} sources into {} candidates ({} total) in {:?}",
            stage,
            sources,
            added,
            acc.candidates.len(),
            start.elapsed()
        );
    }

    Ok(acc.finish(GenerationStatus::Complete, stages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancel::CancelToken;
    use std::cell::Cell;

    /// Reports an interruption after a fixed number of polls
    struct TripAfter(Cell<usize>);

    impl Interrupt for TripAfter {
        fn is_interrupted(&self) -> bool {
            let left = self.0.get();
            if left == 0 {
                return true;
            }
            self.0.set(left - 1);
            false
        }
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_term_counts() {
        let gen = generate(&terms(&["xq"]), usize::MAX, &CancelToken::new()).unwrap();
        assert_eq!(gen.status, GenerationStatus::Complete);
        // 1 base, 4 case forms, 5 leet (no substitutions), 10 * 240 specials
        assert_eq!(gen.candidates.len(), 1 + 4 + 5 + 2400);
        assert_eq!(
            gen.stages,
            vec![
                StageSummary { stage: Stage::Combinations, added: 1 },
                StageSummary { stage: Stage::Case, added: 4 },
                StageSummary { stage: Stage::Leet, added: 5 },
                StageSummary { stage: Stage::Specials, added: 2400 },
            ]
        );
        assert_eq!(&gen.candidates[..5], &["xq", "xq", "Xq", "xQ", "XQ"]);
    }

    #[test]
    fn test_stages_expand_accumulated_history() {
        let gen = generate(&terms(&["sun", "7"]), usize::MAX, &CancelToken::new()).unwrap();
        assert_eq!(gen.status, GenerationStatus::Complete);
        let added: Vec<usize> = gen.stages.iter().map(|s| s.added).collect();
        // leet covers bases and case forms: 8 + 12 + 4 + 48
        assert_eq!(added, vec![3, 26, 72, 101 * 240]);
        assert_eq!(gen.candidates.len(), 3 + 26 + 72 + 101 * 240);
        assert_eq!(&gen.candidates[..3], &["sun", "7", "sun7"]);
        // leet of the first base follows the 29 base and case entries
        assert_eq!(&gen.candidates[29..31], &["5un", "sun"]);
        assert_eq!(gen.candidates[101], "sun@");
    }

    #[test]
    fn test_limit_truncates() {
        let full = generate(&terms(&["sun", "7"]), usize::MAX, &CancelToken::new()).unwrap();
        let capped = generate(&terms(&["sun", "7"]), 50, &CancelToken::new()).unwrap();
        assert_eq!(capped.status, GenerationStatus::Capped);
        assert_eq!(capped.candidates.len(), 50);
        assert_eq!(&capped.candidates[..], &full.candidates[..50]);
    }

    #[test]
    fn test_limit_inside_combinations() {
        let capped = generate(&terms(&["a", "b", "c"]), 2, &CancelToken::new()).unwrap();
        assert_eq!(capped.status, GenerationStatus::Capped);
        assert_eq!(capped.candidates, vec!["a", "b"]);
        assert!(capped.stages.is_empty());
    }

    #[test]
    fn test_exact_limit_is_complete() {
        let gen = generate(&terms(&["xq"]), 2410, &CancelToken::new()).unwrap();
        assert_eq!(gen.status, GenerationStatus::Complete);
        assert_eq!(gen.candidates.len(), 2410);
    }

    #[test]
    fn test_interrupted_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let gen = generate(&terms(&["sun"]), usize::MAX, &token).unwrap();
        assert_eq!(gen.status, GenerationStatus::Interrupted);
        assert!(gen.candidates.is_empty());
    }

    #[test]
    fn test_interrupted_between_stages() {
        // 1 + 3 polls for combinations, 1 + 3 for case, then the leet stage poll trips
        let gen = generate(&terms(&["sun", "7"]), usize::MAX, &TripAfter(Cell::new(8))).unwrap();
        assert_eq!(gen.status, GenerationStatus::Interrupted);
        assert_eq!(gen.candidates.len(), 29);
        assert_eq!(gen.stages.len(), 2);
        assert!(!gen.candidates.contains(&"5un".to_string()));
        assert!(gen.candidates.iter().all(|c| !c.contains('@')));
    }

    #[test]
    fn test_interrupted_mid_stage_keeps_whole_expansions() {
        // Trips after the first case expansion
        let gen = generate(&terms(&["sun", "7"]), usize::MAX, &TripAfter(Cell::new(6))).unwrap();
        assert_eq!(gen.status, GenerationStatus::Interrupted);
        assert_eq!(gen.candidates.len(), 3 + 8);
        assert_eq!(gen.candidates[3..], crate::candidates::permute_case("sun")[..]);
    }

    #[test]
    fn test_long_term_stops_at_limit() {
        // 2^38 case forms are never built
        let term = "abcdefghijklmnopqrstuvwxyzabcdefghijkl";
        let gen = generate(&terms(&[term]), 5, &CancelToken::new()).unwrap();
        assert_eq!(gen.status, GenerationStatus::Capped);
        assert_eq!(gen.candidates.len(), 5);
        assert_eq!(gen.candidates[0], term);
        assert_eq!(gen.candidates[1], term);
        assert_eq!(gen.candidates[2], format!("A{}", &term[1..]));
        assert_eq!(gen.candidates[4], format!("AB{}", &term[2..]));
        assert!(gen.stages.is_empty());
    }

    #[test]
    fn test_interrupt_wins_over_limit() {
        // Polls: before combinations, one combination, before case, one source.
        // The flag is set by the time the limit is reached
        let gen = generate(&terms(&["ab"]), 2, &TripAfter(Cell::new(4))).unwrap();
        assert_eq!(gen.status, GenerationStatus::Interrupted);
        assert_eq!(gen.candidates, vec!["ab", "ab"]);

        let gen = generate(&terms(&["ab"]), 2, &CancelToken::new()).unwrap();
        assert_eq!(gen.status, GenerationStatus::Capped);
    }

    #[test]
    fn test_interrupted_inside_long_expansion() {
        let term = "abcdefghijklmnopqrst";
        let gen = generate(&terms(&[term]), usize::MAX, &TripAfter(Cell::new(4))).unwrap();
        assert_eq!(gen.status, GenerationStatus::Interrupted);
        assert_eq!(gen.candidates.len(), 1 + INTERRUPT_POLL_INTERVAL);
        assert_eq!(gen.stages.len(), 1);
    }

    #[test]
    fn test_too_many_terms_is_an_error() {
        let many: Vec<String> = (0..64).map(|i| i.to_string()).collect();
        assert!(matches!(
            generate(&many, 10, &CancelToken::new()),
            Err(crate::error::HashcrackError::TooManyKeyTerms(64, 63))
        ));
    }
}
