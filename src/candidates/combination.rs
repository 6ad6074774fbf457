use crate::error::{HashcrackError, Result};

/// Largest key term count a subset bitmask can address
pub const MAX_KEY_TERMS: usize = 63;

/// Lazy iterator over every non-empty subset of the key terms
/// Subsets are visited by ascending bitmask, bit i selecting term i, and each
/// subset is concatenated in original term order with no separator
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    terms: &'a [String],
    mask: u64,
    end: u64,
}

impl<'a> Combinations<'a> {
    /// Fails with `TooManyKeyTerms` past `MAX_KEY_TERMS`
    pub fn new(terms: &'a [String]) -> Result<Self> {
        if terms.len() > MAX_KEY_TERMS {
            return Err(HashcrackError::TooManyKeyTerms(terms.len(), MAX_KEY_TERMS));
        }
        Ok(Self {
            terms,
            mask: 1,
            end: 1u64 << terms.len(),
        })
    }

    /// Total number of subsets this iterator visits (2^n - 1)
    pub fn total(&self) -> u64 {
        self.end - 1
    }
}

impl Iterator for Combinations<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.mask >= self.end {
            return None;
        }
        let mask = self.mask;
        self.mask += 1;

        let joined = self
            .terms
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u64 << i) != 0)
            .map(|(_, term)| term.as_str())
            .collect();
        Some(joined)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.mask).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}

/// Collect every non-empty subset of `terms`, concatenated
pub fn select_combinations(terms: &[String]) -> Result<Vec<String>> {
    Ok(Combinations::new(terms)?.collect())
}
