use crate::candidates::product::Product;
use crate::candidates::substitution::counterpart;
use std::collections::HashSet;

/// Lazy leet renderings of one string, skipping any already produced
#[derive(Debug, Clone)]
pub struct LeetForms {
    product: Product,
    seen: HashSet<String>,
}

impl Iterator for LeetForms {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for candidate in self.product.by_ref() {
            if self.seen.insert(candidate.clone()) {
                return Some(candidate);
            }
        }
        None
    }
}

/// Lazily yield every leet rendering of `s`
/// Each substitutable character is tried as its counterpart first, then as
/// itself, and earlier characters vary fastest
pub fn leet_forms(s: &str) -> LeetForms {
    let choices = s
        .chars()
        .map(|c| {
            let swapped = counterpart(c);
            if swapped == c {
                vec![c.to_string()]
            } else {
                vec![swapped.to_string(), c.to_string()]
            }
        })
        .collect();
    LeetForms {
        product: Product::new(choices),
        seen: HashSet::new(),
    }
}

/// Generate every leet rendering of `s` (sun -> 5un, sun)
/// Output is deduplicated, keeping first-seen order
pub fn permute_leet(s: &str) -> Vec<String> {
    leet_forms(s).collect()
}
