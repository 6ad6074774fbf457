use crate::candidates::product::Product;

/// Lazily yield every upper/lower case rendering of `s`
/// Lower case is tried before upper case, and earlier characters vary fastest
pub fn case_forms(s: &str) -> Product {
    let choices = s
        .chars()
        .map(|c| vec![c.to_lowercase().to_string(), c.to_uppercase().to_string()])
        .collect();
    Product::new(choices)
}

/// Generate every upper/lower case rendering of `s`
/// Produces exactly 2^n strings for n characters; caseless characters
/// yield repeated renderings, which are kept
pub fn permute_case(s: &str) -> Vec<String> {
    case_forms(s).collect()
}
