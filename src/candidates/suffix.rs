/// Suffixes appended to candidates, applied in this order
pub const SPECIAL_SUFFIXES: [&str; 15] = [
    "@", "@@", "@@@", "@@@@", "@@@@@",
    "#", "##", "###", "####", "#####",
    "1", "12", "123", "1234", "12345",
];

/// Number of strings `add_specials` produces per input
pub const SPECIALS_PER_CANDIDATE: usize =
    SPECIAL_SUFFIXES.len() + SPECIAL_SUFFIXES.len() * SPECIAL_SUFFIXES.len();

/// Lazily append one suffix, then a second suffix on top of each of those
/// Only the first-order results are extended, so exactly two orders are produced
pub fn specials(s: &str) -> impl Iterator<Item = String> + '_ {
    let first_order = SPECIAL_SUFFIXES.into_iter().map(move |suffix| format!("{}{}", s, suffix));
    let second_order = SPECIAL_SUFFIXES.into_iter().flat_map(move |first| {
        SPECIAL_SUFFIXES
            .into_iter()
            .map(move |second| format!("{}{}{}", s, first, second))
    });
    first_order.chain(second_order)
}

/// Collect every first- and second-order suffixing of `s`
pub fn add_specials(s: &str) -> Vec<String> {
    specials(s).collect()
}
