/// Letter/digit pairs commonly swapped in passwords (h3ll0)
pub const SUBSTITUTIONS: [(char, char); 8] = [
    ('a', '4'),
    ('b', '8'),
    ('e', '3'),
    ('g', '9'),
    ('i', '1'),
    ('o', '0'),
    ('s', '5'),
    ('t', '7'),
];

/// Look up the counterpart of `c` in either direction
/// Returns `c` unchanged when it takes no part in the table
pub fn counterpart(c: char) -> char {
    for &(letter, digit) in SUBSTITUTIONS.iter() {
        if c == letter {
            return digit;
        }
        if c == digit {
            return letter;
        }
    }
    c
}

/// Whether `c` has a counterpart
pub fn is_substitutable(c: char) -> bool {
    counterpart(c) != c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_map_to_digits() {
        assert_eq!(counterpart('a'), '4');
        assert_eq!(counterpart('o'), '0');
        assert_eq!(counterpart('t'), '7');
    }

    #[test]
    fn test_mapping_is_symmetric() {
        for &(letter, digit) in SUBSTITUTIONS.iter() {
            assert_eq!(counterpart(letter), digit);
            assert_eq!(counterpart(digit), letter);
            assert_eq!(counterpart(counterpart(letter)), letter);
        }
    }

    #[test]
    fn test_unmapped_characters_pass_through() {
        for c in ['x', 'q', 'A', 'S', '2', '@', ' ', 'é'] {
            assert_eq!(counterpart(c), c);
            assert!(!is_substitutable(c));
        }
    }

    #[test]
    fn test_table_pairs_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for &(letter, digit) in SUBSTITUTIONS.iter() {
            assert!(seen.insert(letter));
            assert!(seen.insert(digit));
        }
        assert_eq!(seen.len(), 16);
    }
}
