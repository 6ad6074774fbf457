/// Lazy cartesian product of per-position choices, concatenated in position order
///
/// The first position varies fastest: for "ab" with case choices this yields
/// ab, Ab, aB, AB. Nothing beyond the current selection is held in memory, so
/// products far too large to collect can still be consumed with `take`.
#[derive(Debug, Clone)]
pub struct Product {
    choices: Vec<Vec<String>>,
    selection: Vec<usize>,
    done: bool,
}

impl Product {
    pub fn new(choices: Vec<Vec<String>>) -> Self {
        let done = choices.iter().any(|c| c.is_empty());
        Self {
            selection: vec![0; choices.len()],
            choices,
            done,
        }
    }

    fn advance(&mut self) {
        let mut i = 0;
        loop {
            if i == self.selection.len() {
                self.done = true;
                return;
            }
            self.selection[i] += 1;
            if self.selection[i] < self.choices[i].len() {
                return;
            }
            self.selection[i] = 0;
            i += 1;
        }
    }
}

impl Iterator for Product {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let joined = self
            .selection
            .iter()
            .zip(&self.choices)
            .map(|(&pick, options)| options[pick].as_str())
            .collect();
        self.advance();
        Some(joined)
    }
}
