//! Character variety section - checks for lowercase, uppercase, numbers, symbols.

use super::{Candidate, SectionOutcome};

const ALL_CLASSES_BONUS: i64 = 15;

/// Which character classes occur in a password.
///
/// Only ASCII letters and digits count as such; everything else,
/// including accented letters, is a symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub fn of(text: &str) -> Self {
        text.chars().fold(CharClasses::default(), |mut acc, c| {
            match c {
                'a'..='z' => acc.lowercase = true,
                'A'..='Z' => acc.uppercase = true,
                '0'..='9' => acc.numbers = true,
                _ => acc.symbols = true,
            }
            acc
        })
    }

    pub fn count(&self) -> usize {
        [self.lowercase, self.uppercase, self.numbers, self.symbols]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// Scores each character class present and names the missing ones.
pub fn variety_section(candidate: &Candidate<'_>) -> SectionOutcome {
    let classes = candidate.classes;
    let mut outcome = SectionOutcome::default();

    let rules = [
        (classes.lowercase, 10, "Add lowercase letters"),
        (classes.uppercase, 10, "Add uppercase letters"),
        (classes.numbers, 10, "Add numbers"),
        (classes.symbols, 15, "Add special characters"),
    ];

    for (present, bonus, advice) in rules {
        if present {
            outcome.add(bonus);
        } else {
            outcome.advise(advice);
        }
    }

    if classes.count() == 4 {
        outcome.add(ALL_CLASSES_BONUS);
    }

    outcome
}
