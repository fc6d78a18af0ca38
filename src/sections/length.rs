//! Length section - rewards longer passwords.

use super::{Candidate, SectionOutcome};

const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

/// Cumulative bonuses: every threshold reached adds its points.
const LENGTH_BONUSES: [(usize, i64); 7] = [
    (8, 15),
    (10, 10),
    (12, 10),
    (14, 10),
    (16, 5),
    (20, 10),
    (24, 5),
];

/// Scores password length and advises on short passwords.
pub fn length_section(candidate: &Candidate<'_>) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();

    for (threshold, bonus) in LENGTH_BONUSES {
        if candidate.length >= threshold {
            outcome.add(bonus);
        }
    }

    if candidate.length < MIN_LENGTH {
        outcome.advise(&format!("Use at least {} characters", MIN_LENGTH));
    } else if candidate.length < RECOMMENDED_LENGTH {
        outcome.advise(&format!(
            "Consider using {}+ characters for better security",
            RECOMMENDED_LENGTH
        ));
    }

    outcome
}
