//! Pattern analysis section - detects repetition, single-class passwords and sequences.

use super::{Candidate, SectionOutcome};

const SEQUENCES: [&str; 12] = [
    "123", "234", "345", "456", "567", "678", "789", "890", "abc", "bcd", "cde", "def",
];

/// Penalizes predictable structure.
pub fn pattern_section(candidate: &Candidate<'_>) -> SectionOutcome {
    let text = candidate.text;
    let mut outcome = SectionOutcome::default();

    if has_repeated_run(text, 3) {
        outcome.penalize(15, "Avoid repeated characters");
    }

    if !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()) {
        outcome.penalize(25, "Don't use only numbers");
    }

    // Letters only costs points but has no dedicated advice.
    if !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic()) {
        outcome.add(-15);
    }

    if has_sequence(text) {
        outcome.penalize(10, "Avoid sequential patterns");
    }

    outcome
}

/// True if any character occurs at least `run` times in a row.
fn has_repeated_run(text: &str, run: usize) -> bool {
    let mut previous = None;
    let mut count = 0;
    for c in text.chars() {
        if Some(c) == previous {
            count += 1;
        } else {
            previous = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}

fn has_sequence(text: &str) -> bool {
    let folded = text.to_ascii_lowercase();
    SEQUENCES.iter().any(|seq| folded.contains(seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(pwd: &str) -> SectionOutcome {
        pattern_section(&Candidate::new(pwd))
    }

    #[test]
    fn test_pattern_section_repeated_chars() {
        let outcome = score("xaaaZ!");
        assert_eq!(outcome.delta, -15);
        assert_eq!(outcome.feedback, vec!["Avoid repeated characters"]);
    }

    #[test]
    fn test_pattern_section_two_repeats_allowed() {
        assert_eq!(score("aabb!!Z9").delta, 0);
    }

    #[test]
    fn test_pattern_section_repeated_symbols_and_unicode() {
        assert!(has_repeated_run("!!!", 3));
        assert!(has_repeated_run("ééé", 3));
        assert!(!has_repeated_run("éèé", 3));
    }

    #[test]
    fn test_pattern_section_digits_only() {
        let outcome = score("97531");
        assert_eq!(outcome.delta, -25);
        assert_eq!(outcome.feedback, vec!["Don't use only numbers"]);
    }

    #[test]
    fn test_pattern_section_letters_only_silent() {
        let outcome = score("HelloWorld");
        assert_eq!(outcome.delta, -15);
        assert!(outcome.feedback.is_empty());
    }

    #[test]
    fn test_pattern_section_sequential_case_insensitive() {
        let outcome = score("xBcD!9");
        assert_eq!(outcome.delta, -10);
        assert_eq!(outcome.feedback, vec!["Avoid sequential patterns"]);
    }

    #[test]
    fn test_pattern_section_sequence_not_in_table() {
        assert!(!has_sequence("xyz!Q7"));
        assert!(!has_sequence("321cba"));
        assert!(has_sequence("9890"));
    }

    #[test]
    fn test_pattern_section_combined_penalties() {
        let outcome = score("1111234");
        assert_eq!(outcome.delta, -50);
        assert_eq!(
            outcome.feedback,
            vec![
                "Avoid repeated characters",
                "Don't use only numbers",
                "Avoid sequential patterns",
            ]
        );
    }

    #[test]
    fn test_pattern_section_empty() {
        assert_eq!(score(""), SectionOutcome::default());
    }

    #[test]
    fn test_pattern_section_strong_password() {
        assert_eq!(score("RandomPass1!@#Word").delta, 0);
    }
}
