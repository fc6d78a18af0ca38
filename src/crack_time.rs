//! Brute-force crack time estimate.

use crate::sections::CharClasses;
use crate::types::CrackTime;

const GUESSES_PER_SECOND: f64 = 1_000_000_000.0;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const MONTH: f64 = 2_592_000.0;
const YEAR: f64 = 31_536_000.0;
const CENTURY: f64 = 3_153_600_000.0;
const MILLENNIA_CUTOFF: f64 = 3_153_600_000_000.0;

/// Size of the alphabet an attacker would have to search.
fn char_space(classes: &CharClasses) -> u32 {
    let space: u32 = [
        (classes.lowercase, 26u32),
        (classes.uppercase, 26),
        (classes.numbers, 10),
        (classes.symbols, 32),
    ]
    .into_iter()
    .filter_map(|(present, size)| present.then_some(size))
    .sum();

    if space == 0 { 26 } else { space }
}

/// Estimates exhaustive-search time for a password of `length` characters.
pub fn estimate(length: usize, classes: &CharClasses) -> CrackTime {
    if length == 0 {
        return CrackTime::instant();
    }

    let exponent = i32::try_from(length).unwrap_or(i32::MAX);
    let combinations = f64::from(char_space(classes)).powi(exponent);
    let seconds = combinations / GUESSES_PER_SECOND;

    CrackTime {
        display: format_duration(seconds),
        seconds,
    }
}

fn format_duration(seconds: f64) -> String {
    if seconds < 1.0 {
        "Instantly".to_string()
    } else if seconds < MINUTE {
        format!("{} seconds", seconds.round())
    } else if seconds < HOUR {
        counted(seconds / MINUTE, "minute", "minutes")
    } else if seconds < DAY {
        counted(seconds / HOUR, "hour", "hours")
    } else if seconds < MONTH {
        counted(seconds / DAY, "day", "days")
    } else if seconds < YEAR {
        counted(seconds / MONTH, "month", "months")
    } else if seconds < CENTURY {
        counted(seconds / YEAR, "year", "years")
    } else if seconds < MILLENNIA_CUTOFF {
        counted(seconds / CENTURY, "century", "centuries")
    } else {
        "Millions of years".to_string()
    }
}

fn counted(value: f64, singular: &str, plural: &str) -> String {
    let n = value.round();
    if n == 1.0 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(pwd: &str) -> CharClasses {
        CharClasses::of(pwd)
    }

    #[test]
    fn test_empty_is_instant() {
        let time = estimate(0, &CharClasses::default());
        assert_eq!(time, CrackTime::instant());
    }

    #[test]
    fn test_char_space() {
        assert_eq!(char_space(&classes("a")), 26);
        assert_eq!(char_space(&classes("aA")), 52);
        assert_eq!(char_space(&classes("aA1")), 62);
        assert_eq!(char_space(&classes("aA1!")), 94);
        assert_eq!(char_space(&classes("1")), 10);
        assert_eq!(char_space(&CharClasses::default()), 26);
    }

    #[test]
    fn test_short_password_is_instant_but_fractional() {
        let time = estimate(6, &classes("1"));
        assert_eq!(time.display, "Instantly");
        assert!((time.seconds - 0.001).abs() < 1e-12);
    }

    #[test]
    fn test_seconds_band() {
        // 10^10 / 1e9 = 10 seconds
        let time = estimate(10, &classes("1"));
        assert_eq!(time.display, "10 seconds");
        assert!((time.seconds - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_lowercase_eight_chars() {
        // 26^8 / 1e9 ≈ 208.8 s
        let time = estimate(8, &classes("a"));
        assert_eq!(time.display, "3 minutes");
    }

    #[test]
    fn test_format_bands() {
        assert_eq!(format_duration(0.5), "Instantly");
        assert_eq!(format_duration(1.0), "1 seconds");
        assert_eq!(format_duration(59.4), "59 seconds");
        assert_eq!(format_duration(60.0), "1 minute");
        assert_eq!(format_duration(150.0), "3 minutes");
        assert_eq!(format_duration(3_600.0), "1 hour");
        assert_eq!(format_duration(7_200.0), "2 hours");
        assert_eq!(format_duration(86_400.0), "1 day");
        assert_eq!(format_duration(2_592_000.0), "1 month");
        assert_eq!(format_duration(5_184_000.0), "2 months");
        assert_eq!(format_duration(31_536_000.0), "1 year");
        assert_eq!(format_duration(3_153_600_000.0), "1 century");
        assert_eq!(format_duration(6_307_200_000.0), "2 centuries");
        assert_eq!(format_duration(3_153_600_000_000.0), "Millions of years");
    }

    #[test]
    fn test_rounding_into_plural() {
        // 89 s rounds to 1 minute, 90 s rounds to 2
        assert_eq!(format_duration(89.0), "1 minute");
        assert_eq!(format_duration(90.0), "2 minutes");
    }

    #[test]
    fn test_huge_length_saturates() {
        let time = estimate(10_000, &classes("aA1!"));
        assert_eq!(time.display, "Millions of years");
        assert!(time.seconds.is_infinite());
    }
}
