//! Analysis result types.

use std::fmt;

/// Strength classification, weakest to strongest.
///
/// The discriminant is the level shown to the user, so a strength and its
/// level cannot disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Strength {
    VeryWeak = 1,
    Weak = 2,
    Fair = 3,
    Good = 4,
    Strong = 5,
    Ultimate = 6,
}

impl Strength {
    pub const ALL: [Strength; 6] = [
        Strength::VeryWeak,
        Strength::Weak,
        Strength::Fair,
        Strength::Good,
        Strength::Strong,
        Strength::Ultimate,
    ];

    /// Level in `1..=6`.
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<Self> {
        Self::ALL.get(usize::from(level).checked_sub(1)?).copied()
    }

    /// Kebab-case identifier, e.g. `very-weak`.
    pub fn as_str(self) -> &'static str {
        match self {
            Strength::VeryWeak => "very-weak",
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Good => "good",
            Strength::Strong => "strong",
            Strength::Ultimate => "ultimate",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Good => "Good",
            Strength::Strong => "Strong",
            Strength::Ultimate => "ULTIMATE",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    /// Clamps a raw (possibly negative or overflowing) score into range.
    pub fn new(raw: i64) -> Self {
        Score(raw.clamp(0, 100) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estimated brute-force time against a 1e9 guesses/second attacker.
#[derive(Debug, Clone, PartialEq)]
pub struct CrackTime {
    pub display: String,
    /// May be fractional below one second, or infinite for very long inputs.
    pub seconds: f64,
}

impl CrackTime {
    pub fn instant() -> Self {
        CrackTime {
            display: "Instantly".to_string(),
            seconds: 0.0,
        }
    }
}

/// Full result of analyzing one password.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordAnalysis {
    pub strength: Strength,
    pub score: Score,
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_numbers: bool,
    pub has_symbols: bool,
    /// Most important message first. Never empty.
    pub feedback: Vec<String>,
    pub is_common_password: bool,
    pub easter_egg: Option<&'static str>,
    pub time_to_crack: CrackTime,
}

impl PasswordAnalysis {
    pub fn level(&self) -> u8 {
        self.strength.level()
    }

    /// Number of character classes present (0..=4).
    pub fn variety_count(&self) -> usize {
        [
            self.has_lowercase,
            self.has_uppercase,
            self.has_numbers,
            self.has_symbols,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}
