//! Password generators
//!
//! Four strategies: fully random, alphanumeric, numeric PIN and word-based
//! passphrase. Every strategy takes the random source as an argument, so
//! tests can pass a seeded generator and callers choose how much they trust
//! their randomness. [`GeneratorKind::generate_with_thread_rng`] uses
//! `rand::rng()`, which is a CSPRNG seeded from the operating system.
//!
//! The class-guaranteed strategies seed one character per class, fill the
//! rest from the full pool, then shuffle. This guarantees the classes are
//! present but is not uniform over all strings satisfying that constraint.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use secrecy::SecretString;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const DEFAULT_LENGTH: usize = 16;
pub const DEFAULT_PIN_LENGTH: usize = 6;
pub const DEFAULT_WORD_COUNT: usize = 4;
pub const DEFAULT_SEPARATOR: &str = "-";

/// Upper bound for random and alphanumeric lengths.
pub const MAX_LENGTH: usize = 128;
pub const MIN_PIN_LENGTH: usize = 1;
pub const MAX_PIN_LENGTH: usize = 64;
pub const MIN_WORD_COUNT: usize = 1;
pub const MAX_WORD_COUNT: usize = 32;

const WORDS: [&str; 32] = [
    "correct", "horse", "battery", "staple", "dragon", "wizard", "knight", "castle",
    "forest", "mountain", "river", "ocean", "thunder", "lightning", "phoenix", "eagle",
    "tiger", "lion", "sword", "shield", "armor", "helmet", "crown", "magic",
    "crystal", "diamond", "gold", "silver", "bronze", "iron", "steel", "stone",
];

/// Random password with at least one lowercase, uppercase, digit and symbol.
///
/// `length` is clamped to `4..=MAX_LENGTH`, so the four guaranteed classes
/// always fit.
pub fn generate_random_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> SecretString {
    guaranteed_mix(rng, &[LOWERCASE, UPPERCASE, NUMBERS, SYMBOLS], length)
}

/// Random password of letters and digits with at least one of each class.
///
/// `length` is clamped to `3..=MAX_LENGTH`.
pub fn generate_alphanumeric_password<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
) -> SecretString {
    guaranteed_mix(rng, &[LOWERCASE, UPPERCASE, NUMBERS], length)
}

/// Independent uniform digits; leading zeros allowed.
///
/// `length` is clamped to `MIN_PIN_LENGTH..=MAX_PIN_LENGTH`.
pub fn generate_pin<R: Rng + ?Sized>(rng: &mut R, length: usize) -> SecretString {
    let length = length.clamp(MIN_PIN_LENGTH, MAX_PIN_LENGTH);
    let pin: String = (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();
    SecretString::new(pin.into())
}

/// Capitalized dictionary words joined by `separator`, followed by a number
/// in `0..100`.
///
/// Words are drawn with replacement, so repeats are possible. `word_count`
/// is clamped to `MIN_WORD_COUNT..=MAX_WORD_COUNT`.
pub fn generate_passphrase<R: Rng + ?Sized>(
    rng: &mut R,
    word_count: usize,
    separator: &str,
) -> SecretString {
    let word_count = word_count.clamp(MIN_WORD_COUNT, MAX_WORD_COUNT);
    let words: Vec<String> = (0..word_count)
        .filter_map(|_| WORDS.choose(rng))
        .map(|word| capitalize(word))
        .collect();
    let suffix = rng.random_range(0..100u8);
    SecretString::new(format!("{}{}", words.join(separator), suffix).into())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// One character from each class, the rest from their union, shuffled.
fn guaranteed_mix<R: Rng + ?Sized>(rng: &mut R, classes: &[&[u8]], length: usize) -> SecretString {
    let length = length.clamp(classes.len(), MAX_LENGTH);
    let pool: Vec<u8> = classes.concat();

    let mut password: Vec<u8> = Vec::with_capacity(length);
    password.extend(classes.iter().filter_map(|class| class.choose(rng)));
    while password.len() < length {
        password.push(pool[rng.random_range(0..pool.len())]);
    }
    password.shuffle(rng);

    SecretString::new(password.into_iter().map(char::from).collect::<String>().into())
}

/// Generator strategy together with its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Random { length: usize },
    Alphanumeric { length: usize },
    Passphrase { word_count: usize },
    Pin { length: usize },
}

impl Default for GeneratorKind {
    fn default() -> Self {
        GeneratorKind::random()
    }
}

impl GeneratorKind {
    pub fn random() -> Self {
        GeneratorKind::Random { length: DEFAULT_LENGTH }
    }

    pub fn alphanumeric() -> Self {
        GeneratorKind::Alphanumeric { length: DEFAULT_LENGTH }
    }

    pub fn passphrase() -> Self {
        GeneratorKind::Passphrase { word_count: DEFAULT_WORD_COUNT }
    }

    pub fn pin() -> Self {
        GeneratorKind::Pin { length: DEFAULT_PIN_LENGTH }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GeneratorKind::Random { .. } => "Random",
            GeneratorKind::Alphanumeric { .. } => "Alphanumeric",
            GeneratorKind::Passphrase { .. } => "Passphrase",
            GeneratorKind::Pin { .. } => "PIN",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GeneratorKind::Random { .. } => "Maximum security with all character types",
            GeneratorKind::Alphanumeric { .. } => "Letters and numbers only",
            GeneratorKind::Passphrase { .. } => "Easy-to-remember word combinations",
            GeneratorKind::Pin { .. } => "Numeric codes for simple auth",
        }
    }

    /// Passphrases use the default `-` separator.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretString {
        #[cfg(feature = "tracing")]
        tracing::debug!("generating {} password", self.label());

        match *self {
            GeneratorKind::Random { length } => generate_random_password(rng, length),
            GeneratorKind::Alphanumeric { length } => generate_alphanumeric_password(rng, length),
            GeneratorKind::Passphrase { word_count } => {
                generate_passphrase(rng, word_count, DEFAULT_SEPARATOR)
            }
            GeneratorKind::Pin { length } => generate_pin(rng, length),
        }
    }

    pub fn generate_with_thread_rng(&self) -> SecretString {
        self.generate(&mut rand::rng())
    }
}
