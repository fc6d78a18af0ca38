//! Password analyzer - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::crack_time;
use crate::denylist::{self, Denylist};
use crate::sections::{length_section, pattern_section, variety_section, Candidate, Section};
use crate::types::{CrackTime, PasswordAnalysis, Score, Strength};

const COMMON_PASSWORD_WARNING: &str = "This is a commonly used password! Change it immediately!";
const ULTIMATE_MESSAGE: &str = "🏆 Ultimate password strength achieved! You are legendary!";
const ALMOST_ULTIMATE_MESSAGE: &str = "Almost ultimate! Try making it 16+ characters with all types";
const EXCELLENT_MESSAGE: &str = "Excellent password!";
const GOOD_MESSAGE: &str = "Good password, but could be stronger";
const FALLBACK_MESSAGE: &str = "Great password!";

const ULTIMATE_MIN_LENGTH: usize = 16;

/// Scoring sections, in feedback order.
const SECTIONS: [(&str, Section); 3] = [
    ("length", length_section),
    ("variety", variety_section),
    ("pattern", pattern_section),
];

/// Analyzes a password against the built-in denylist.
///
/// Total and deterministic: every input, including the empty string,
/// yields a complete analysis.
pub fn analyze(password: &SecretString) -> PasswordAnalysis {
    analyze_with(denylist::builtin(), password.expose_secret())
}

/// Analyzer bound to a specific denylist.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    denylist: Denylist,
}

impl Analyzer {
    pub fn new(denylist: Denylist) -> Self {
        Analyzer { denylist }
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    pub fn analyze(&self, password: &SecretString) -> PasswordAnalysis {
        analyze_with(&self.denylist, password.expose_secret())
    }

    /// Async version that sends the analysis via channel.
    ///
    /// Waits out a short debounce first; if `token` is cancelled by then
    /// (the password changed again), nothing is sent.
    #[cfg(feature = "async")]
    pub async fn analyze_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<PasswordAnalysis>,
    ) {
        use std::time::Duration;

        #[cfg(feature = "tracing")]
        tracing::debug!("analysis is about to start...");

        tokio::time::sleep(Duration::from_millis(300)).await;

        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!("analysis cancelled before start");
            return;
        }

        let analysis = self.analyze(password);

        if let Err(e) = tx.send(analysis).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password analysis result: {}", e);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }
}

/// [`Analyzer::analyze_tx`] with the built-in denylist.
#[cfg(feature = "async")]
pub async fn analyze_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordAnalysis>,
) {
    Analyzer::default().analyze_tx(password, token, tx).await
}

fn analyze_with(list: &Denylist, password: &str) -> PasswordAnalysis {
    let candidate = Candidate::new(password);
    let classes = candidate.classes;

    if list.contains(password) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password rejected: denylisted");

        return PasswordAnalysis {
            strength: Strength::VeryWeak,
            score: Score::MIN,
            length: candidate.length,
            has_lowercase: classes.lowercase,
            has_uppercase: classes.uppercase,
            has_numbers: classes.numbers,
            has_symbols: classes.symbols,
            feedback: vec![COMMON_PASSWORD_WARNING.to_string()],
            is_common_password: true,
            easter_egg: denylist::easter_egg(password),
            time_to_crack: CrackTime::instant(),
        };
    }

    let time_to_crack = crack_time::estimate(candidate.length, &classes);

    let mut raw_score: i64 = 0;
    let mut feedback = Vec::new();

    // Orchestrator: execute sections in sequence
    for (_section_name, section_fn) in SECTIONS {
        let outcome = section_fn(&candidate);

        #[cfg(feature = "tracing")]
        tracing::trace!("section {} delta {}", _section_name, outcome.delta);

        raw_score += outcome.delta;
        feedback.extend(outcome.feedback);
    }

    let score = Score::new(raw_score);
    let variety = classes.count();
    let strength = classify(score, candidate.length, variety);

    if let Some(message) = praise(strength, score) {
        feedback.insert(0, message.to_string());
    }
    if feedback.is_empty() {
        feedback.push(FALLBACK_MESSAGE.to_string());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("analysis complete: strength={} score={}", strength, score);

    PasswordAnalysis {
        strength,
        score,
        length: candidate.length,
        has_lowercase: classes.lowercase,
        has_uppercase: classes.uppercase,
        has_numbers: classes.numbers,
        has_symbols: classes.symbols,
        feedback,
        is_common_password: false,
        easter_egg: None,
        time_to_crack,
    }
}

/// Maps a clamped score onto a strength band. Ultimate overrides the bands.
fn classify(score: Score, length: usize, variety: usize) -> Strength {
    let score = score.value();
    if score > 95 && length >= ULTIMATE_MIN_LENGTH && variety == 4 {
        Strength::Ultimate
    } else if score <= 20 {
        Strength::VeryWeak
    } else if score <= 40 {
        Strength::Weak
    } else if score <= 60 {
        Strength::Fair
    } else if score <= 75 {
        Strength::Good
    } else {
        Strength::Strong
    }
}

fn praise(strength: Strength, score: Score) -> Option<&'static str> {
    match score.value() {
        _ if strength == Strength::Ultimate => Some(ULTIMATE_MESSAGE),
        90.. => Some(ALMOST_ULTIMATE_MESSAGE),
        75.. => Some(EXCELLENT_MESSAGE),
        60.. => Some(GOOD_MESSAGE),
        _ => None,
    }
}
