//! Password scoring sections
//!
//! Each section scores one aspect of the password and reports feedback.
//! Sections run in a fixed order; their deltas are summed and their
//! feedback concatenated in that order.

mod length;
mod pattern;
mod variety;

pub use length::length_section;
pub use pattern::pattern_section;
pub use variety::{variety_section, CharClasses};

/// Password under evaluation, with the facts every section needs.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub text: &'a str,
    /// Length in characters, not bytes.
    pub length: usize,
    pub classes: CharClasses,
}

impl<'a> Candidate<'a> {
    pub fn new(text: &'a str) -> Self {
        Candidate {
            text,
            length: text.chars().count(),
            classes: CharClasses::of(text),
        }
    }
}

/// Score adjustment and feedback produced by one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOutcome {
    pub delta: i64,
    pub feedback: Vec<String>,
}

impl SectionOutcome {
    pub(crate) fn add(&mut self, delta: i64) {
        self.delta += delta;
    }

    pub(crate) fn penalize(&mut self, delta: i64, reason: &str) {
        self.delta -= delta;
        self.feedback.push(reason.to_string());
    }

    pub(crate) fn advise(&mut self, reason: &str) {
        self.feedback.push(reason.to_string());
    }
}

/// Signature shared by all sections.
pub type Section = fn(&Candidate<'_>) -> SectionOutcome;
