//! Rule-based triage classifier.
//!
//! A pure function over a symptom snapshot. Rules are evaluated in priority
//! order and the first match wins, so a symptom list containing both "fever"
//! and "chest pain" is an EMERGENCY, never mere home-care advice.

use serde::{Deserialize, Serialize};

/// Urgency level of a triage verdict.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum TriageLevel {
    Emergency,
    Urgent,
    Advice,
    Unknown,
}

impl TriageLevel {
    /// Whether this level requires an ambulance dispatch.
    pub fn is_emergency(&self) -> bool {
        matches!(self, TriageLevel::Emergency)
    }
}

/// A triage verdict: urgency level plus advice for the field worker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Triage {
    pub level: TriageLevel,
    pub advice: String,
}

impl Triage {
    fn new(level: TriageLevel, advice: &str) -> Self {
        Self {
            level,
            advice: advice.into(),
        }
    }
}

/// Classify a symptom list into a triage verdict.
///
/// Matching is case-insensitive on whole symptom strings. No side effects and
/// no dependency on the store or the network.
pub fn classify<S: AsRef<str>>(symptoms: &[S]) -> Triage {
    let s: Vec<String> = symptoms
        .iter()
        .map(|x| x.as_ref().trim().to_lowercase())
        .collect();
    let has = |symptom: &str| s.iter().any(|x| x == symptom);

    if has("chest pain") || has("difficulty breathing") {
        Triage::new(TriageLevel::Emergency, "Call ambulance now")
    } else if has("fever") && has("rash") {
        Triage::new(TriageLevel::Urgent, "Visit clinic")
    } else if has("fever") || has("cough") {
        Triage::new(TriageLevel::Advice, "Home care")
    } else {
        Triage::new(TriageLevel::Unknown, "Ask provider")
    }
}

/// Split free-text symptom input into a symptom list.
///
/// Comma-separated, trimmed, empty fragments dropped; original order kept.
pub fn parse_symptoms(text: &str) -> Vec<String> {
    text.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}
