use shared_models::Specialty;

use crate::models::{MatchLevel, MatchResult};
use crate::services::keywords::SPECIALTY_KEYWORDS;

const REASON_KEYWORD_LIMIT: usize = 3;

/// Map a free-text symptom description to a recommended specialty.
///
/// Every keyword of every specialty is tested once for plain substring
/// containment in the lower-cased input, so "childhood" counts as "child".
/// The specialty with the most hits wins; on a tie the one declared first in
/// the keyword table keeps the lead. No hits at all falls back to General
/// Physician. The function is total: every input, including empty text,
/// yields a result.
pub fn match_symptoms(symptoms: &str) -> MatchResult {
    if symptoms.trim_matches(is_blank).is_empty() {
        return MatchResult::empty_input();
    }

    let lowered = symptoms.to_lowercase();

    let mut best: Option<(Specialty, Vec<&'static str>)> = None;
    let mut max_count = 0;

    for (specialty, keywords) in SPECIALTY_KEYWORDS.iter() {
        let matched: Vec<&'static str> = keywords
            .iter()
            .copied()
            .filter(|keyword| lowered.contains(keyword))
            .collect();

        if matched.len() > max_count {
            max_count = matched.len();
            best = Some((*specialty, matched));
        }
    }

    let Some((specialty, matched)) = best else {
        return MatchResult::no_match();
    };

    MatchResult {
        match_level: MatchLevel::from_count(matched.len()),
        recommended_specialty: specialty,
        reason: build_reason(specialty, &matched),
        matched_keywords: matched.into_iter().map(String::from).collect(),
    }
}

/// Whitespace plus the byte-order mark, which browsers also strip when trimming.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn build_reason(specialty: Specialty, matched: &[&str]) -> String {
    let shown = matched
        .iter()
        .take(REASON_KEYWORD_LIMIT)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    let more = if matched.len() > REASON_KEYWORD_LIMIT {
        " and more"
    } else {
        ""
    };

    format!(
        "Based on keywords like \"{}\"{}, a {} is recommended.",
        shown, more, specialty
    )
}
