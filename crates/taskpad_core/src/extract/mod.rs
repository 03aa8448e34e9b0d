//! Free-text to task-list extractor.
//!
//! # Responsibility
//! - Turn one unstructured utterance (typed quick-add text or a speech
//!   transcript) into an ordered list of clean, deduplicated task titles.
//!
//! # Invariants
//! - Total over all string inputs: never panics, empty input yields an
//!   empty list.
//! - Output titles are trimmed, non-empty and first-letter capitalized.
//! - Output order is the order fragments first appeared in the utterance.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

// Leading bullet glyphs on list-style input. `â€¢` is U+2022 re-read as
// Latin-1, which some transcription payloads deliver verbatim.
static LEADING_BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[\s\-•]|â€¢)+").expect("valid bullet regex"));

/// Joint markers that cut an utterance into task fragments, in priority
/// order. Connective words carry surrounding spaces so they only match as
/// whole words in already-normalized (single-spaced) text.
const JOINTS: &[&str] = &[",", ";", " and ", " then ", " also ", " next "];

/// Word-set Jaccard similarity above which two fragments are considered the
/// same task. Tolerates transcription stutter without collapsing distinct
/// short tasks that share a word.
const NEAR_DUPLICATE_THRESHOLD: f64 = 0.9;

/// Extracts an ordered, deduplicated list of task titles from free text.
///
/// Pure and stateless; safe to call concurrently. An utterance that is all
/// whitespace or joint punctuation produces an empty list, not an error.
pub fn extract_tasks(utterance: &str) -> Vec<String> {
    let normalized = WHITESPACE_RE
        .replace_all(&utterance.to_lowercase(), " ")
        .trim()
        .to_string();
    if normalized.is_empty() {
        return Vec::new();
    }

    // Each joint is applied across every fragment produced so far, so one
    // utterance can be cut by several different joints in a single pass.
    let mut fragments = vec![normalized];
    for joint in JOINTS {
        fragments = fragments
            .iter()
            .flat_map(|fragment| fragment.split(joint))
            .map(str::to_string)
            .collect();
    }

    let cleaned: Vec<String> = fragments
        .iter()
        .map(|fragment| LEADING_BULLET_RE.replace(fragment, "").trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect();

    let mut unique: Vec<String> = Vec::new();
    for candidate in cleaned {
        let duplicate = unique
            .iter()
            .any(|kept| similarity(kept, &candidate) > NEAR_DUPLICATE_THRESHOLD);
        if !duplicate {
            unique.push(candidate);
        }
    }

    unique.iter().map(|title| capitalize(title)).collect()
}

/// Word-set Jaccard similarity of two fragments.
///
/// Callers only pass non-empty cleaned fragments, so the union is never
/// empty here.
fn similarity(first: &str, second: &str) -> f64 {
    let set_a: HashSet<&str> = first.split_whitespace().collect();
    let set_b: HashSet<&str> = second.split_whitespace().collect();
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

/// Uppercases the first character, leaving the remainder untouched.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
