//! Keyword/synonym matching for free-text answers.
//!
//! Scoring is all-or-nothing: a full match earns [`PERFECT_AWARD`], anything
//! less (including an empty answer) earns the flat [`PARTIAL_AWARD`].

use std::collections::HashSet;

use serde::Serialize;

use crate::model::Task;

/// Points awarded when every expected keyword is present.
pub const PERFECT_AWARD: u32 = 10;

/// Points awarded for any answer short of a full match.
pub const PARTIAL_AWARD: u32 = 5;

pub const PERFECT_MESSAGE: &str = "Perfect! All required words used correctly.";

/// Lowercase `raw` and split it into maximal runs of word characters
/// (ASCII letters, digits, underscore). Everything else is a separator.
#[must_use]
pub fn tokenize(raw: &str) -> Vec<String> {
    raw.to_lowercase()
        .split(|ch: char| !is_word_char(ch))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Outcome of matching an answer against a task's keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    matched_count: usize,
    missing_keywords: Vec<String>,
}

impl MatchResult {
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    /// Unsatisfied keywords, in catalog order.
    #[must_use]
    pub fn missing_keywords(&self) -> &[String] {
        &self.missing_keywords
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.missing_keywords.is_empty()
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if self.is_perfect() {
            Verdict::Perfect
        } else {
            Verdict::Partial
        }
    }

    /// Learner-facing feedback for this result.
    #[must_use]
    pub fn feedback(&self, task: &Task) -> String {
        match self.verdict() {
            Verdict::Perfect => PERFECT_MESSAGE.to_string(),
            Verdict::Partial => format!(
                "Missing: {}. You should include: {}.",
                self.missing_keywords.join(", "),
                task.expected_keywords().join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Perfect,
    Partial,
}

impl Verdict {
    #[must_use]
    pub fn award(self) -> u32 {
        match self {
            Verdict::Perfect => PERFECT_AWARD,
            Verdict::Partial => PARTIAL_AWARD,
        }
    }
}

/// Match result together with the points and message it earns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub result: MatchResult,
    pub verdict: Verdict,
    pub award: u32,
    pub message: String,
}

/// Match `raw` against `task`.
///
/// A keyword is satisfied when it appears as a token, or when any of its
/// listed synonyms does. No stemming and no partial-token matches.
#[must_use]
pub fn evaluate(raw: &str, task: &Task) -> MatchResult {
    let tokens: HashSet<String> = tokenize(raw).into_iter().collect();

    let mut matched_count = 0;
    let mut missing_keywords = Vec::new();
    for keyword in task.expected_keywords() {
        let direct = tokens.contains(keyword);
        let via_synonym = task
            .synonyms_for(keyword)
            .iter()
            .any(|synonym| tokens.contains(synonym));
        if direct || via_synonym {
            matched_count += 1;
        } else {
            missing_keywords.push(keyword.clone());
        }
    }

    MatchResult {
        matched_count,
        missing_keywords,
    }
}

/// Evaluate and score `raw` against `task`.
#[must_use]
pub fn assess(raw: &str, task: &Task) -> Assessment {
    let result = evaluate(raw, task);
    let verdict = result.verdict();
    let message = result.feedback(task);
    Assessment {
        result,
        verdict,
        award: verdict.award(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Catalog;

    fn task(index: usize) -> Task {
        Catalog::english_survival().tasks()[index].clone()
    }

    #[test]
    fn tokenize_splits_on_non_word_characters() {
        assert_eq!(tokenize("I've"), ["i", "ve"]);
        assert_eq!(tokenize("don't"), ["don", "t"]);
        assert_eq!(
            tokenize("  Hello,   WORLD!! snake_case 42 "),
            ["hello", "world", "snake_case", "42"]
        );
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\n ...").is_empty());
    }

    #[test]
    fn tokenize_treats_non_ascii_letters_as_separators() {
        assert_eq!(tokenize("Café naïve"), ["caf", "na", "ve"]);
        // Kelvin sign lowercases to ASCII `k`.
        assert_eq!(tokenize("\u{212A}"), ["k"]);
    }

    #[test]
    fn full_match_present_simple() {
        let task = task(0);
        let assessment = assess("I wake up, work hard, and drink coffee.", &task);
        assert_eq!(assessment.result.matched_count(), 3);
        assert!(assessment.result.missing_keywords().is_empty());
        assert_eq!(assessment.verdict, Verdict::Perfect);
        assert_eq!(assessment.award, 10);
        assert_eq!(assessment.message, PERFECT_MESSAGE);
    }

    #[test]
    fn synonym_satisfies_keyword() {
        let task = task(1);
        let assessment = assess("I washed the floor.", &task);
        assert_eq!(assessment.result.matched_count(), 1);
        assert_eq!(assessment.result.missing_keywords(), ["finished"]);
        assert_eq!(assessment.award, 5);
        assert_eq!(
            assessment.message,
            "Missing: finished. You should include: finished, cleaned."
        );
    }

    #[test]
    fn empty_input_misses_everything() {
        for task in Catalog::english_survival().tasks() {
            let result = evaluate("", task);
            assert_eq!(result.matched_count(), 0);
            assert_eq!(result.missing_keywords(), task.expected_keywords());
            assert_eq!(result.verdict().award(), PARTIAL_AWARD);
        }
    }

    #[test]
    fn partial_award_is_flat() {
        let task = task(4);
        let three_of_four = assess("I have repaired it and left", &task);
        let one_of_four = assess("I have", &task);
        assert_eq!(three_of_four.result.matched_count(), 3);
        assert_eq!(one_of_four.result.matched_count(), 1);
        assert_eq!(three_of_four.award, one_of_four.award);
    }

    #[test]
    fn matching_is_case_insensitive_and_whole_token() {
        let task = task(2);
        let result = evaluate("I WILL Check it. Finishing later.", &task);
        assert_eq!(result.missing_keywords(), ["finish"]);
    }

    #[test]
    fn multi_word_synonym_never_matches_a_single_token() {
        let task = task(0);
        let result = evaluate("I get up, work and sip tea.", &task);
        assert_eq!(result.missing_keywords(), ["wake"]);
    }

    #[test]
    fn hyphenated_keyword_cannot_be_tokenized() {
        let task = task(3);
        let result = evaluate("I am working and she is -ing", &task);
        assert_eq!(result.missing_keywords(), ["-ing"]);
        assert_eq!(
            result.feedback(&task),
            "Missing: -ing. You should include: am, is, -ing."
        );
    }

    #[test]
    fn matched_count_bounds_and_idempotence() {
        let inputs = [
            "",
            "wake work drink",
            "I finished and scrubbed",
            "will inspect complete",
            "am is",
            "have has fixed gone",
            "random words only",
        ];
        for task in Catalog::english_survival().tasks() {
            for input in inputs {
                let first = evaluate(input, task);
                let second = evaluate(input, task);
                assert_eq!(first, second);
                let expected = task.expected_keywords().len();
                assert!(first.matched_count() <= expected);
                assert_eq!(
                    first.matched_count(),
                    expected - first.missing_keywords().len()
                );
            }
        }
    }
}
