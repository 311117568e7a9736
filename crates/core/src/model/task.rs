use std::collections::BTreeMap;

use serde::Serialize;

/// One grammar lesson: explanatory text, example sentences and the keywords
/// an answer must contain to earn the full award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    tense: String,
    title: String,
    explanation: String,
    prompt: String,
    examples: Vec<String>,
    expected_keywords: Vec<String>,
    acceptable_synonyms: BTreeMap<String, Vec<String>>,
}

impl Task {
    /// Creates a task with no examples, keywords or synonyms.
    #[must_use]
    pub fn new(
        tense: impl Into<String>,
        title: impl Into<String>,
        explanation: impl Into<String>,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            tense: tense.into(),
            title: title.into(),
            explanation: explanation.into(),
            prompt: prompt.into(),
            examples: Vec::new(),
            expected_keywords: Vec::new(),
            acceptable_synonyms: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }

    /// Keywords are stored lowercased; their order drives feedback text.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expected_keywords = keywords
            .into_iter()
            .map(|keyword| keyword.into().to_lowercase())
            .collect();
        self
    }

    /// Adds alternative tokens that also satisfy `keyword`.
    #[must_use]
    pub fn with_synonyms<I, S>(mut self, keyword: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self
            .acceptable_synonyms
            .entry(keyword.into().to_lowercase())
            .or_default();
        entry.extend(synonyms.into_iter().map(|synonym| synonym.into().to_lowercase()));
        self
    }

    #[must_use]
    pub fn tense(&self) -> &str {
        &self.tense
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    #[must_use]
    pub fn expected_keywords(&self) -> &[String] {
        &self.expected_keywords
    }

    /// Synonyms accepted for `keyword`; empty when none are listed.
    #[must_use]
    pub fn synonyms_for(&self, keyword: &str) -> &[String] {
        self.acceptable_synonyms
            .get(keyword)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Synonym keys that are not expected keywords of this task.
    pub fn orphan_synonym_keys(&self) -> impl Iterator<Item = &str> {
        self.acceptable_synonyms
            .keys()
            .filter(|key| !self.expected_keywords.contains(*key))
            .map(String::as_str)
    }
}
