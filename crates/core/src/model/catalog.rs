use serde::Serialize;

use crate::error::CatalogError;
use crate::model::{Rank, Task};

/// Ordered tasks plus the rank ladder they are scored against.
///
/// Always holds at least one task and one rank, and the lowest rank starts at
/// threshold 0, so rank lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    tasks: Vec<Task>,
    ranks: Vec<Rank>,
}

impl Catalog {
    /// Build a custom catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoTasks` or `CatalogError::NoRanks` for empty input,
    /// `CatalogError::FirstRankNotZero` if the lowest rank is above 0, and
    /// `CatalogError::UnorderedRanks` if thresholds are not strictly ascending.
    pub fn new(tasks: Vec<Task>, ranks: Vec<Rank>) -> Result<Self, CatalogError> {
        if tasks.is_empty() {
            return Err(CatalogError::NoTasks);
        }
        let Some(first) = ranks.first() else {
            return Err(CatalogError::NoRanks);
        };
        if first.threshold() != 0 {
            return Err(CatalogError::FirstRankNotZero {
                threshold: first.threshold(),
            });
        }
        if let Some(pair) = ranks
            .windows(2)
            .find(|pair| pair[1].threshold() <= pair[0].threshold())
        {
            return Err(CatalogError::UnorderedRanks {
                title: pair[1].title().to_string(),
            });
        }

        Ok(Self { tasks, ranks })
    }

    /// The five-day English Survival course.
    #[must_use]
    pub fn english_survival() -> Self {
        let tasks = vec![
            Task::new(
                "Present Simple",
                "Present Simple – daily routine",
                "Use this tense for regular actions. Example: I work every day.",
                "Use the following 3 words in sentences: wake, work, drink.",
            )
            .with_examples([
                "I wake up at 6 AM.",
                "She drives to work.",
                "We drink coffee in the morning.",
            ])
            .with_keywords(["wake", "work", "drink"])
            .with_synonyms("wake", ["get up"])
            .with_synonyms("drink", ["have", "sip"]),
            Task::new(
                "Past Simple",
                "Past Simple – actions in the past",
                "Use this tense for completed actions in the past.",
                "Use these 2 words in your sentences: finished, cleaned.",
            )
            .with_examples(["I finished my shift.", "We cleaned the machine."])
            .with_keywords(["finished", "cleaned"])
            .with_synonyms("cleaned", ["washed", "scrubbed"]),
            Task::new(
                "Future Simple",
                "Future Simple – plans and decisions",
                "Use 'will' for future decisions and predictions.",
                "Write 2 sentences using these words: will, check, finish.",
            )
            .with_examples(["I will check the machine.", "They will finish at five."])
            .with_keywords(["will", "check", "finish"])
            .with_synonyms("check", ["inspect"])
            .with_synonyms("finish", ["complete"]),
            Task::new(
                "Present Continuous",
                "Present Continuous – happening now",
                "Use this tense for actions that are happening right now.",
                "Write 2 sentences about what you are doing right now.",
            )
            .with_examples(["I am writing.", "She is fixing the bike."])
            .with_keywords(["am", "is", "-ing"]),
            Task::new(
                "Present Perfect",
                "Present Perfect – past with effect now",
                "Use 'have/has + past participle' for actions with present results.",
                "Use these words in sentences: have, repaired, left.",
            )
            .with_examples(["I have repaired the machine.", "She has left work."])
            .with_keywords(["have", "has", "repaired", "left"])
            .with_synonyms("repaired", ["fixed"])
            .with_synonyms("left", ["gone"]),
        ];

        let ranks = vec![
            Rank::new("Survival Student", 0),
            Rank::new("Grammar Warrior", 50),
            Rank::new("Idiom Master", 100),
            Rank::new("Verb Ninja", 200),
            Rank::new("English Boss", 350),
        ];

        Self { tasks, ranks }
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn task(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Highest rank whose threshold is at or below `score`.
    #[must_use]
    pub fn rank_for(&self, score: u32) -> &Rank {
        self.ranks
            .iter()
            .rev()
            .find(|rank| rank.is_unlocked_by(score))
            .unwrap_or(&self.ranks[0])
    }

    /// Check that every synonym key is one of its task's expected keywords.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::OrphanSynonym` for the first offending key.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for task in &self.tasks {
            if let Some(keyword) = task.orphan_synonym_keys().next() {
                return Err(CatalogError::OrphanSynonym {
                    tense: task.tense().to_string(),
                    keyword: keyword.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english_survival()
    }
}
