//! Topics: named subsections of drill material.

pub mod parsing;

use crate::core::error::DomainError;
use crate::core::question_set::QuestionAnswerSet;

/// A parsed file: subsections in file order, each with its questions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topic {
    sections: Vec<(String, QuestionAnswerSet)>,
    orphaned_entries: usize,
}

impl Topic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the questions of a subsection
    pub fn subsection(&self, id: &str) -> Option<&QuestionAnswerSet> {
        self.sections
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, set)| set)
    }

    /// Get a subsection for editing, creating it at the end if missing
    pub fn subsection_mut(&mut self, id: &str) -> &mut QuestionAnswerSet {
        let position = match self.sections.iter().position(|(name, _)| name == id) {
            Some(position) => position,
            None => {
                self.sections
                    .push((id.to_string(), QuestionAnswerSet::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[position].1
    }

    pub fn subsection_count(&self) -> usize {
        self.sections.len()
    }

    /// Subsection ids in file order
    pub fn subsection_names(&self) -> Vec<String> {
        self.sections.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Entries dropped because they appeared before any header
    pub fn orphaned_entries(&self) -> usize {
        self.orphaned_entries
    }

    /// Concatenate the selected subsections, in the order given.
    ///
    /// An empty selection takes every subsection in file order.
    pub fn build_question_set<S: AsRef<str>>(
        &self,
        ids: &[S],
    ) -> Result<QuestionAnswerSet, DomainError> {
        let mut set = QuestionAnswerSet::new();

        if ids.is_empty() {
            set.concatenate(self.sections.iter().map(|(_, s)| s));
            return Ok(set);
        }

        for id in ids {
            let id = id.as_ref();
            let section = self
                .subsection(id)
                .ok_or_else(|| DomainError::UnknownSubsection(id.to_string()))?;
            set.concatenate([section]);
        }
        Ok(set)
    }
}
