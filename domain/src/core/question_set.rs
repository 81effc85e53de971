//! Question/answer set value object

use serde::{Deserialize, Serialize};

/// Index-aligned questions and answers (Value Object)
///
/// `questions[i]` is always paired with `answers[i]`. Both sequences only
/// grow together through [`QuestionAnswerSet::add_entry`] and
/// [`QuestionAnswerSet::concatenate`], so their lengths never diverge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswerSet {
    questions: Vec<String>,
    answers: Vec<String>,
}

impl QuestionAnswerSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one question with its answer
    pub fn add_entry(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.questions.push(question.into());
        self.answers.push(answer.into());
    }

    /// Append the entries of other sets, in order. Duplicates are kept.
    pub fn concatenate<'a>(&mut self, others: impl IntoIterator<Item = &'a QuestionAnswerSet>) {
        for other in others {
            self.extend(other.iter());
        }
    }

    /// Number of entries (0 when empty)
    pub fn count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the `(question, answer)` pair at `index`
    pub fn entry(&self, index: usize) -> Option<(&str, &str)> {
        let question = self.questions.get(index)?;
        let answer = self.answers.get(index)?;
        Some((question.as_str(), answer.as_str()))
    }

    /// Iterate over `(question, answer)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.questions
            .iter()
            .zip(self.answers.iter())
            .map(|(q, a)| (q.as_str(), a.as_str()))
    }
}

impl<Q, A> Extend<(Q, A)> for QuestionAnswerSet
where
    Q: Into<String>,
    A: Into<String>,
{
    fn extend<I: IntoIterator<Item = (Q, A)>>(&mut self, pairs: I) {
        for (question, answer) in pairs {
            self.add_entry(question, answer);
        }
    }
}

impl<Q, A> FromIterator<(Q, A)> for QuestionAnswerSet
where
    Q: Into<String>,
    A: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (Q, A)>>(pairs: I) -> Self {
        let mut set = Self::new();
        set.extend(pairs);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_set_is_empty() {
        let set = QuestionAnswerSet::new();
        assert_eq!(set.count(), 0);
        assert!(set.is_empty());
        assert!(set.entry(0).is_none());
    }

    #[test]
    fn test_add_entry_keeps_pairs_aligned() {
        let mut set = QuestionAnswerSet::new();
        set.add_entry("question-1", "answer-1");
        assert_eq!(set.count(), 1);
        set.add_entry("question-2", "answer-2");
        assert_eq!(set.count(), 2);
        assert_eq!(set.entry(1), Some(("question-2", "answer-2")));
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_concatenate_appends_in_order() {
        let mut set = QuestionAnswerSet::from_iter([("question", "answer")]);
        let other = QuestionAnswerSet::from_iter([("q1", "a1"), ("q2", "a2")]);

        set.concatenate([&other]);

        assert_eq!(set.count(), 3);
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs, vec![("question", "answer"), ("q1", "a1"), ("q2", "a2")]);
    }

    #[test]
    fn test_concatenate_keeps_duplicates() {
        let other = QuestionAnswerSet::from_iter([("q", "a")]);
        let mut set = QuestionAnswerSet::new();
        set.concatenate([&other, &other]);
        assert_eq!(set.count(), 2);
    }

    #[test]
    fn test_concatenate_empty_is_noop() {
        let mut set = QuestionAnswerSet::from_iter([("q", "a")]);
        set.concatenate([&QuestionAnswerSet::new()]);
        assert_eq!(set.count(), 1);
    }
}
