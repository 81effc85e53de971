//! Parsing of sectioned question files into a [`Topic`].
//!
//! The format is line oriented:
//!
//! ```text
//! ### Lesson 1
//! question;answer
//! another question;an answer; with the separator inside
//! ```
//!
//! A line starting with the announce prefix opens a subsection whose id is
//! the rest of the line. A line containing the separator is an entry: the
//! text before the first separator is the question, everything after it is
//! the answer.

use super::Topic;
use serde::{Deserialize, Serialize};

/// How subsection headers and entries are recognised
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicParsingParameters {
    /// Prefix announcing a subsection, e.g. `"### "`
    pub announce: String,
    /// Separator between question and answer, e.g. `";"`
    pub separator: String,
}

impl Default for TopicParsingParameters {
    fn default() -> Self {
        Self {
            announce: "### ".to_string(),
            separator: ";".to_string(),
        }
    }
}

impl TopicParsingParameters {
    pub fn new(announce: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            announce: announce.into(),
            separator: separator.into(),
        }
    }
}

/// Parse `text` into a topic.
///
/// Entries found before the first header have no subsection to go to; they
/// are dropped and counted in [`Topic::orphaned_entries`].
pub fn parse_topic(text: &str, params: &TopicParsingParameters) -> Topic {
    let mut topic = Topic::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if line.is_empty() {
            continue;
        }

        let entry = if params.separator.is_empty() {
            None
        } else {
            line.split_once(params.separator.as_str())
        };

        match entry {
            Some((question, answer)) => match &current {
                Some(id) => topic.subsection_mut(id).add_entry(question, answer),
                None => topic.orphaned_entries += 1,
            },
            None => {
                if let Some(id) = line.strip_prefix(params.announce.as_str()) {
                    let id = id.trim().to_string();
                    topic.subsection_mut(&id);
                    current = Some(id);
                }
            }
        }
    }

    topic
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> &'static str {
        "
### Lesson 1
1_Question 1;1_Answer 1

### Lesson 2
2_Question 1;2_Answer 1
2_Question 2;2_Answer 2

### Lesson 3
3_Question 1;3_Answer 1
3_Question 2;3_Answer 2
3_Question 3;3_Answer 3
	"
    }

    fn lesson_params() -> TopicParsingParameters {
        TopicParsingParameters::new("### Lesson ", ";")
    }

    #[test]
    fn test_parse_counts_subsections() {
        let topic = parse_topic(sample(), &lesson_params());
        assert_eq!(topic.subsection_count(), 3);
        assert_eq!(topic.subsection_names(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_build_all_and_selected() {
        let topic = parse_topic(sample(), &lesson_params());

        let all = topic.build_question_set::<&str>(&[]).unwrap();
        assert_eq!(all.count(), 6);

        for i in 1..=3 {
            let set = topic.build_question_set(&[i.to_string()]).unwrap();
            assert_eq!(set.count(), i);
        }
    }

    #[test]
    fn test_answer_keeps_extra_separators() {
        let topic = parse_topic("### A\nq;a;b;c\n", &TopicParsingParameters::default());
        let set = topic.subsection("A").unwrap();
        assert_eq!(set.entry(0), Some(("q", "a;b;c")));
    }

    #[test]
    fn test_entries_before_header_are_orphaned() {
        let topic = parse_topic("q0;a0\n### A\nq1;a1\n", &TopicParsingParameters::default());
        assert_eq!(topic.orphaned_entries(), 1);
        assert_eq!(topic.subsection("A").unwrap().count(), 1);
    }

    #[test]
    fn test_repeated_header_reopens_subsection() {
        let text = "### A\nq1;a1\n### B\nq2;a2\n### A\nq3;a3\n";
        let topic = parse_topic(text, &TopicParsingParameters::default());
        assert_eq!(topic.subsection_names(), vec!["A", "B"]);
        assert_eq!(topic.subsection("A").unwrap().count(), 2);
    }

    #[test]
    fn test_plain_text_lines_are_ignored() {
        let text = "Title of the file\n### A\nsome note\nq;a\n";
        let topic = parse_topic(text, &TopicParsingParameters::default());
        assert_eq!(topic.subsection("A").unwrap().count(), 1);
        assert_eq!(topic.orphaned_entries(), 0);
    }

    #[test]
    fn test_crlf_lines() {
        let topic = parse_topic("### A\r\nq;a\r\n", &TopicParsingParameters::default());
        assert_eq!(topic.subsection("A").unwrap().entry(0), Some(("q", "a")));
    }

    #[test]
    fn test_empty_separator_yields_no_entries() {
        let params = TopicParsingParameters::new("### ", "");
        let topic = parse_topic("### A\nq;a\n", &params);
        assert_eq!(topic.subsection("A").unwrap().count(), 0);
    }
}
