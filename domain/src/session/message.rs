//! Messages carried on the session channels.

/// One item travelling from the orchestrator to the publisher.
///
/// Each item carries its kind, so the consumer never has to infer whether
/// a value is a question or an answer from its position in the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrillMessage {
    /// Text presented first (the stored answer when reversed)
    Question { index: usize, text: String },
    /// Text revealed after pacing
    Answer { index: usize, text: String },
    /// A line typed by the user to move on
    Acknowledgement(String),
}

impl DrillMessage {
    pub fn question(index: usize, text: impl Into<String>) -> Self {
        DrillMessage::Question {
            index,
            text: text.into(),
        }
    }

    pub fn answer(index: usize, text: impl Into<String>) -> Self {
        DrillMessage::Answer {
            index,
            text: text.into(),
        }
    }

    pub fn acknowledgement(text: impl Into<String>) -> Self {
        DrillMessage::Acknowledgement(text.into())
    }

    /// An item carrying nothing worth delivering.
    ///
    /// Only acknowledgements can be blank: a question or answer is part of
    /// a pair and is delivered even when its text is empty.
    pub fn is_blank(&self) -> bool {
        matches!(self, DrillMessage::Acknowledgement(text) if text.is_empty())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DrillMessage::Question { .. } => "question",
            DrillMessage::Answer { .. } => "answer",
            DrillMessage::Acknowledgement(_) => "acknowledgement",
        }
    }
}
