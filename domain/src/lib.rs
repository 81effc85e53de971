//! Domain layer for qa-drill
//!
//! This crate contains the drill material and the values exchanged during a
//! session. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Question set**: index-aligned questions and answers
//! - **Topic**: a file split into named subsections of questions
//! - **Drill mode**: linear, random or summary
//! - **Drill message**: a tagged question, answer or acknowledgement

pub mod core;
pub mod session;
pub mod topic;

// Re-export commonly used types
pub use core::{error::DomainError, question_set::QuestionAnswerSet};
pub use session::{message::DrillMessage, mode::DrillMode, state::SessionState};
pub use topic::{
    Topic,
    parsing::{TopicParsingParameters, parse_topic},
};
