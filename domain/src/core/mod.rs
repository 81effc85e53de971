//! Core domain concepts shared across all subdomains.
//!
//! - [`question_set::QuestionAnswerSet`] - the index-aligned drill material
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod question_set;
