//! Run Drill use case
//!
//! Wires one orchestrator, two relays and one publisher through three
//! channels and runs them until the pass limit is exhausted.
//!
//! ```text
//!                 qa ──▶ Relay A ─┐
//! Orchestrator ─┤                 ├──▶ publisher ──▶ Publisher ──▶ writer
//!                 command ▶ Relay B ┘
//! ```
//!
//! The orchestrator runs on the caller's task; the three workers are
//! spawned. Shutdown is driven by the orchestrator dropping its two
//! senders: each relay returns when its inbound channel closes and drops its
//! clone of the publisher sender, so the publisher channel closes once both
//! relays are done. The publisher stops at its own pass limit or at that
//! closure, whichever comes first. If the publisher returns early (a write
//! error), it cancels a token the orchestrator watches, so pacing stops
//! right away instead of running out the remaining passes.

mod orchestrator;
mod publisher;
mod relay;

pub use publisher::{
    ANSWER_PREFIX, PAIR_SEPARATOR, PublisherReport, PublisherSettings, format_answer,
    format_banner, format_count, format_limit_reached, format_question,
};

use crate::config::SessionConfig;
use crate::ports::acknowledgement::AcknowledgementSource;
use crate::ports::index_picker::{IndexPicker, picker_for};
use crate::ports::progress::{DrillProgressNotifier, NoDrillProgress};
use drill_domain::{DrillMessage, DrillMode, QuestionAnswerSet, SessionState};
use orchestrator::Orchestrator;
use std::io;
use thiserror::Error;
use tokio::io::AsyncWrite;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Capacity of every session channel. One slot is the closest tokio offers
/// to an unbuffered hand-off.
const CHANNEL_CAPACITY: usize = 1;

/// Errors that can occur when building or running a session
#[derive(Error, Debug)]
pub enum DrillError {
    #[error("Question set is empty")]
    EmptyQuestionSet,

    #[error("Mode '{0}' does not run a drill")]
    UnsupportedMode(DrillMode),

    #[error("Loop limit must be at least 1")]
    InvalidLimit,

    #[error("Worker failed: {0}")]
    WorkerFailed(String),

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

/// Summary of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillReport {
    /// Full question/answer pairs handed off by the orchestrator
    pub pairs_emitted: usize,
    /// Passes completed by the orchestrator
    pub passes_completed: u32,
    /// Lines read from the input and sent on the command channel
    pub acknowledgements_forwarded: usize,
    /// What the publisher saw
    pub publisher: PublisherReport,
    /// Always [`SessionState::Stopped`] for a session that returned
    pub final_state: SessionState,
}

/// A finished session and the writer it published to
#[derive(Debug)]
pub struct SessionOutput<W> {
    pub report: DrillReport,
    pub writer: W,
}

enum WorkerOutcome<W> {
    Relay {
        name: &'static str,
        forwarded: usize,
    },
    Publisher {
        writer: W,
        result: io::Result<PublisherReport>,
    },
}

/// One drill session over a fixed question set
pub struct DrillSession {
    questions: QuestionAnswerSet,
    config: SessionConfig,
    picker: Box<dyn IndexPicker>,
    state: SessionState,
}

impl DrillSession {
    /// Validate the input and prepare a session in the `Idle` state.
    pub fn new(questions: QuestionAnswerSet, config: SessionConfig) -> Result<Self, DrillError> {
        if questions.is_empty() {
            return Err(DrillError::EmptyQuestionSet);
        }
        if !config.mode.is_drill() {
            return Err(DrillError::UnsupportedMode(config.mode));
        }
        if config.limit == 0 {
            return Err(DrillError::InvalidLimit);
        }

        let picker = picker_for(config.mode, config.seed);
        Ok(Self {
            questions,
            config,
            picker,
            state: SessionState::Idle,
        })
    }

    /// Replace the index picker derived from the mode
    pub fn with_picker(mut self, picker: impl IndexPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    fn transition(&mut self, next: SessionState, progress: &dyn DrillProgressNotifier) {
        let from = self.state;
        if !from.can_transition_to(next) {
            warn!("Unexpected session transition {} -> {}", from, next);
        }
        debug!("Session {} -> {}", from, next);
        self.state = next;
        progress.on_state_change(from, next);
    }

    /// Run the session with default (no-op) progress
    pub async fn run<W>(
        self,
        acknowledgements: &mut dyn AcknowledgementSource,
        writer: W,
    ) -> Result<SessionOutput<W>, DrillError>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        self.run_with_progress(acknowledgements, writer, &NoDrillProgress)
            .await
    }

    /// Run the session with progress callbacks
    pub async fn run_with_progress<W>(
        mut self,
        acknowledgements: &mut dyn AcknowledgementSource,
        writer: W,
        progress: &dyn DrillProgressNotifier,
    ) -> Result<SessionOutput<W>, DrillError>
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (qa_tx, qa_rx) = mpsc::channel::<DrillMessage>(CHANNEL_CAPACITY);
        let (command_tx, command_rx) = mpsc::channel::<DrillMessage>(CHANNEL_CAPACITY);
        let (publisher_tx, publisher_rx) = mpsc::channel::<DrillMessage>(CHANNEL_CAPACITY);

        let settings = PublisherSettings {
            question_count: self.questions.count(),
            limit: self.config.limit,
            color: self.config.color,
        };

        info!(
            "Starting drill: {} questions, mode {}, {} loop(s)",
            settings.question_count, self.config.mode, settings.limit
        );

        // Cancelled when the publisher returns, for whatever reason
        let publisher_gone = CancellationToken::new();

        let mut workers = JoinSet::new();
        workers.spawn({
            let outbound = publisher_tx.clone();
            async move {
                let forwarded = relay::relay("qa", qa_rx, outbound).await;
                WorkerOutcome::Relay {
                    name: "qa",
                    forwarded,
                }
            }
        });
        workers.spawn({
            let publisher_gone = publisher_gone.clone();
            async move {
                let _exit = publisher_gone.drop_guard();
                let mut writer = writer;
                let result = publisher::publish(publisher_rx, &mut writer, settings).await;
                WorkerOutcome::Publisher { writer, result }
            }
        });
        workers.spawn(async move {
            let forwarded = relay::relay("command", command_rx, publisher_tx).await;
            WorkerOutcome::Relay {
                name: "command",
                forwarded,
            }
        });
        self.transition(SessionState::Running, progress);

        let outcome = Orchestrator::new(
            &self.questions,
            &self.config,
            self.picker.as_mut(),
            progress,
            publisher_gone,
        )
        .drive(qa_tx, command_tx, acknowledgements)
        .await;
        self.transition(SessionState::Draining, progress);

        let mut published = None;
        while let Some(joined) = workers.join_next().await {
            match joined {
                Ok(WorkerOutcome::Relay { name, forwarded }) => {
                    debug!("Relay {} joined ({} forwarded)", name, forwarded);
                }
                Ok(WorkerOutcome::Publisher { writer, result }) => {
                    debug!("Publisher joined");
                    published = Some((writer, result));
                }
                Err(e) => {
                    return Err(DrillError::WorkerFailed(e.to_string()));
                }
            }
        }
        self.transition(SessionState::Stopped, progress);

        let (writer, result) = published
            .ok_or_else(|| DrillError::WorkerFailed("publisher did not report".to_string()))?;
        let publisher = result?;

        let report = DrillReport {
            pairs_emitted: outcome.pairs_emitted,
            passes_completed: outcome.passes_completed,
            acknowledgements_forwarded: outcome.acknowledgements_forwarded,
            publisher,
            final_state: self.state,
        };
        info!(
            "Drill finished: {} pairs over {} pass(es)",
            report.pairs_emitted, report.passes_completed
        );

        Ok(SessionOutput { report, writer })
    }
}
