//! Orchestrator: the driving loop of a drill session.

use crate::config::SessionConfig;
use crate::ports::acknowledgement::AcknowledgementSource;
use crate::ports::index_picker::IndexPicker;
use crate::ports::progress::DrillProgressNotifier;
use drill_domain::{DrillMessage, QuestionAnswerSet};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Counters kept by the orchestrator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct OrchestratorOutcome {
    pub pairs_emitted: usize,
    pub passes_completed: u32,
    pub acknowledgements_forwarded: usize,
}

pub(crate) struct Orchestrator<'a> {
    questions: &'a QuestionAnswerSet,
    config: &'a SessionConfig,
    picker: &'a mut dyn IndexPicker,
    progress: &'a dyn DrillProgressNotifier,
    publisher_gone: CancellationToken,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        questions: &'a QuestionAnswerSet,
        config: &'a SessionConfig,
        picker: &'a mut dyn IndexPicker,
        progress: &'a dyn DrillProgressNotifier,
        publisher_gone: CancellationToken,
    ) -> Self {
        Self {
            questions,
            config,
            picker,
            progress,
            publisher_gone,
        }
    }

    /// The pair as presented: `(first, revealed)`.
    fn presented(&self, index: usize) -> Option<(&'a str, &'a str)> {
        let (question, answer) = self.questions.entry(index)?;
        if self.config.reversed {
            Some((answer, question))
        } else {
            Some((question, answer))
        }
    }

    /// Send `message`, giving up once the publisher has exited.
    async fn deliver(&self, tx: &mpsc::Sender<DrillMessage>, message: DrillMessage) -> bool {
        tokio::select! {
            biased;
            _ = self.publisher_gone.cancelled() => false,
            sent = tx.send(message) => sent.is_ok(),
        }
    }

    /// Wait between question and answer.
    ///
    /// `None` when the publisher exited meanwhile, otherwise the line read
    /// in interactive mode (`Some(None)` once input is exhausted or when
    /// pacing by delay).
    async fn pace(
        &self,
        acknowledgements: &mut dyn AcknowledgementSource,
    ) -> Option<Option<String>> {
        if self.config.interactive {
            tokio::select! {
                biased;
                _ = self.publisher_gone.cancelled() => None,
                line = acknowledgements.next_line() => Some(line),
            }
        } else {
            tokio::select! {
                biased;
                _ = self.publisher_gone.cancelled() => None,
                _ = tokio::time::sleep(self.config.wait) => Some(None),
            }
        }
    }

    /// Emit pairs until `limit` passes are done, then close both channels.
    ///
    /// Stops early once the publisher has exited. The set must not be
    /// empty. Both senders are consumed, so the channels are closed exactly
    /// once, when this returns.
    pub async fn drive(
        self,
        qa_tx: mpsc::Sender<DrillMessage>,
        command_tx: mpsc::Sender<DrillMessage>,
        acknowledgements: &mut dyn AcknowledgementSource,
    ) -> OrchestratorOutcome {
        let count = self.questions.count();
        let limit = self.config.limit;
        let mut outcome = OrchestratorOutcome::default();
        let mut full_passes: u32 = 0;
        let mut iteration: usize = 0;

        loop {
            if iteration % count == 0 {
                full_passes += 1;
                if full_passes > limit {
                    debug!("Pass limit of {} reached", limit);
                    break;
                }
                self.progress.on_pass_start(full_passes, limit);
            }

            let index = self.picker.next_index(count);
            let Some((question, answer)) = self.presented(index) else {
                warn!("Index {} out of range for {} questions", index, count);
                break;
            };

            trace!("Presenting index {}", index);
            if !self
                .deliver(&qa_tx, DrillMessage::question(index, question))
                .await
            {
                warn!("Publisher gone before the limit was reached");
                break;
            }

            let Some(line) = self.pace(acknowledgements).await else {
                warn!("Publisher gone before the limit was reached");
                break;
            };
            if let Some(line) = line {
                if !self
                    .deliver(&command_tx, DrillMessage::acknowledgement(line))
                    .await
                {
                    warn!("Publisher gone before the limit was reached");
                    break;
                }
                outcome.acknowledgements_forwarded += 1;
            }

            if !self
                .deliver(&qa_tx, DrillMessage::answer(index, answer))
                .await
            {
                warn!("Publisher gone before the limit was reached");
                break;
            }

            outcome.pairs_emitted += 1;
            self.progress.on_pair_emitted(index);
            iteration += 1;
        }

        outcome.passes_completed = u32::try_from(iteration / count).unwrap_or(u32::MAX);

        // Closing the two inbound channels is the shutdown signal.
        drop(qa_tx);
        drop(command_tx);
        outcome
    }
}
