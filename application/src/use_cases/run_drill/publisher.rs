//! Publisher worker: the single consumer of the shared channel.
//!
//! Turns tagged messages into the transcript:
//!
//! ```text
//! Nb of questions: 3
//! Loop (1/2)
//! Q1
//!      --> A1
//! ---------------------------
//! ...
//! Limit reached. Exiting. Number of loops set to: 2
//! ```

use colored::Colorize;
use drill_domain::DrillMessage;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tracing::debug;

/// Prefix of an answer line
pub const ANSWER_PREFIX: &str = "     --> ";

/// Line printed after every answer
pub const PAIR_SEPARATOR: &str = "---------------------------";

/// What the publisher needs to know about the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublisherSettings {
    /// Number of entries in the set; one pass is this many answers
    pub question_count: usize,
    /// Number of passes to publish
    pub limit: u32,
    /// Colour the loop banner
    pub color: bool,
}

/// What the publisher saw before it returned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublisherReport {
    /// Passes fully published
    pub loops_completed: u32,
    /// Answers published (one per pair)
    pub pairs_published: usize,
    /// Acknowledgements received; never printed
    pub acknowledgements: usize,
    /// Whether the publisher stopped on its own pass limit rather than on
    /// channel closure
    pub limit_reached: bool,
}

pub fn format_count(count: usize) -> String {
    format!("Nb of questions: {}\n", count)
}

pub fn format_banner(current: u32, limit: u32, color: bool) -> String {
    let banner = format!("Loop ({}/{})", current, limit);
    if color {
        format!("{}\n", banner.blue().bold())
    } else {
        format!("{}\n", banner)
    }
}

pub fn format_question(text: &str) -> String {
    format!("{}\n", text)
}

/// Answer line and separator, as one unit
pub fn format_answer(text: &str) -> String {
    format!("{}{}\n{}\n", ANSWER_PREFIX, text, PAIR_SEPARATOR)
}

pub fn format_limit_reached(limit: u32) -> String {
    format!("Limit reached. Exiting. Number of loops set to: {}\n", limit)
}

async fn emit<W: AsyncWrite + Unpin>(writer: &mut W, unit: &str) -> io::Result<()> {
    writer.write_all(unit.as_bytes()).await?;
    writer.flush().await
}

/// Consume `inbound` and write the transcript to `writer`.
///
/// Returns after the limit notice once `limit` passes have been published,
/// without waiting for the channel to close, or as soon as the channel
/// closes, whichever comes first.
pub(crate) async fn publish<W>(
    mut inbound: mpsc::Receiver<DrillMessage>,
    writer: &mut W,
    settings: PublisherSettings,
) -> io::Result<PublisherReport>
where
    W: AsyncWrite + Unpin,
{
    let mut report = PublisherReport::default();
    let mut current_loop = 0;
    let mut answers_read = 0;
    let mut pass_boundary = true;

    emit(writer, &format_count(settings.question_count)).await?;

    loop {
        if pass_boundary {
            pass_boundary = false;
            current_loop += 1;
            if current_loop > settings.limit {
                emit(writer, &format_limit_reached(settings.limit)).await?;
                report.limit_reached = true;
                debug!("Publisher reached its limit of {} loops", settings.limit);
                return Ok(report);
            }
            emit(
                writer,
                &format_banner(current_loop, settings.limit, settings.color),
            )
            .await?;
        }

        let Some(message) = inbound.recv().await else {
            debug!("Publisher channel closed after {} pairs", report.pairs_published);
            return Ok(report);
        };

        match message {
            DrillMessage::Question { text, .. } => {
                emit(writer, &format_question(&text)).await?;
            }
            DrillMessage::Answer { text, .. } => {
                emit(writer, &format_answer(&text)).await?;
                report.pairs_published += 1;
                answers_read += 1;
                if answers_read % settings.question_count == 0 {
                    report.loops_completed += 1;
                    pass_boundary = true;
                }
            }
            DrillMessage::Acknowledgement(text) => {
                report.acknowledgements += 1;
                debug!("Acknowledgement received: {:?}", text);
            }
        }
    }
}
