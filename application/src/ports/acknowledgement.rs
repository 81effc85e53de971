//! Acknowledgement input port
//!
//! In interactive mode the orchestrator blocks on an
//! [`AcknowledgementSource`] between a question and its answer.
//!
//! # Built-in Implementations
//!
//! - [`LineAcknowledgements`] - one line of any `AsyncRead` per acknowledgement
//! - [`NoAcknowledgements`] - always exhausted; used for non-interactive runs

use async_trait::async_trait;
use futures::StreamExt;
use tokio::io::AsyncRead;
use tokio_util::codec::{FramedRead, LinesCodec};
use tracing::warn;

/// Longest acknowledgement line kept in memory, in bytes
pub const MAX_ACKNOWLEDGEMENT_LENGTH: usize = 4096;

/// Source of user acknowledgements.
#[async_trait]
pub trait AcknowledgementSource: Send {
    /// Wait for the next line. `None` once the input is exhausted.
    async fn next_line(&mut self) -> Option<String>;
}

/// Reads acknowledgements line by line from a byte stream.
///
/// Line endings (`\n` or `\r\n`) are stripped. A read error, or a line
/// longer than [`MAX_ACKNOWLEDGEMENT_LENGTH`], ends the stream the same as
/// end of input.
pub struct LineAcknowledgements<R> {
    lines: FramedRead<R, LinesCodec>,
}

impl<R: AsyncRead> LineAcknowledgements<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: FramedRead::new(
                reader,
                LinesCodec::new_with_max_length(MAX_ACKNOWLEDGEMENT_LENGTH),
            ),
        }
    }
}

#[async_trait]
impl<R> AcknowledgementSource for LineAcknowledgements<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn next_line(&mut self) -> Option<String> {
        match self.lines.next().await? {
            Ok(line) => Some(line),
            Err(e) => {
                warn!("Acknowledgement input failed: {}", e);
                None
            }
        }
    }
}

/// Input that is always exhausted
pub struct NoAcknowledgements;

#[async_trait]
impl AcknowledgementSource for NoAcknowledgements {
    async fn next_line(&mut self) -> Option<String> {
        None
    }
}
