//! Relay worker: one inbound channel into the shared publisher channel.

use drill_domain::DrillMessage;
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Forward every non-blank message from `inbound` to `outbound` until
/// `inbound` is closed. Returns the number of forwarded messages.
///
/// The relay never closes `outbound` itself: it owns one sender clone and
/// releases it on return. The shared channel closes once every relay has
/// returned.
///
/// If the publisher has already gone away, the relay keeps draining
/// `inbound` so upstream sends never block, and discards what it reads.
pub(crate) async fn relay(
    name: &'static str,
    mut inbound: mpsc::Receiver<DrillMessage>,
    outbound: mpsc::Sender<DrillMessage>,
) -> usize {
    let mut forwarded = 0;
    let mut sink_open = true;

    while let Some(message) = inbound.recv().await {
        if message.is_blank() {
            trace!("Relay {} dropped blank {}", name, message.kind());
            continue;
        }
        if !sink_open {
            trace!("Relay {} discarded {} after publisher exit", name, message.kind());
            continue;
        }
        if outbound.send(message).await.is_err() {
            debug!("Relay {}: publisher channel closed, draining", name);
            sink_open = false;
            continue;
        }
        forwarded += 1;
    }

    debug!("Relay {} finished after forwarding {} messages", name, forwarded);
    forwarded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc::error::TryRecvError;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_forwards_in_order_and_drops_blank() {
        let (in_tx, in_rx) = mpsc::channel(1);
        let (out_tx, mut out_rx) = mpsc::channel(8);
        let keep_alive = out_tx.clone();

        let handle = tokio::spawn(relay("qa", in_rx, out_tx));

        in_tx.send(DrillMessage::question(0, "Q1")).await.unwrap();
        in_tx.send(DrillMessage::acknowledgement("")).await.unwrap();
        in_tx.send(DrillMessage::answer(0, "")).await.unwrap();
        drop(in_tx);

        let forwarded = timeout(Duration::from_secs(5), handle)
            .await
            .expect("relay did not return")
            .unwrap();
        assert_eq!(forwarded, 2);

        assert_eq!(out_rx.recv().await, Some(DrillMessage::question(0, "Q1")));
        assert_eq!(out_rx.recv().await, Some(DrillMessage::answer(0, "")));

        // The relay released its sender without closing the shared channel.
        assert_eq!(out_rx.try_recv(), Err(TryRecvError::Empty));
        drop(keep_alive);
        assert_eq!(out_rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_returns_when_inbound_closes_with_idle_consumer() {
        let (in_tx, in_rx) = mpsc::channel::<DrillMessage>(1);
        let (out_tx, _out_rx) = mpsc::channel(1);

        let handle = tokio::spawn(relay("command", in_rx, out_tx));
        drop(in_tx);

        let forwarded = timeout(Duration::from_secs(5), handle)
            .await
            .expect("relay did not return")
            .unwrap();
        assert_eq!(forwarded, 0);
    }

    #[tokio::test]
    async fn test_keeps_draining_after_publisher_exit() {
        let (in_tx, in_rx) = mpsc::channel(1);
        let (out_tx, out_rx) = mpsc::channel(1);
        drop(out_rx);

        let handle = tokio::spawn(relay("qa", in_rx, out_tx));

        for i in 0..5 {
            timeout(
                Duration::from_secs(5),
                in_tx.send(DrillMessage::question(i, "Q")),
            )
            .await
            .expect("upstream send blocked")
            .unwrap();
        }
        drop(in_tx);

        let forwarded = timeout(Duration::from_secs(5), handle)
            .await
            .expect("relay did not return")
            .unwrap();
        assert_eq!(forwarded, 0);
    }
}
