// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! Typed events emitted while a guessing session runs.
//!
//! Events flow through a `tokio::sync::broadcast` channel so any consumer —
//! the terminal renderer, tests, a future dashboard — can subscribe
//! independently. When no subscribers exist, events are silently dropped.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::ImageReference;

/// Every event a guessing session emits. Serialized to JSON for log
/// shipping and machine consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GuessEvent {
    /// A fresh session started; the previous one (if any) was cancelled.
    SessionStarted {
        session: u64,
        reference: ImageReference,
        natural_width: u32,
        steps: usize,
    },
    /// A step's timer fired and its row was appended.
    RowAppended {
        session: u64,
        index: usize,
        pixel_width: u32,
    },
    /// The pixelated preview arrived and was decoded.
    PreviewLoaded {
        session: u64,
        index: usize,
        width: u32,
        height: u32,
    },
    /// The model answered.
    GuessAnswered {
        session: u64,
        index: usize,
        answer: String,
    },
    /// The guess request failed; the row shows an error marker.
    GuessFailed {
        session: u64,
        index: usize,
        error: String,
    },
    /// Every scheduled task of the session has finished.
    SessionComplete { session: u64, rows: usize },
}

/// Sender handle for session events.
pub type EventSender = broadcast::Sender<GuessEvent>;

/// Receiver handle for session events.
pub type EventReceiver = broadcast::Receiver<GuessEvent>;

/// Create the event channel. A session emits a handful of events per row;
/// 256 buffered events covers even very wide pictures.
pub fn channel() -> (EventSender, EventReceiver) {
    broadcast::channel(256)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GuessEvent::GuessAnswered {
            session: 1,
            index: 3,
            answer: "a cat".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("GuessAnswered"));
        assert!(json.contains("a cat"));

        // Roundtrip
        let parsed: GuessEvent = serde_json::from_str(&json).unwrap();
        match parsed {
            GuessEvent::GuessAnswered { index, .. } => assert_eq!(index, 3),
            _ => panic!("wrong variant"),
        }
    }

    #[test]
    fn test_emit_without_subscribers() {
        let (tx, rx) = channel();
        drop(rx);
        // Should not panic; the send error is the caller's to ignore.
        let _ = tx.send(GuessEvent::SessionComplete { session: 1, rows: 0 });
    }

    #[test]
    fn test_subscribe_receive() {
        let (tx, mut rx) = channel();
        let _ = tx.send(GuessEvent::RowAppended {
            session: 2,
            index: 0,
            pixel_width: 8,
        });
        match rx.try_recv().unwrap() {
            GuessEvent::RowAppended { pixel_width, .. } => assert_eq!(pixel_width, 8),
            _ => panic!("wrong event"),
        }
    }
}
