// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering: live event printing and the final table dump.

use pixelguess::conversation::Conversation;
use pixelguess::events::{EventReceiver, GuessEvent};
use pixelguess::samples::SampleGallery;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Subscribe to session events and print each one as it arrives. The
/// returned handle never finishes on its own; abort it once the session
/// is drained.
pub fn spawn_printer(mut rx: EventReceiver) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(event) => print_event(&event),
                Err(RecvError::Lagged(skipped)) => {
                    eprintln!("  (renderer lagged, {skipped} events skipped)");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}

fn print_event(event: &GuessEvent) {
    match event {
        GuessEvent::SessionStarted {
            reference,
            natural_width,
            steps,
            ..
        } => {
            println!("Guessing over {reference} (natural width {natural_width}px, {steps} steps)");
        }
        GuessEvent::RowAppended {
            index, pixel_width, ..
        } => {
            println!("  [{index:>2}] requested {pixel_width}px — let me guess...");
        }
        GuessEvent::PreviewLoaded {
            index,
            width,
            height,
            ..
        } => {
            println!("  [{index:>2}] preview {width}x{height}");
        }
        GuessEvent::GuessAnswered { index, answer, .. } => {
            println!("  [{index:>2}] guess: {answer}");
        }
        GuessEvent::GuessFailed { index, error, .. } => {
            println!("  [{index:>2}] guess failed: {error}");
        }
        GuessEvent::SessionComplete { rows, .. } => {
            println!("Session complete ({rows} rows)");
        }
    }
}

/// Dump the finished conversation as a table.
pub fn print_conversation(conversation: &Conversation) {
    if let Some(header) = conversation.header() {
        println!();
        println!("  {header}");
    }
    for row in conversation.rows() {
        println!("  {:>9}  {}", row.resolution, row.answer);
    }
}

/// Print the gallery, marking the selected thumbnail.
pub fn print_gallery(gallery: &SampleGallery) {
    println!("Sample pictures:");
    for (pos, thumbnail) in gallery.thumbnails().iter().enumerate() {
        let marker = if thumbnail.selected { "*" } else { " " };
        println!("  {marker}[{}] {}", pos + 1, thumbnail.path);
    }
}
