// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! Interactive mode: show a random gallery, let the user pick thumbnails
//! or upload pictures, and keep guessing until they quit.
//!
//! Picking a new thumbnail while a session is still running cancels the
//! previous session's pending steps and in-flight requests before the new
//! rows start appearing.

use std::path::Path;

use anyhow::Result;
use pixelguess::client::ApiClient;
use pixelguess::config::Config;
use pixelguess::events;
use pixelguess::samples::SampleGallery;
use pixelguess::session::GuessSequencer;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::render;

pub async fn run(config: Config) -> Result<()> {
    let client = ApiClient::new(&config);
    let (events, rx) = events::channel();
    let sequencer = GuessSequencer::new(client, events, config.stagger);
    let printer = render::spawn_printer(rx);

    let mut gallery =
        SampleGallery::random(config.sample_pool, config.samples_shown, &mut rand::thread_rng());

    println!("pixelguess — progressive image guessing ({})", config.server);
    render::print_gallery(&gallery);
    print_help(gallery.len());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => {
                render::print_gallery(&gallery);
                print_help(gallery.len());
            }
            "q" | "quit" | "exit" => break,
            _ => {
                if let Some(file) = line.strip_prefix("upload ") {
                    // Upload failures are logged only; the table stays put.
                    let _ = sequencer.start_from_upload(Path::new(file.trim())).await;
                } else if let Ok(pick) = line.parse::<usize>() {
                    if pick >= 1 && pick <= gallery.len() {
                        if sequencer.start_from_sample(&mut gallery, pick - 1).await.is_none() {
                            println!("could not start guessing over that sample");
                        }
                    } else {
                        println!("pick a number between 1 and {}", gallery.len());
                    }
                } else {
                    print_help(gallery.len());
                }
            }
        }
    }

    sequencer.cancel().await;
    printer.abort();
    Ok(())
}

fn print_help(shown: usize) {
    println!("Type 1-{shown} to guess over a sample, 'upload <file>', empty line to reprint, 'q' to quit.");
}
