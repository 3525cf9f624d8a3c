// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! `pixelguess upload <file>` — upload a picture, then guess over it.

use std::path::PathBuf;

use anyhow::Result;
use pixelguess::client::ApiClient;
use pixelguess::config::Config;
use pixelguess::events;
use pixelguess::session::GuessSequencer;

use super::render;

pub async fn run(config: Config, file: PathBuf, save_previews: Option<PathBuf>) -> Result<()> {
    let client = ApiClient::new(&config);
    let (events, rx) = events::channel();

    let mut sequencer = GuessSequencer::new(client, events, config.stagger);
    if let Some(dir) = save_previews {
        std::fs::create_dir_all(&dir)?;
        sequencer = sequencer.with_preview_dir(dir);
    }

    let printer = render::spawn_printer(rx);

    // Upload failures are logged by the sequencer and not fatal; the
    // session simply never starts.
    if sequencer.start_from_upload(&file).await.is_some() {
        sequencer.wait().await;
        printer.abort();
        render::print_conversation(&*sequencer.conversation().lock().await);
    } else {
        printer.abort();
    }

    Ok(())
}
