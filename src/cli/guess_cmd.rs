// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! `pixelguess guess <index>` — one guessing session over a sample picture.

use std::path::PathBuf;

use anyhow::{bail, Result};
use pixelguess::client::ApiClient;
use pixelguess::config::Config;
use pixelguess::events;
use pixelguess::samples::sample_path;
use pixelguess::session::GuessSequencer;
use pixelguess::types::ImageReference;

use super::render;

pub async fn run(config: Config, sample: u32, save_previews: Option<PathBuf>) -> Result<()> {
    if sample < 1 || sample > config.sample_pool {
        bail!(
            "sample index must be between 1 and {} (got {sample})",
            config.sample_pool
        );
    }

    let client = ApiClient::new(&config);
    let (events, rx) = events::channel();

    let mut sequencer = GuessSequencer::new(client.clone(), events, config.stagger);
    if let Some(dir) = save_previews {
        std::fs::create_dir_all(&dir)?;
        sequencer = sequencer.with_preview_dir(dir);
    }

    let printer = render::spawn_printer(rx);

    let path = sample_path(sample);
    let (natural_width, _) = client.sample_dimensions(&path).await?;
    let scheduled = sequencer
        .start(ImageReference::Sample { path }, natural_width)
        .await;
    if scheduled == 0 {
        printer.abort();
        bail!("picture is narrower than the first ladder rung; nothing to guess");
    }

    sequencer.wait().await;
    printer.abort();

    render::print_conversation(&*sequencer.conversation().lock().await);
    Ok(())
}
