// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! `pixelguess samples` — print a random gallery of sample pictures.

use anyhow::Result;
use pixelguess::config::Config;
use pixelguess::samples::SampleGallery;

use super::render;

pub async fn run(config: Config, count: usize) -> Result<()> {
    let gallery = SampleGallery::random(config.sample_pool, count, &mut rand::thread_rng());
    render::print_gallery(&gallery);
    println!();
    println!(
        "Run 'pixelguess guess <index>' with the sample number (1-{}) to start guessing.",
        config.sample_pool
    );
    Ok(())
}
