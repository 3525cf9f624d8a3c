// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI subcommand implementations for the pixelguess binary.

pub mod guess_cmd;
pub mod interactive;
pub mod render;
pub mod samples_cmd;
pub mod upload_cmd;
