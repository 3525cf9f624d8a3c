// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! Pixelguess client library — progressive image guessing over HTTP.
//!
//! Drives a guessing server: pick a picture (built-in sample or upload),
//! walk a geometric ladder of pixel widths, and for each width fetch a
//! pixelated preview plus the vision model's guess, updating a
//! conversation table as responses arrive. The server itself (resizing,
//! model invocation, upload storage) stays behind its HTTP endpoints.

pub mod client;
pub mod config;
pub mod conversation;
pub mod error;
pub mod events;
pub mod samples;
pub mod sequence;
pub mod session;
pub mod types;

pub use client::ApiClient;
pub use config::Config;
pub use conversation::{Answer, Conversation, GuessRow};
pub use error::{GuessError, Result};
pub use events::GuessEvent;
pub use samples::SampleGallery;
pub use session::GuessSequencer;
pub use types::ImageReference;
