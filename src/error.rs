// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the guessing client.

/// All errors that can occur while driving a guessing session.
#[derive(thiserror::Error, Debug)]
pub enum GuessError {
    /// The server answered with a non-success status.
    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    /// Transport-level failure (connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server's JSON did not parse into the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The preview or sample bytes were not a decodable image.
    #[error("image decode failed: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, GuessError>;
