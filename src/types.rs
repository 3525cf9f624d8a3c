// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core data types shared across the client.

use serde::{Deserialize, Serialize};

/// The picture a guessing session runs over — either one of the server's
/// built-in samples or a picture the user uploaded earlier in the session.
///
/// Immutable once created; produced by gallery selection or by a completed
/// upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageReference {
    /// A built-in sample, addressed by its static asset path
    /// (e.g. `samples/sample18.jpg`).
    Sample { path: String },
    /// An uploaded picture, addressed by the server-issued identifier.
    Uploaded { id: String },
}

impl ImageReference {
    /// The query pair understood by `/resized` and `/guess`.
    pub fn query_param(&self) -> (&'static str, &str) {
        match self {
            ImageReference::Sample { path } => ("sample", path),
            ImageReference::Uploaded { id } => ("imgid", id),
        }
    }
}

impl std::fmt::Display for ImageReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (key, value) = self.query_param();
        write!(f, "{key}={value}")
    }
}

/// Server reply to `GET /guess`.
#[derive(Debug, Clone, Deserialize)]
pub struct GuessReply {
    /// The model's guess, verbatim.
    pub answer: String,
}

/// Server reply to `POST /upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReceipt {
    /// Identifier for the stored picture.
    #[serde(rename = "imageID")]
    pub image_id: String,
    /// Natural pixel width of the decoded upload.
    pub width: u32,
    /// Natural pixel height. The server sends it; only the width drives
    /// the resolution ladder.
    #[serde(default)]
    pub height: Option<u32>,
}

/// A pixelated preview fetched from `GET /resized`, already decoded for
/// its real dimensions (the server may not honor the requested width
/// exactly).
#[derive(Debug, Clone)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    /// The raw JPEG bytes, kept so the CLI can save them to disk.
    pub jpeg: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_sample() {
        let reference = ImageReference::Sample {
            path: "samples/sample18.jpg".to_string(),
        };
        assert_eq!(
            reference.query_param(),
            ("sample", "samples/sample18.jpg")
        );
        assert_eq!(reference.to_string(), "sample=samples/sample18.jpg");
    }

    #[test]
    fn test_query_param_uploaded() {
        let reference = ImageReference::Uploaded {
            id: "y71q".to_string(),
        };
        assert_eq!(reference.query_param(), ("imgid", "y71q"));
        assert_eq!(reference.to_string(), "imgid=y71q");
    }

    #[test]
    fn test_upload_receipt_parses_server_reply() {
        // The server replies with indented JSON including a height field.
        let body = r#"{
  "height": 512,
  "imageID": "y71q",
  "width": 768
}"#;
        let receipt: UploadReceipt = serde_json::from_str(body).unwrap();
        assert_eq!(receipt.image_id, "y71q");
        assert_eq!(receipt.width, 768);
        assert_eq!(receipt.height, Some(512));
    }

    #[test]
    fn test_guess_reply_parses() {
        let reply: GuessReply = serde_json::from_str(r#"{"answer":"a cat"}"#).unwrap();
        assert_eq!(reply.answer, "a cat");
    }

    #[test]
    fn test_reference_roundtrip() {
        let reference = ImageReference::Sample {
            path: "samples/sample3.jpg".to_string(),
        };
        let json = serde_json::to_string(&reference).unwrap();
        assert!(json.contains("\"kind\":\"sample\""));
        let parsed: ImageReference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reference);
    }
}
