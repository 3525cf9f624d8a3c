// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! The conversation table: one row per resolution step.
//!
//! Rows are keyed by their step index, appended when a step's timer fires,
//! mutated in place as the preview and the guess arrive, and superseded
//! wholesale when a new session resets the table. The table is an explicit
//! handle passed into the sequencer, never an ambient lookup.

use std::collections::BTreeMap;

/// The question the server asks the model for every preview.
pub const PROMPT: &str =
    "What does this picture look like? Provide a short answer in less than 8 words.";

/// Placeholder shown in the answer cell while the guess is in flight.
pub const LOADING_PLACEHOLDER: &str = "Let me guess...";

/// Contents of a row's answer cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The guess is still in flight.
    Loading,
    /// The model's guess, verbatim.
    Text(String),
    /// Inline error marker carrying the failure's string representation.
    Error(String),
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Loading => write!(f, "{LOADING_PLACEHOLDER}"),
            Answer::Text(answer) => write!(f, "{answer}"),
            Answer::Error(error) => write!(f, "[error] {error}"),
        }
    }
}

/// One row of the conversation.
#[derive(Debug, Clone)]
pub struct GuessRow {
    /// Step index within the session's ladder.
    pub index: usize,
    /// The pixel width this step asked for.
    pub requested_width: u32,
    /// Resolution label. Starts as the requested width, overwritten with
    /// the decoded `WxH` once the preview arrives (the server may not
    /// return exactly the requested width).
    pub resolution: String,
    /// Answer cell.
    pub answer: Answer,
}

/// Header plus ordered rows for one guessing session.
#[derive(Debug, Default)]
pub struct Conversation {
    header: Option<String>,
    rows: BTreeMap<usize, GuessRow>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every row and install a fresh header. Called at the start of
    /// each session, so a re-selection always clears the previous table.
    pub fn reset(&mut self, header: &str) {
        self.header = Some(header.to_string());
        self.rows.clear();
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// Append the row for step `index` with a loading placeholder.
    pub fn append_row(&mut self, index: usize, requested_width: u32) {
        self.rows.insert(
            index,
            GuessRow {
                index,
                requested_width,
                resolution: requested_width.to_string(),
                answer: Answer::Loading,
            },
        );
    }

    /// Overwrite the resolution label with the decoded dimensions.
    /// Silently ignored if the row is gone (superseded session).
    pub fn set_resolution(&mut self, index: usize, width: u32, height: u32) {
        if let Some(row) = self.rows.get_mut(&index) {
            row.resolution = format!("{width}x{height}");
        }
    }

    /// Replace the answer cell. Silently ignored if the row is gone.
    pub fn set_answer(&mut self, index: usize, answer: Answer) {
        if let Some(row) = self.rows.get_mut(&index) {
            row.answer = answer;
        }
    }

    pub fn row(&self, index: usize) -> Option<&GuessRow> {
        self.rows.get(&index)
    }

    /// Rows in step order.
    pub fn rows(&self) -> impl Iterator<Item = &GuessRow> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_lifecycle() {
        let mut convo = Conversation::new();
        convo.reset(PROMPT);
        assert_eq!(convo.header(), Some(PROMPT));

        convo.append_row(0, 8);
        assert_eq!(convo.row(0).unwrap().resolution, "8");
        assert_eq!(convo.row(0).unwrap().answer, Answer::Loading);

        // The two in-place mutations can land in either order.
        convo.set_answer(0, Answer::Text("a cat".to_string()));
        convo.set_resolution(0, 8, 5);

        let row = convo.row(0).unwrap();
        assert_eq!(row.resolution, "8x5");
        assert_eq!(row.answer, Answer::Text("a cat".to_string()));
    }

    #[test]
    fn test_reset_supersedes_rows() {
        let mut convo = Conversation::new();
        convo.reset(PROMPT);
        convo.append_row(0, 8);
        convo.append_row(1, 10);
        assert_eq!(convo.len(), 2);

        convo.reset(PROMPT);
        assert!(convo.is_empty());
        assert_eq!(convo.header(), Some(PROMPT));
    }

    #[test]
    fn test_mutating_missing_row_is_ignored() {
        let mut convo = Conversation::new();
        convo.reset(PROMPT);
        convo.set_resolution(3, 13, 9);
        convo.set_answer(3, Answer::Text("late".to_string()));
        assert!(convo.is_empty());
    }

    #[test]
    fn test_rows_iterate_in_step_order() {
        let mut convo = Conversation::new();
        convo.reset(PROMPT);
        convo.append_row(2, 13);
        convo.append_row(0, 8);
        convo.append_row(1, 10);
        let order: Vec<usize> = convo.rows().map(|r| r.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Loading.to_string(), LOADING_PLACEHOLDER);
        assert_eq!(Answer::Text("a cat".to_string()).to_string(), "a cat");
        assert!(Answer::Error("HTTP error 500".to_string())
            .to_string()
            .starts_with("[error]"));
    }
}
