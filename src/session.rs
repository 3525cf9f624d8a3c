// Copyright 2026 Pixelguess Contributors
// SPDX-License-Identifier: Apache-2.0

//! The guess sequencer: drives one full guessing session per picture.
//!
//! Starting a session computes the resolution ladder and eagerly schedules
//! one task per rung at a fixed-rate stagger — tasks are not chained on
//! each other's completion. Each task appends its row, then fetches the
//! pixelated preview and the guess concurrently; the two updates land in
//! whichever order the server answers. Starting a new session aborts every
//! pending task and in-flight request of the previous one, so rows from
//! two sessions never interleave and row indices never collide.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::client::ApiClient;
use crate::conversation::{Answer, Conversation, PROMPT};
use crate::events::{EventSender, GuessEvent};
use crate::samples::SampleGallery;
use crate::sequence::resolution_steps;
use crate::types::ImageReference;

/// Sequencer for guessing sessions. One instance lives for the whole run;
/// at most one session is active at a time.
pub struct GuessSequencer {
    client: ApiClient,
    conversation: Arc<Mutex<Conversation>>,
    events: EventSender,
    stagger: Duration,
    /// Where to save arriving previews, if anywhere.
    preview_dir: Option<PathBuf>,
    /// Monotonic session counter; stamped into every event.
    session_seq: AtomicU64,
    /// Tasks of the live session, aborted when superseded.
    pending: Mutex<Vec<JoinHandle<()>>>,
}

/// Everything one session's scheduled steps need, shared across tasks.
struct StepContext {
    session: u64,
    client: ApiClient,
    conversation: Arc<Mutex<Conversation>>,
    events: EventSender,
    preview_dir: Option<PathBuf>,
}

impl GuessSequencer {
    pub fn new(client: ApiClient, events: EventSender, stagger: Duration) -> Self {
        Self {
            client,
            conversation: Arc::new(Mutex::new(Conversation::new())),
            events,
            stagger,
            preview_dir: None,
            session_seq: AtomicU64::new(0),
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Save each arriving preview as `row-<i>.jpg` under `dir`.
    pub fn with_preview_dir(mut self, dir: PathBuf) -> Self {
        self.preview_dir = Some(dir);
        self
    }

    /// Handle to the conversation table this sequencer writes into.
    pub fn conversation(&self) -> Arc<Mutex<Conversation>> {
        Arc::clone(&self.conversation)
    }

    /// Start a fresh session over `reference`, cancelling any session
    /// still in flight. Returns the number of scheduled steps; a natural
    /// width below the first rung schedules nothing.
    pub async fn start(&self, reference: ImageReference, natural_width: u32) -> usize {
        self.cancel().await;
        let session = self.session_seq.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut conversation = self.conversation.lock().await;
            conversation.reset(PROMPT);
        }

        let steps = resolution_steps(natural_width);
        info!(
            %reference,
            natural_width,
            steps = steps.len(),
            session,
            "starting guessing session"
        );
        let _ = self.events.send(GuessEvent::SessionStarted {
            session,
            reference: reference.clone(),
            natural_width,
            steps: steps.len(),
        });

        let context = Arc::new(StepContext {
            session,
            client: self.client.clone(),
            conversation: Arc::clone(&self.conversation),
            events: self.events.clone(),
            preview_dir: self.preview_dir.clone(),
        });

        let mut handles = Vec::with_capacity(steps.len());
        for (index, width) in steps.into_iter().enumerate() {
            let context = Arc::clone(&context);
            let reference = reference.clone();
            let delay = self.stagger * index as u32;
            handles.push(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                context.run_step(index, width, reference).await;
            }));
        }

        let scheduled = handles.len();
        *self.pending.lock().await = handles;
        scheduled
    }

    /// Select the thumbnail at `pos` in the gallery (clearing the marker
    /// everywhere else), resolve the sample's natural width, and start a
    /// session over it. Returns the number of scheduled steps.
    pub async fn start_from_sample(
        &self,
        gallery: &mut SampleGallery,
        pos: usize,
    ) -> Option<usize> {
        let reference = gallery.select(pos)?;
        let ImageReference::Sample { path } = reference.clone() else {
            return None;
        };

        let (natural_width, natural_height) = match self.client.sample_dimensions(&path).await {
            Ok(dims) => dims,
            Err(e) => {
                warn!(path = %path, error = %e, "could not resolve sample dimensions");
                return None;
            }
        };
        debug!(path = %path, natural_width, natural_height, "sample selected");

        Some(self.start(reference, natural_width).await)
    }

    /// Upload a picture from disk and start a session over it. Upload
    /// failures are logged only; the conversation is left untouched.
    pub async fn start_from_upload(&self, path: &Path) -> Option<usize> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(path = %path.display(), error = %e, "could not read upload");
                return None;
            }
        };

        match self.client.upload(bytes).await {
            Ok(receipt) => {
                info!(
                    image_id = %receipt.image_id,
                    width = receipt.width,
                    "upload accepted"
                );
                let reference = ImageReference::Uploaded {
                    id: receipt.image_id,
                };
                Some(self.start(reference, receipt.width).await)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "upload failed");
                None
            }
        }
    }

    /// Abort every pending task of the live session. In-flight requests
    /// are dropped at their next await point.
    pub async fn cancel(&self) {
        let handles = std::mem::take(&mut *self.pending.lock().await);
        if !handles.is_empty() {
            debug!(tasks = handles.len(), "cancelling superseded session");
        }
        for handle in &handles {
            handle.abort();
        }
    }

    /// Wait until every scheduled task of the current session finished,
    /// then emit `SessionComplete`.
    pub async fn wait(&self) {
        let handles = std::mem::take(&mut *self.pending.lock().await);
        join_all(handles).await;

        let session = self.session_seq.load(Ordering::SeqCst);
        let rows = self.conversation.lock().await.len();
        let _ = self
            .events
            .send(GuessEvent::SessionComplete { session, rows });
    }
}

impl StepContext {
    /// One scheduled step: append the row, then let the preview and the
    /// guess race.
    async fn run_step(&self, index: usize, width: u32, reference: ImageReference) {
        {
            let mut conversation = self.conversation.lock().await;
            conversation.append_row(index, width);
        }
        let _ = self.events.send(GuessEvent::RowAppended {
            session: self.session,
            index,
            pixel_width: width,
        });

        tokio::join!(
            self.load_preview(index, width, &reference),
            self.fetch_guess(index, width, &reference),
        );
    }

    /// Fetch and decode the pixelated preview, overwriting the row's
    /// resolution label with the decoded dimensions. A failed preview
    /// keeps the requested width in the label.
    async fn load_preview(&self, index: usize, width: u32, reference: &ImageReference) {
        match self.client.resized(reference, width).await {
            Ok(preview) => {
                {
                    let mut conversation = self.conversation.lock().await;
                    conversation.set_resolution(index, preview.width, preview.height);
                }
                let _ = self.events.send(GuessEvent::PreviewLoaded {
                    session: self.session,
                    index,
                    width: preview.width,
                    height: preview.height,
                });
                if let Some(dir) = &self.preview_dir {
                    let file = dir.join(format!("row-{index}.jpg"));
                    if let Err(e) = tokio::fs::write(&file, &preview.jpeg).await {
                        warn!(file = %file.display(), error = %e, "could not save preview");
                    }
                }
            }
            Err(e) => {
                warn!(index, pixel_width = width, error = %e, "preview failed to load");
            }
        }
    }

    /// Fetch the guess for this row; any failure becomes an inline error
    /// marker in the answer cell.
    async fn fetch_guess(&self, index: usize, width: u32, reference: &ImageReference) {
        match self.client.guess(reference, width).await {
            Ok(answer) => {
                {
                    let mut conversation = self.conversation.lock().await;
                    conversation.set_answer(index, Answer::Text(answer.clone()));
                }
                let _ = self.events.send(GuessEvent::GuessAnswered {
                    session: self.session,
                    index,
                    answer,
                });
            }
            Err(e) => {
                let error = e.to_string();
                {
                    let mut conversation = self.conversation.lock().await;
                    conversation.set_answer(index, Answer::Error(error.clone()));
                }
                let _ = self.events.send(GuessEvent::GuessFailed {
                    session: self.session,
                    index,
                    error,
                });
            }
        }
    }
}
