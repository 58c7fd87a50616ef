// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! The exchange controller — one submission at a time, transcript kept
//! consistent with what the relay actually acknowledged.
//!
//! # Exchange lifecycle
//!
//! ```text
//! submit(input)
//!     │  non-empty input only
//!     ▼
//! user bubble (plain text) + user turn appended
//!     │
//!     ▼
//! pending bubble created ── handle kept, threaded to the continuation
//!     │
//!     ▼
//! RelayTransport::generate(transcript)
//!     │
//!     ├─ Ok(reply)  → resolve bubble with rendered blocks, append model turn
//!     └─ Err(..)    → fail bubble with fixed message, retract the user turn
//! ```
//!
//! The whole exchange is one `&mut self` call, so a second submission cannot
//! start while one is in flight; the frontend reads the next input only
//! after the previous exchange resolved.

use parla_markdown::{tag_blocks, Block};
use tracing::debug;

use crate::{error::ClientError, relay::RelayTransport, transcript::Transcript};

/// Marker text shown in the pending bubble while a reply is awaited.
pub const PENDING_MARKER: &str = "Thinking...";
/// Shown when the relay cannot be reached or reports a failure.
pub const FAILURE_TEXT: &str = "Failed to get response from server.";
/// Shown when the relay answered but carried no usable reply.
pub const NO_REPLY_TEXT: &str = "Sorry, no response received.";

/// Where exchange results land.  The pending bubble is addressed through a
/// handle returned at creation time, never looked up globally, so a
/// frontend can hold several resolved bubbles without ambient identifiers.
pub trait ChatFrontend {
    type Handle;

    /// Display the user's own message.  `text` is always shown verbatim;
    /// user input never passes through the markdown renderer.
    fn user_bubble(&mut self, text: &str);

    /// Create the transient bubble shown while awaiting a reply.
    fn pending_bubble(&mut self, marker: &str) -> Self::Handle;

    /// Replace the pending bubble with the rendered reply.
    fn resolve_bubble(&mut self, handle: Self::Handle, blocks: &[Block]);

    /// Replace the pending bubble with a plain-text failure message.
    fn fail_bubble(&mut self, handle: Self::Handle, message: &str);

    /// Keep the newest bubble in view.  No-op for frontends without a
    /// viewport.
    fn scroll_to_bottom(&mut self) {}
}

/// Result of one [`ChatController::submit`] call.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    /// The reply was rendered and appended to the transcript.
    Replied,
    /// The exchange failed; the transcript was rolled back.
    Failed(ClientError),
}

/// Owns the transcript and drives exchanges against the relay.
pub struct ChatController<T: RelayTransport, F: ChatFrontend> {
    transcript: Transcript,
    transport: T,
    frontend: F,
}

impl<T: RelayTransport, F: ChatFrontend> ChatController<T, F> {
    pub fn new(transport: T, frontend: F) -> Self {
        Self {
            transcript: Transcript::new(),
            transport,
            frontend,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Run one complete exchange: append → send → resolve or roll back.
    pub async fn submit(&mut self, input: &str) -> SubmitOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.frontend.user_bubble(text);
        self.transcript.push_user(text);
        let pending = self.frontend.pending_bubble(PENDING_MARKER);
        self.frontend.scroll_to_bottom();

        let outcome = match self.transport.generate(self.transcript.turns()).await {
            Ok(reply) => {
                let blocks = tag_blocks(&reply);
                self.frontend.resolve_bubble(pending, &blocks);
                self.transcript.push_model(reply);
                SubmitOutcome::Replied
            }
            Err(err) => {
                debug!(error = %err, "exchange failed, rolling back transcript");
                let message = match &err {
                    ClientError::EmptyReply => NO_REPLY_TEXT,
                    _ => FAILURE_TEXT,
                };
                self.frontend.fail_bubble(pending, message);
                self.transcript.retract_last_user();
                SubmitOutcome::Failed(err)
            }
        };
        self.frontend.scroll_to_bottom();
        outcome
    }
}
