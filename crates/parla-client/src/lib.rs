// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod controller;
mod error;
mod relay;
mod term;
mod transcript;

pub use controller::{
    ChatController, ChatFrontend, SubmitOutcome, FAILURE_TEXT, NO_REPLY_TEXT, PENDING_MARKER,
};
pub use error::ClientError;
pub use relay::{HttpRelay, RelayTransport};
pub use term::{run_chat, PendingLine, TerminalFrontend};
pub use transcript::Transcript;
