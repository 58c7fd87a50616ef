// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The relay could not be reached at all.
    #[error("transport error: {0}")]
    Transport(String),

    /// The relay answered with a non-success status.
    #[error("relay error {status}: {message}")]
    Server { status: u16, message: String },

    /// The relay answered 200 but without a usable `result` field.
    #[error("relay returned no result")]
    EmptyReply,
}
