// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
mod error;
mod routes;
mod server;

pub use error::RelayError;
pub use routes::{build_router, chat, AppState, ChatResponse};
pub use server::run;
