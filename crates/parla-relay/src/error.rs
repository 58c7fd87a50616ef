// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Provider(#[from] anyhow::Error),
}

impl IntoResponse for RelayError {
    /// Every failure becomes a uniform 500 with a `{message}` body.
    ///
    /// Validation and provider failures are intentionally not distinguished;
    /// the client's only recovery is to resubmit, so a finer taxonomy would
    /// not change its behavior.
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "chat request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": self.to_string() })),
        )
            .into_response()
    }
}
