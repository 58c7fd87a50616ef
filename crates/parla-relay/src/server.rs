// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Relay startup — builds the provider and router, binds, and serves.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use parla_config::Config;
use parla_model::ModelProvider;

use crate::routes::{build_router, AppState};

/// Start the relay and serve until the process is stopped.
///
/// This is the single entry point for `parla serve`.  Each inbound request
/// independently awaits one provider call; there is no cross-request state.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let provider: Arc<dyn ModelProvider> =
        Arc::from(parla_model::from_config(&config.model).context("building model provider")?);

    info!(
        provider = provider.name(),
        model = provider.model_name(),
        "relay provider configured"
    );

    let state = AppState {
        provider,
        system_instruction: config.relay.system_instruction.clone(),
        temperature: config.relay.temperature,
    };
    let app = build_router(state, &config.relay.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.relay.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, static_dir = %config.relay.static_dir, "relay listening");

    axum::serve(listener, app).await.context("relay server exited")?;
    Ok(())
}
