// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//!
//! Line-oriented terminal frontend.
//!
//! Bubbles are printed as `you>` / `bot>` lines.  The pending marker is
//! drawn as its own line and erased (cursor-up + clear-line) when the
//! exchange resolves, so the reply takes the marker's place just like a
//! bubble swap in a graphical client.

use std::io::{self, Write};

use tokio::io::AsyncBufReadExt;

use parla_markdown::{Block, ListKind};

use crate::controller::{ChatController, ChatFrontend};
use crate::relay::HttpRelay;

/// Proof that a pending line is on screen; consumed on resolve/fail.
pub struct PendingLine(());

#[derive(Default)]
pub struct TerminalFrontend;

impl TerminalFrontend {
    fn erase_pending(&self) {
        // Cursor up one line, clear it.
        print!("\x1b[1A\x1b[2K");
    }
}

impl ChatFrontend for TerminalFrontend {
    type Handle = PendingLine;

    fn user_bubble(&mut self, _text: &str) {
        // The user's line is already on screen exactly as typed; nothing to
        // redraw, and echoing it through any formatter would misrepresent it.
    }

    fn pending_bubble(&mut self, marker: &str) -> PendingLine {
        println!("bot> {marker}");
        let _ = io::stdout().flush();
        PendingLine(())
    }

    fn resolve_bubble(&mut self, _handle: PendingLine, blocks: &[Block]) {
        self.erase_pending();
        print!("bot> ");
        let mut first = true;
        for block in blocks {
            if !first {
                println!();
            }
            first = false;
            match block {
                Block::Paragraph(text) => println!("{}", strip_strong(text)),
                Block::List { kind, items } => {
                    for (i, item) in items.iter().enumerate() {
                        match kind {
                            ListKind::Ordered => println!("{}. {}", i + 1, strip_strong(item)),
                            ListKind::Unordered => println!("- {}", strip_strong(item)),
                        }
                    }
                }
            }
        }
        if first {
            // Renderer produced no blocks (whitespace-only reply).
            println!();
        }
    }

    fn fail_bubble(&mut self, _handle: PendingLine, message: &str) {
        self.erase_pending();
        println!("bot> {message}");
    }
}

/// Map `<strong>` spans back to terminal bold.
fn strip_strong(text: &str) -> String {
    text.replace("<strong>", "\x1b[1m").replace("</strong>", "\x1b[0m")
}

/// Interactive chat loop against a running relay.
///
/// Reads one line per exchange and awaits the result before prompting
/// again, so a submission can never start while another is pending.
pub async fn run_chat(relay_url: &str) -> anyhow::Result<()> {
    let transport = HttpRelay::new(relay_url);
    let mut controller = ChatController::new(transport, TerminalFrontend);

    println!("Connected to {relay_url} -- empty line or Ctrl-D to leave.");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        if line.trim().is_empty() {
            break;
        }

        controller.submit(&line).await;
    }
    Ok(())
}
