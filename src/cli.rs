// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "parla",
    about = "A chat relay for hosted LLM providers, with a terminal chat client",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the relay: POST /api/chat plus static client hosting
    Serve {
        /// Listening port (overrides config)
        #[arg(long, short = 'p')]
        port: Option<u16>,

        /// Directory served as the client bundle (overrides config)
        #[arg(long)]
        static_dir: Option<String>,
    },

    /// Chat against a running relay from the terminal
    Chat {
        /// Relay base URL, e.g. "http://localhost:5000" (overrides config)
        #[arg(long, env = "PARLA_RELAY_URL")]
        url: Option<String>,
    },

    /// Render markdown-subset text to HTML (reads stdin when no file given)
    Render {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },

    /// Print the merged configuration and exit
    ShowConfig,
}
