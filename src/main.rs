mod cli;

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = parla_config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port, static_dir } => {
            if let Some(p) = port {
                config.relay.port = p;
            }
            if let Some(dir) = static_dir {
                config.relay.static_dir = dir;
            }
            parla_relay::run(&config).await
        }
        Commands::Chat { url } => {
            let url = url.unwrap_or(config.client.relay_url);
            parla_client::run_chat(&url).await
        }
        Commands::Render { file } => render_cmd(file.as_deref()),
        Commands::ShowConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

/// Read markdown-subset text and print the HTML fragment to stdout.
fn render_cmd(file: Option<&Path>) -> anyhow::Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };
    println!("{}", parla_markdown::render_html(&input));
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
