// Copyright 2025 the Patchwork Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless Patchwork demos.
//!
//! Each subcommand scripts a short interaction against a [`patchwork::Session`]
//! rendered into a recording renderer, and prints what happened. Set
//! `RUST_LOG=debug` to watch the session's own events.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use patchwork::SessionConfig;
use tracing_subscriber::EnvFilter;

mod scenes;
mod script;

#[derive(Parser, Debug)]
#[command(name = "patchwork-demo", about = "Scripted walkthroughs of Patchwork sessions")]
struct Cli {
    /// JSON `SessionConfig` to use instead of the demo's own settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Simulated frame interval in milliseconds.
    #[arg(long, global = true, default_value_t = 16)]
    frame_ms: u64,
    #[command(subcommand)]
    demo: Demo,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Demo {
    /// Full grid editor: pan, elastic zoom, select and insert a patch.
    Grid,
    /// Several patches with cycling content.
    Quilt,
    /// Pan and zoom only, holding zoom once past the overshoot band.
    Pan,
    /// Marquee selection in every drag direction.
    Select,
    /// Perspective scale across the zoom range, with a tilted grid.
    Perspective,
}

fn load_config(path: &PathBuf) -> anyhow::Result<SessionConfig> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: SessionConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded session config");
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.frame_ms > 0, "--frame-ms must be positive");
    let config = cli.config.as_ref().map(load_config).transpose()?;

    tracing::info!(demo = ?cli.demo, frame_ms = cli.frame_ms, "starting demo");
    match cli.demo {
        Demo::Grid => scenes::grid(config, cli.frame_ms),
        Demo::Quilt => scenes::quilt(config, cli.frame_ms),
        Demo::Pan => scenes::pan(config, cli.frame_ms),
        Demo::Select => scenes::select(config, cli.frame_ms),
        Demo::Perspective => scenes::perspective(config, cli.frame_ms),
    }
}
