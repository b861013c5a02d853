//! Tally CLI Application
//!
//! Command-line interface for the tally attendance planner.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, CalendarArgs, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tally_core::TrackerBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        calendar_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_calendar_path(calendar_file)
        .build()
        .context("Failed to initialize tracker")?;

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));

    info!("Tally started");

    match command {
        Some(Plan(args)) => cli.handle_plan(args),
        Some(Timetable(args)) => cli.handle_timetable(args),
        Some(History(args)) => cli.handle_history(args),
        Some(Risk(args)) => cli.handle_risk(args),
        Some(Calendar(args)) => cli.handle_calendar(args),
        None => cli.handle_calendar(CalendarArgs::default()),
    }
}
