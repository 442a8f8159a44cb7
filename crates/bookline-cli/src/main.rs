//! Bookline CLI Application
//!
//! Command-line interface for the bookline appointment scheduling tool.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use bookline_core::{params::ListReservations, BusinessHours, SchedulerBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, BooklineMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        open_hour,
        close_hour,
        command,
    } = Args::parse();

    let hours = BusinessHours::new(open_hour, close_hour)
        .context("Invalid business hours")?;

    let scheduler = SchedulerBuilder::new()
        .with_database_path(database_file)
        .with_business_hours(hours)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Bookline started");

    match command {
        Some(Services) => Cli::new(scheduler, renderer).list_services().await,
        Some(Providers) => Cli::new(scheduler, renderer).list_providers().await,
        Some(Slots(args)) => Cli::new(scheduler, renderer).list_slots(args).await,
        Some(Reservation { command }) => {
            Cli::new(scheduler, renderer)
                .handle_reservation_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Bookline MCP server");
            run_stdio_server(BooklineMcpServer::new(scheduler))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(scheduler, renderer)
                .list_reservations(&ListReservations::default())
                .await
        }
    }
}
