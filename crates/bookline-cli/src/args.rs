use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ReservationCommands, SlotsArgs};

/// Main command-line interface for the Bookline scheduling tool
///
/// Bookline manages appointment bookings for a small service business. It
/// keeps a catalog of services and providers, generates hourly booking slots
/// within business hours, and tracks each reservation through its lifecycle
/// (confirmed, cancelled, completed). Besides the local CLI it offers an MCP
/// (Model Context Protocol) server mode for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "bookline")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/bookline/bookline.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// First bookable hour of the day (inclusive, 24-hour clock)
    #[arg(long, global = true, default_value_t = 9)]
    pub open_hour: i8,

    /// Hour the business closes (exclusive; the last slot starts one hour
    /// before this)
    #[arg(long, global = true, default_value_t = 17)]
    pub close_hour: i8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Bookline CLI
///
/// The CLI is organized around the booking workflow:
/// - `services` / `providers`: browse the catalog
/// - `slots`: see which slots are still open on a day
/// - `reservation`: create and manage bookings
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// List the service catalog
    #[command(alias = "sv")]
    Services,
    /// List the provider roster
    #[command(alias = "pr")]
    Providers,
    /// List the open slots for a calendar day
    #[command(alias = "sl")]
    Slots(SlotsArgs),
    /// Manage reservations
    #[command(alias = "r")]
    Reservation {
        #[command(subcommand)]
        command: ReservationCommands,
    },
    /// Start the MCP server
    Serve,
}
