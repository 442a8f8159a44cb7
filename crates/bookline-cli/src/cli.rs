//! Command-line handlers and argument wrappers.
//!
//! This module implements the CLI side of the parameter wrapper pattern:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```
//!
//! The argument structs carry clap-specific concerns (flags, aliases, help
//! text) and convert into the framework-free parameter types from
//! `bookline_core::params` via `From`, keeping the core crate clean of
//! presentation details. The [`Cli`] struct pairs a scheduler with a terminal
//! renderer and formats every outcome through the core display wrappers.

use anyhow::Result;
use bookline_core::{
    display::{CreateResult, DeleteResult, OperationStatus, Providers, Reservations, Services,
        UpdateResult},
    params::{AvailableSlots, ChangeStatus, CreateReservation, Id, ListReservations,
        UpdateReservation},
    ReservationStatus, Scheduler, SchedulerError,
};
use clap::{Args, Subcommand, ValueEnum};

use crate::renderer::TerminalRenderer;

/// CLI front end pairing a scheduler with a terminal renderer.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    /// Dispatch a reservation subcommand.
    pub async fn handle_reservation_command(self, command: ReservationCommands) -> Result<()> {
        match command {
            ReservationCommands::Create(args) => self.create_reservation(args).await,
            ReservationCommands::List(args) => self.list_reservations(&args.into()).await,
            ReservationCommands::Show(args) => self.show_reservation(&args.into()).await,
            ReservationCommands::Update(args) => self.update_reservation(args).await,
            ReservationCommands::Cancel(args) => {
                self.change_status(args.id, ReservationStatus::Cancelled).await
            }
            ReservationCommands::Complete(args) => {
                self.change_status(args.id, ReservationStatus::Completed).await
            }
            ReservationCommands::Delete(args) => self.delete_reservation(&args.into()).await,
        }
    }

    /// List the service catalog.
    pub async fn list_services(self) -> Result<()> {
        let services = self.scheduler.list_services().await?;
        self.renderer.render(&format!(
            "# Services\n\n{}",
            Services(services)
        ))
    }

    /// List the provider roster.
    pub async fn list_providers(self) -> Result<()> {
        let providers = self.scheduler.list_providers().await?;
        self.renderer.render(&format!(
            "# Providers\n\n{}",
            Providers(providers)
        ))
    }

    /// List the open slots for a calendar day.
    pub async fn list_slots(self, args: SlotsArgs) -> Result<()> {
        let listing = self.scheduler.available_slots_listing(&args.into()).await?;
        self.renderer.render(&listing.to_string())
    }

    /// List reservations, optionally filtered.
    pub async fn list_reservations(self, params: &ListReservations) -> Result<()> {
        let reservations = self.scheduler.list_reservations(params).await?;
        self.renderer.render(&format!(
            "# Reservations\n\n{}",
            Reservations(reservations)
        ))
    }

    async fn create_reservation(self, args: CreateReservationArgs) -> Result<()> {
        let reservation = self.scheduler.create_reservation(&args.into()).await?;
        self.renderer
            .render(&CreateResult::new(reservation).to_string())
    }

    async fn show_reservation(self, params: &Id) -> Result<()> {
        match self.scheduler.get_reservation(params).await? {
            Some(reservation) => self.renderer.render(&reservation.to_string()),
            None => Err(SchedulerError::ReservationNotFound { id: params.id }.into()),
        }
    }

    async fn update_reservation(self, args: UpdateReservationArgs) -> Result<()> {
        let params: UpdateReservation = args.into();
        let changes = describe_changes(&params);
        let reservation = self.scheduler.update_reservation(&params).await?;
        self.renderer
            .render(&UpdateResult::with_changes(reservation, changes).to_string())
    }

    async fn change_status(self, id: u64, status: ReservationStatus) -> Result<()> {
        let reservation = self
            .scheduler
            .change_status(&ChangeStatus {
                id,
                status: status.as_str().to_string(),
            })
            .await?;

        let message = match status {
            ReservationStatus::Cancelled => {
                format!("Cancelled reservation {id}. The slot is open again.")
            }
            ReservationStatus::Completed => format!("Marked reservation {id} as completed."),
            ReservationStatus::Confirmed => format!("Reservation {id} is confirmed."),
        };
        self.renderer.render(&format!(
            "{}\n{}",
            OperationStatus::success(message),
            reservation
        ))
    }

    async fn delete_reservation(self, params: &Id) -> Result<()> {
        let reservation = self.scheduler.delete_reservation(params).await?;
        self.renderer
            .render(&DeleteResult::new(reservation).to_string())
    }
}

/// Human-readable summary of which fields an update touches.
fn describe_changes(params: &UpdateReservation) -> Vec<String> {
    let mut changes = Vec::new();
    if let Some(start_time) = &params.start_time {
        changes.push(format!("Moved to {start_time}"));
    }
    if params.service_id.is_some() {
        changes.push("Changed service".to_string());
    }
    if params.provider_id.is_some() {
        changes.push("Changed provider".to_string());
    }
    if let Some(status) = &params.status {
        changes.push(format!("Set status to '{status}'"));
    }
    if params.client_name.is_some() {
        changes.push("Updated client name".to_string());
    }
    if params.client_email.is_some() {
        changes.push("Updated client email".to_string());
    }
    if params.client_phone.is_some() {
        changes.push("Updated client phone".to_string());
    }
    changes
}

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================
//
// Each wrapper defines CLI-specific argument parsing with clap derives and
// converts into the matching core parameter type. The From impls keep the
// mapping between the two layers explicit and compile-time checked.

/// List the open slots for a calendar day
#[derive(Args)]
pub struct SlotsArgs {
    /// Calendar date in YYYY-MM-DD form
    pub date: String,
    /// Check a single provider's calendar; without this, any provider's
    /// confirmed booking blocks its slot
    #[arg(short, long)]
    pub provider: Option<u64>,
    /// Restrict to a service (accepted for forward compatibility)
    #[arg(short, long)]
    pub service: Option<u64>,
}

impl From<SlotsArgs> for AvailableSlots {
    fn from(val: SlotsArgs) -> Self {
        AvailableSlots {
            date: val.date,
            provider_id: val.provider,
            service_id: val.service,
        }
    }
}

/// Book a new reservation
#[derive(Args)]
pub struct CreateReservationArgs {
    /// Appointment start time as an RFC 3339 timestamp, e.g.
    /// 2024-01-10T10:00:00Z
    pub start_time: String,
    /// Catalog id of the service to book
    #[arg(short, long)]
    pub service: u64,
    /// Catalog id of the provider to book with
    #[arg(short, long)]
    pub provider: u64,
    /// Name of the client
    #[arg(short, long)]
    pub name: String,
    /// Contact email of the client
    #[arg(short, long)]
    pub email: String,
    /// Optional contact phone number
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<CreateReservationArgs> for CreateReservation {
    fn from(val: CreateReservationArgs) -> Self {
        CreateReservation {
            start_time: val.start_time,
            service_id: val.service,
            provider_id: val.provider,
            client_name: val.name,
            client_email: val.email,
            client_phone: val.phone,
        }
    }
}

/// List reservations
#[derive(Args)]
pub struct ListReservationsArgs {
    /// Only show reservations with this status
    #[arg(short, long)]
    pub status: Option<StatusArg>,
    /// Only show reservations booked with this provider
    #[arg(short, long)]
    pub provider: Option<u64>,
}

impl From<ListReservationsArgs> for ListReservations {
    fn from(val: ListReservationsArgs) -> Self {
        ListReservations {
            status: val.status.map(ReservationStatus::from),
            provider_id: val.provider,
        }
    }
}

/// Show details of a specific reservation
#[derive(Args)]
pub struct ShowReservationArgs {
    /// ID of the reservation to display
    pub id: u64,
}

impl From<ShowReservationArgs> for Id {
    fn from(val: ShowReservationArgs) -> Self {
        Id { id: val.id }
    }
}

/// Update a reservation's details
///
/// Fields left unset are not changed. Moving the start time or provider
/// triggers a conflict re-check against all other confirmed reservations.
#[derive(Args)]
pub struct UpdateReservationArgs {
    /// ID of the reservation to update
    pub id: u64,
    /// New start time as an RFC 3339 timestamp
    #[arg(long)]
    pub start_time: Option<String>,
    /// Reassign to a different service
    #[arg(long)]
    pub service: Option<u64>,
    /// Reassign to a different provider
    #[arg(long)]
    pub provider: Option<u64>,
    /// New status; a cancelled or completed reservation cannot return to
    /// confirmed
    #[arg(long)]
    pub status: Option<StatusArg>,
    /// New client name
    #[arg(long)]
    pub name: Option<String>,
    /// New client email
    #[arg(long)]
    pub email: Option<String>,
    /// New client phone number
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<UpdateReservationArgs> for UpdateReservation {
    fn from(val: UpdateReservationArgs) -> Self {
        UpdateReservation {
            id: val.id,
            start_time: val.start_time,
            service_id: val.service,
            provider_id: val.provider,
            status: val.status.map(|s| s.to_string()),
            client_name: val.name,
            client_email: val.email,
            client_phone: val.phone,
        }
    }
}

/// Cancel or complete a reservation by ID
#[derive(Args)]
pub struct StatusChangeArgs {
    /// ID of the reservation
    pub id: u64,
}

/// Delete a reservation permanently
#[derive(Args)]
pub struct DeleteReservationArgs {
    /// ID of the reservation to permanently delete
    pub id: u64,
}

impl From<DeleteReservationArgs> for Id {
    fn from(val: DeleteReservationArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ReservationCommands {
    /// Book a new reservation
    #[command(alias = "c")]
    Create(CreateReservationArgs),
    /// List reservations
    #[command(aliases = ["l", "ls"])]
    List(ListReservationsArgs),
    /// Show details of a specific reservation
    #[command(alias = "s")]
    Show(ShowReservationArgs),
    /// Update a reservation's details
    #[command(alias = "u")]
    Update(UpdateReservationArgs),
    /// Cancel a reservation, keeping the record and freeing the slot
    #[command(alias = "x")]
    Cancel(StatusChangeArgs),
    /// Mark a reservation's appointment as completed
    #[command(alias = "done")]
    Complete(StatusChangeArgs),
    /// Delete a reservation permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteReservationArgs),
}

/// Command-line argument representation of reservation statuses
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum StatusArg {
    /// Active booking occupying its slot
    Confirmed,
    /// Cancelled booking; record kept, slot free
    Cancelled,
    /// Appointment took place
    Completed,
}

impl From<StatusArg> for ReservationStatus {
    fn from(val: StatusArg) -> Self {
        match val {
            StatusArg::Confirmed => ReservationStatus::Confirmed,
            StatusArg::Cancelled => ReservationStatus::Cancelled,
            StatusArg::Completed => ReservationStatus::Completed,
        }
    }
}

impl std::fmt::Display for StatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(ReservationStatus::from(*self).as_str())
    }
}
