//! MCP server implementation for Bookline
//!
//! This module implements the Model Context Protocol server for Bookline,
//! providing a standardized interface for AI models to browse the catalog,
//! check availability, and manage reservations.

use std::sync::Arc;

use anyhow::Result;
use bookline_core::Scheduler;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;
pub mod prompts;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{
    AvailableSlots, ChangeStatus, CreateReservation, Id, ListReservations, McpResult,
    UpdateReservation,
};

/// MCP server for Bookline
#[derive(Clone)]
pub struct BooklineMcpServer {
    scheduler: Arc<Mutex<Scheduler>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BooklineMcpServer {
    /// Create a new Bookline MCP server
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "list_services",
        description = "List the service catalog: every bookable service with its ID, duration in minutes, and price. Use the service ID when creating a reservation."
    )]
    async fn list_services(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.list_services().await
    }

    #[tool(
        name = "list_providers",
        description = "List the provider roster: every staff member with their ID, bio, and specialties. Each provider has an independent calendar; use the provider ID when checking availability or creating a reservation."
    )]
    async fn list_providers(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.list_providers().await
    }

    #[tool(
        name = "get_available_slots",
        description = "List the open hourly slots for a calendar day (date in YYYY-MM-DD form). Always pass provider_id to check one provider's calendar; without it, a slot is hidden when ANY provider has a confirmed booking there. Slots are returned in ascending time order."
    )]
    async fn get_available_slots(&self, params: Parameters<AvailableSlots>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.get_available_slots(params).await
    }

    #[tool(
        name = "create_reservation",
        description = "Book a slot. Requires start_time (RFC 3339, e.g. 2024-01-10T10:00:00Z), service_id, provider_id, client_name, and client_email; client_phone is optional. Fails with invalid params if the (start_time, provider) slot is already held by a confirmed reservation. The new reservation snapshots the service and provider details and starts as 'confirmed'."
    )]
    async fn create_reservation(&self, params: Parameters<CreateReservation>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.create_reservation(params).await
    }

    #[tool(
        name = "show_reservation",
        description = "Display the full record of one reservation by ID: slot, service and provider snapshot, client contact details, status, and timestamps."
    )]
    async fn show_reservation(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.show_reservation(params).await
    }

    #[tool(
        name = "list_reservations",
        description = "List reservations in creation order. Optionally filter by status ('confirmed', 'cancelled', 'completed') and/or provider_id. Returns a compact line per reservation with its ID, slot, service, provider, client, and status."
    )]
    async fn list_reservations(&self, params: Parameters<ListReservations>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.list_reservations(params).await
    }

    #[tool(
        name = "update_reservation",
        description = "Partially update a reservation by ID; omitted fields are unchanged. Moving start_time or provider_id re-checks the target slot against all other confirmed reservations and rejects the whole update on a conflict. Reassigning service_id or provider_id re-captures that side's snapshot. A cancelled or completed reservation cannot be set back to 'confirmed'."
    )]
    async fn update_reservation(&self, params: Parameters<UpdateReservation>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.update_reservation(params).await
    }

    #[tool(
        name = "change_reservation_status",
        description = "Change only a reservation's lifecycle status ('confirmed', 'cancelled', or 'completed'). Cancelling or completing keeps the record but frees the slot for rebooking; neither can be reverted to 'confirmed'. To get the slot back, create a new reservation."
    )]
    async fn change_reservation_status(&self, params: Parameters<ChangeStatus>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.change_reservation_status(params).await
    }

    #[tool(
        name = "delete_reservation",
        description = "Permanently delete a reservation record. This cannot be undone and removes the booking history; prefer change_reservation_status with 'cancelled' unless the record itself must go."
    )]
    async fn delete_reservation(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.delete_reservation(params).await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        let handlers = handlers::McpHandlers::new(self.scheduler.clone());
        handlers.get_prompt(request, context).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BooklineMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "bookline".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Bookline is an appointment scheduling system for a service business with a fixed catalog of services and providers and hourly booking slots.

## Core Concepts
- **Services**: What can be booked (name, duration, price). The catalog is read-only.
- **Providers**: Who performs the service. Each provider has an independent calendar: two providers can hold the same hour.
- **Slots**: Hourly start times within business hours. A slot is taken when a *confirmed* reservation holds the same (start time, provider) pair.
- **Reservations**: A booked slot plus client contact details and a snapshot of the service/provider taken at booking time. Status is one of confirmed, cancelled, completed; leaving 'confirmed' frees the slot and is permanent.

## Workflow Examples

### Booking an Appointment
1. `list_services` and `list_providers` to resolve ids from the client's request
2. `get_available_slots` with the date and provider_id to find an open hour
3. `create_reservation` with the slot, ids, and client contact details

### Managing Existing Bookings
- `list_reservations` (filter by status or provider) to find bookings
- `update_reservation` to reschedule or fix contact details - conflicting moves are rejected atomically
- `change_reservation_status` to cancel or complete; the slot opens up again
- `delete_reservation` only when the record itself must be removed

## Important Rules
- Always pass provider_id to get_available_slots; an omitted provider hides any slot booked by anyone.
- Double-booking is rejected at creation and update time; offer the client another open slot instead of retrying.
- Cancelled/completed reservations can never return to confirmed - book a new slot instead.

## Tool Categories
- **Catalog**: list_services, list_providers
- **Availability**: get_available_slots
- **Reservations**: create_reservation, show_reservation, list_reservations, update_reservation, change_reservation_status, delete_reservation"#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: BooklineMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Bookline MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
