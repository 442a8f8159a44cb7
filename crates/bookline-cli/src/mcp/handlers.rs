//! MCP tool handlers implementation

use std::sync::Arc;

use bookline_core::{
    display::{CreateResult, DeleteResult, OperationStatus, Providers, Reservations, Services},
    params as core, Scheduler, SchedulerError,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{
        CallToolResult, Content, GetPromptRequestParam, GetPromptResult, ListPromptsResult,
        PaginatedRequestParam, Prompt, PromptArgument, PromptMessage, PromptMessageContent,
        PromptMessageRole,
    },
    service::RequestContext,
    ErrorData, ErrorData as McpError, RoleServer,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::{errors::to_mcp_error, prompts::get_prompt_templates};

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// This generic wrapper implements the parameter wrapper pattern for the MCP
// layer: it adds the Deserialize and JsonSchema derives the protocol needs
// while #[serde(transparent)] passes serialization straight through to the
// framework-free core parameter type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type CreateReservation = McpParams<core::CreateReservation>;
pub type UpdateReservation = McpParams<core::UpdateReservation>;
pub type ChangeStatus = McpParams<core::ChangeStatus>;
pub type ListReservations = McpParams<core::ListReservations>;
pub type AvailableSlots = McpParams<core::AvailableSlots>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    scheduler: Arc<Mutex<Scheduler>>,
}

impl McpHandlers {
    pub fn new(scheduler: Arc<Mutex<Scheduler>>) -> Self {
        Self { scheduler }
    }

    pub async fn list_services(&self) -> McpResult {
        debug!("list_services");

        let services = self
            .scheduler
            .lock()
            .await
            .list_services()
            .await
            .map_err(|e| to_mcp_error("Failed to list services", &e))?;

        let result = format!("# Services\n\n{}", Services(services));
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn list_providers(&self) -> McpResult {
        debug!("list_providers");

        let providers = self
            .scheduler
            .lock()
            .await
            .list_providers()
            .await
            .map_err(|e| to_mcp_error("Failed to list providers", &e))?;

        let result = format!("# Providers\n\n{}", Providers(providers));
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn get_available_slots(
        &self,
        Parameters(params): Parameters<AvailableSlots>,
    ) -> McpResult {
        debug!("get_available_slots: {:?}", params);

        let listing = self
            .scheduler
            .lock()
            .await
            .available_slots_listing(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list available slots", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            listing.to_string(),
        )]))
    }

    pub async fn create_reservation(
        &self,
        Parameters(params): Parameters<CreateReservation>,
    ) -> McpResult {
        debug!("create_reservation: {:?}", params);

        let reservation = self
            .scheduler
            .lock()
            .await
            .create_reservation(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create reservation", &e))?;

        let result = CreateResult::new(reservation);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn show_reservation(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_reservation: {:?}", params);

        let inner_params = params.as_ref();
        let reservation = self
            .scheduler
            .lock()
            .await
            .get_reservation(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to get reservation", &e))?
            .ok_or_else(|| {
                to_mcp_error(
                    "Failed to get reservation",
                    &SchedulerError::ReservationNotFound {
                        id: inner_params.id,
                    },
                )
            })?;

        Ok(CallToolResult::success(vec![Content::text(
            reservation.to_string(),
        )]))
    }

    pub async fn list_reservations(
        &self,
        Parameters(params): Parameters<ListReservations>,
    ) -> McpResult {
        debug!("list_reservations: {:?}", params);

        let reservations = self
            .scheduler
            .lock()
            .await
            .list_reservations(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list reservations", &e))?;

        let result = format!("# Reservations\n\n{}", Reservations(reservations));
        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn update_reservation(
        &self,
        Parameters(params): Parameters<UpdateReservation>,
    ) -> McpResult {
        debug!("update_reservation: {:?}", params);

        let inner_params = params.as_ref();
        let reservation = self
            .scheduler
            .lock()
            .await
            .update_reservation(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to update reservation", &e))?;

        let mut messages = Vec::new();
        if let Some(start_time) = &inner_params.start_time {
            messages.push(format!("Moved to {start_time}"));
        }
        if inner_params.service_id.is_some() {
            messages.push("Changed service".to_string());
        }
        if inner_params.provider_id.is_some() {
            messages.push("Changed provider".to_string());
        }
        if let Some(status) = &inner_params.status {
            messages.push(format!("Set status to '{status}'"));
        }
        if inner_params.client_name.is_some()
            || inner_params.client_email.is_some()
            || inner_params.client_phone.is_some()
        {
            messages.push("Updated client contact details".to_string());
        }

        let result = if messages.is_empty() {
            format!("No updates provided for reservation {}", inner_params.id)
        } else {
            format!(
                "Reservation {} updated: {}\n\n{}",
                inner_params.id,
                messages.join(", "),
                reservation
            )
        };

        Ok(CallToolResult::success(vec![Content::text(result)]))
    }

    pub async fn change_reservation_status(
        &self,
        Parameters(params): Parameters<ChangeStatus>,
    ) -> McpResult {
        debug!("change_reservation_status: {:?}", params);

        let inner_params = params.as_ref();
        let reservation = self
            .scheduler
            .lock()
            .await
            .change_status(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to change reservation status", &e))?;

        let result = OperationStatus::success(format!(
            "Reservation {} is now '{}'. Cancelled and completed reservations keep their record but free the slot.",
            inner_params.id,
            reservation.status.as_str()
        ));
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn delete_reservation(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_reservation: {:?}", params);

        let reservation = self
            .scheduler
            .lock()
            .await
            .delete_reservation(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete reservation", &e))?;

        let result = DeleteResult::new(reservation);
        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    /// List all available prompts
    pub async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        debug!("list_prompts");

        let templates = get_prompt_templates();
        let prompts = templates
            .iter()
            .map(|template| {
                Prompt::new(
                    &template.name,
                    Some(&template.description),
                    Some(
                        template
                            .arguments
                            .iter()
                            .map(|arg| PromptArgument {
                                name: arg.name.clone(),
                                title: None,
                                description: Some(arg.description.clone()),
                                required: Some(arg.required),
                            })
                            .collect(),
                    ),
                )
            })
            .collect();

        Ok(ListPromptsResult {
            next_cursor: None,
            prompts,
        })
    }

    /// Get a specific prompt by name and apply arguments
    pub async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        debug!("get_prompt: {}", request.name);

        let templates = get_prompt_templates();
        let template = templates
            .iter()
            .find(|t| t.name == request.name)
            .ok_or_else(|| McpError::invalid_params("Prompt not found", None))?;

        let mut prompt_text = template.template.clone();

        // Apply argument substitution if arguments are provided
        if let Some(args) = &request.arguments {
            for arg_def in &template.arguments {
                if let Some(arg_value) = args.get(&arg_def.name) {
                    if let Some(arg_str) = arg_value.as_str() {
                        let placeholder = format!("{{{}}}", arg_def.name);
                        prompt_text = prompt_text.replace(&placeholder, arg_str);
                    } else if arg_def.required {
                        return Err(McpError::invalid_params(
                            format!("Argument '{}' must be a string", arg_def.name),
                            None,
                        ));
                    }
                } else if arg_def.required {
                    return Err(McpError::invalid_params(
                        format!("Required argument '{}' is missing", arg_def.name),
                        None,
                    ));
                }
            }
        } else {
            let required_args: Vec<_> = template
                .arguments
                .iter()
                .filter(|arg| arg.required)
                .map(|arg| arg.name.as_str())
                .collect();
            if !required_args.is_empty() {
                return Err(McpError::invalid_params(
                    format!("Required arguments missing: {}", required_args.join(", ")),
                    None,
                ));
            }
        }

        Ok(GetPromptResult {
            description: Some(template.description.clone()),
            messages: vec![PromptMessage {
                role: PromptMessageRole::User,
                content: PromptMessageContent::text(prompt_text),
            }],
        })
    }
}
