//! Prompt templates for MCP server

/// Argument definition for a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplateArg {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// Definition of a prompt template
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: String,
    pub template: String,
    pub arguments: Vec<PromptTemplateArg>,
}

/// Get predefined prompt templates for appointment booking
pub fn get_prompt_templates() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            name: "book".to_string(),
            description: "Book an appointment from a natural-language request using Bookline's MCP tools".to_string(),
            template: r#"You are a booking assistant for a service business. Handle the following request end to end.

# Request
{request}

# Workflow

## Step 1: Resolve the catalog
- Use `list_services` to find the service the client asked for and note its id, duration, and price.
- Use `list_providers` to pick a provider. Respect any provider the client named; otherwise prefer one whose specialties include the requested service.

## Step 2: Find an open slot
- Use `get_available_slots` with the requested date and the chosen provider's id.
- If the requested time is taken, offer the closest open slots on that day instead of guessing.

## Step 3: Create the reservation
- Use `create_reservation` with the slot start time (RFC 3339, e.g. 2024-01-10T10:00:00Z), service id, provider id, and the client's name and email (phone if given).
- If the tool reports the slot is already booked, go back to Step 2 and pick another slot.

## Step 4: Confirm
Summarize the booking for the client: service, provider, date and time, and price. Mention that they can reschedule or cancel by reservation ID."#.to_string(),
            arguments: vec![
                PromptTemplateArg {
                    name: "request".to_string(),
                    description: "The client's booking request in natural language".to_string(),
                    required: true,
                },
            ],
        },
        PromptTemplate {
            name: "day-review".to_string(),
            description: "Summarize one day's schedule across providers".to_string(),
            template: r#"Review the schedule for {date}.

1. Use `list_providers` to get the roster.
2. For each provider, call `get_available_slots` with the date and their id to see what is open.
3. Use `list_reservations` filtered by provider to see what is booked, and note any cancelled reservations whose slots are open again.

Produce a short report: bookings per provider in time order, open slots worth filling, and the day's utilization (booked slots / total slots)."#.to_string(),
            arguments: vec![
                PromptTemplateArg {
                    name: "date".to_string(),
                    description: "Calendar date to review, in YYYY-MM-DD form".to_string(),
                    required: true,
                },
            ],
        },
    ]
}
