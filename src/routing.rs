use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    http::{Method, StatusCode, Uri},
    routing::{get, patch, post},
    Json, Router,
};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/health", get(health).fallback(route_not_found))
        .route(
            "/api/tickets",
            post(create_ticket)
                .get(get_tickets)
                .fallback(route_not_found),
        )
        .route(
            "/api/tickets/stats",
            get(get_ticket_stats).fallback(route_not_found),
        )
        .route(
            "/api/tickets/:id",
            get(get_ticket).fallback(route_not_found),
        )
        .route(
            "/api/tickets/:id/deactivate",
            patch(deactivate_ticket).fallback(route_not_found),
        )
        .fallback(route_not_found)
}

async fn health() -> Json<output::Envelope<output::Health>> {
    Json(output::Envelope::success(
        "Digital Ticket System API is running",
        output::Health {
            timestamp: OffsetDateTime::now_utc(),
        },
    ))
}

async fn create_ticket(
    State(service): State<Arc<dyn TicketsService>>,
) -> Result<(StatusCode, Json<output::Envelope<output::Ticket>>), Error> {
    let ticket = service.create_ticket().await?;

    Ok((
        StatusCode::CREATED,
        Json(output::Envelope::success(
            "Ticket created successfully",
            ticket,
        )),
    ))
}

async fn get_tickets(
    State(service): State<Arc<dyn TicketsService>>,
    query: Result<Query<input::TicketQuery>, QueryRejection>,
) -> Result<Json<output::Envelope<Vec<output::Ticket>>>, Error> {
    // Malformed query string is treated the same as a missing one
    let filters = query
        .map(|Query(query)| input::TicketFilters::from(query))
        .unwrap_or_default();

    let tickets = service.find_tickets(filters).await?;

    Ok(Json(output::Envelope::success(
        "Tickets retrieved successfully",
        tickets,
    )))
}

async fn get_ticket_stats(
    State(service): State<Arc<dyn TicketsService>>,
) -> Result<Json<output::Envelope<output::TicketStats>>, Error> {
    let stats = service.ticket_stats().await?;

    Ok(Json(output::Envelope::success(
        "Ticket statistics retrieved successfully",
        stats,
    )))
}

async fn get_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<output::Envelope<output::Ticket>>, Error> {
    let id = parse_ticket_id(id)?;

    let ticket = service
        .find_ticket(id)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(output::Envelope::success(
        "Ticket retrieved successfully",
        ticket,
    )))
}

async fn deactivate_ticket(
    State(service): State<Arc<dyn TicketsService>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<output::Envelope<output::Ticket>>, Error> {
    let id = parse_ticket_id(id)?;

    let ticket = service
        .deactivate_ticket(id)
        .await?
        .ok_or(Error::TicketNotExist)?;

    Ok(Json(output::Envelope::success(
        "Ticket deactivated successfully",
        ticket,
    )))
}

async fn route_not_found(method: Method, uri: Uri) -> Error {
    Error::RouteNotExist {
        method,
        path: uri.path().to_string(),
    }
}

///
/// Ticket ids are UUIDs, anything else cannot name an existing ticket
///
fn parse_ticket_id(id: Result<Path<String>, PathRejection>) -> Result<Uuid, Error> {
    let Ok(Path(id)) = id else {
        return Err(Error::TicketNotExist);
    };

    Uuid::parse_str(&id).map_err(|_| Error::TicketNotExist)
}
