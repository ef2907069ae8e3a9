use crate::{dto::output::Envelope, repository};
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket not exist")]
    TicketNotExist,

    #[error("Ticket is already used")]
    TicketAlreadyUsed,

    #[error("route {method} {path} not exist")]
    RouteNotExist { method: Method, path: String },

    ///
    /// Only messages of `operation` are shown to the user
    ///
    #[error("{}: {}", .operation.context(), .source)]
    Database {
        operation: Operation,
        #[source]
        source: repository::Error,
    },

    #[error("request handler panicked: {0}")]
    Panic(String),
}

impl Error {
    ///
    /// Wraps repository error with the operation that failed
    ///
    pub fn database(operation: Operation) -> impl FnOnce(repository::Error) -> Self {
        move |source| Self::Database { operation, source }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateTicket,
    FetchTickets,
    FetchTicket,
    DeactivateTicket,
    FetchTicketStats,
}

impl Operation {
    /// Service level description, sent in `error`
    pub fn context(&self) -> &'static str {
        match self {
            Operation::CreateTicket => "Failed to create ticket",
            Operation::FetchTickets => "Failed to fetch tickets",
            Operation::FetchTicket => "Failed to fetch ticket",
            Operation::DeactivateTicket => "Failed to deactivate ticket",
            Operation::FetchTicketStats => "Failed to fetch ticket statistics",
        }
    }

    /// Request level description, sent in `message`
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::CreateTicket => "Failed to create ticket",
            Operation::FetchTickets => "Failed to retrieve tickets",
            Operation::FetchTicket => "Failed to retrieve ticket",
            Operation::DeactivateTicket => "Failed to deactivate ticket",
            Operation::FetchTicketStats => "Failed to retrieve ticket statistics",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let (status, envelope) = match self {
            Error::TicketNotExist => (
                StatusCode::NOT_FOUND,
                Envelope::failure("Ticket not found", None),
            ),
            Error::TicketAlreadyUsed => (
                StatusCode::BAD_REQUEST,
                Envelope::failure("Failed to deactivate ticket", Some(self.to_string())),
            ),
            Error::RouteNotExist { method, path } => (
                StatusCode::NOT_FOUND,
                Envelope::failure(format!("Route {method} {path} not found"), None),
            ),
            Error::Database {
                operation,
                source: _,
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::failure(
                    operation.failure_message(),
                    Some(operation.context().to_string()),
                ),
            ),
            Error::Panic(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Envelope::failure("Internal server error", None),
            ),
        };

        (status, Json(envelope)).into_response()
    }
}
