use super::Ticket;
use crate::{dto::input::TicketStatus, repository};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket
    ///
    /// ### Errors
    /// - [repository::Error::InsertUniqueViolation] when ticket with the same id already exists
    ///
    async fn insert(&self, ticket: &Ticket) -> Result<(), repository::Error>;

    async fn find(&self, id: Uuid) -> Result<Option<Ticket>, repository::Error>;

    ///
    /// Finds all tickets, optionally only those with given status.
    /// Tickets are sorted descending by creation date.
    ///
    async fn find_many(&self, status: Option<TicketStatus>)
        -> Result<Vec<Ticket>, repository::Error>;

    ///
    /// Saves status and deactivated_at of the ticket.
    /// Stored ticket is updated only while its status is still `expected_status`.
    ///
    /// ### Errors
    /// - [repository::Error::NoDocumentUpdated] when
    ///     - ticket does not exist
    ///     - stored status differs from `expected_status`
    ///
    async fn update(
        &self,
        ticket: &Ticket,
        expected_status: TicketStatus,
    ) -> Result<(), repository::Error>;

    async fn count(&self, status: Option<TicketStatus>) -> Result<u64, repository::Error>;
}
