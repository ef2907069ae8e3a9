use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;
use uuid::Uuid;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Issues new active ticket
    ///
    /// ### Returns
    /// Created ticket
    ///
    async fn create_ticket(&self) -> Result<output::Ticket, Error>;

    ///
    /// Finds tickets matching filters, newest first
    ///
    async fn find_tickets(
        &self,
        filters: input::TicketFilters,
    ) -> Result<Vec<output::Ticket>, Error>;

    ///
    /// ### Returns
    /// `None` when ticket does not exist
    ///
    async fn find_ticket(&self, id: Uuid) -> Result<Option<output::Ticket>, Error>;

    ///
    /// Marks active ticket as used
    ///
    /// ### Returns
    /// Updated ticket or `None` when ticket does not exist
    ///
    /// ### Errors
    /// - [Error::TicketAlreadyUsed] when
    ///     - ticket had already been used
    ///     - ticket was used by another request in the meantime
    ///
    async fn deactivate_ticket(&self, id: Uuid) -> Result<Option<output::Ticket>, Error>;

    ///
    /// Counts all, active and used tickets.
    /// Each number is a separate query so they may not add up under concurrent writes.
    ///
    async fn ticket_stats(&self) -> Result<output::TicketStats, Error>;
}
