use super::TicketsService;
use crate::{
    dto::{input, output},
    error::{Error, Operation},
    repository::{self, Ticket, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

pub struct TicketsServiceImpl {
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(repository: Arc<dyn TicketsRepository>) -> Self {
        Self { repository }
    }

    ///
    /// Current time truncated to milliseconds, the precision kept by the database,
    /// so returned tickets are equal to the ones read back later
    ///
    fn now() -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        let sub_millisecond_nanos = now.nanosecond() % 1_000_000;

        now - Duration::nanoseconds(sub_millisecond_nanos.into())
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(&self) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");

        let ticket = Ticket {
            id: Uuid::new_v4(),
            status: input::TicketStatus::Active,
            created_at: Self::now(),
            deactivated_at: None,
        };

        self.repository
            .insert(&ticket)
            .await
            .map_err(Error::database(Operation::CreateTicket))?;
        tracing::info!(id = %ticket.id, "created ticket");

        Ok(ticket.into())
    }

    async fn find_tickets(
        &self,
        filters: input::TicketFilters,
    ) -> Result<Vec<output::Ticket>, Error> {
        tracing::info!("finding tickets");
        tracing::trace!(?filters);

        let tickets = self
            .repository
            .find_many(filters.status)
            .await
            .map_err(Error::database(Operation::FetchTickets))?;
        tracing::info!(count = tickets.len(), "found tickets");

        let tickets = tickets.into_iter().map(output::Ticket::from).collect();

        Ok(tickets)
    }

    async fn find_ticket(&self, id: Uuid) -> Result<Option<output::Ticket>, Error> {
        tracing::info!(%id, "finding ticket");

        let ticket = self
            .repository
            .find(id)
            .await
            .map_err(Error::database(Operation::FetchTicket))?;
        tracing::info!(found = ticket.is_some(), "finished finding ticket");

        Ok(ticket.map(output::Ticket::from))
    }

    async fn deactivate_ticket(&self, id: Uuid) -> Result<Option<output::Ticket>, Error> {
        tracing::info!(%id, "deactivating ticket");

        let Some(mut ticket) = self
            .repository
            .find(id)
            .await
            .map_err(Error::database(Operation::DeactivateTicket))?
        else {
            tracing::info!(%id, "ticket not exist");
            return Ok(None);
        };

        if ticket.status == input::TicketStatus::Used {
            return Err(Error::TicketAlreadyUsed);
        }

        ticket.status = input::TicketStatus::Used;
        ticket.deactivated_at = Some(Self::now());

        match self
            .repository
            .update(&ticket, input::TicketStatus::Active)
            .await
        {
            Ok(()) => {
                tracing::info!(%id, "deactivated ticket");
                Ok(Some(ticket.into()))
            }
            // Another request deactivated it between find and update
            Err(repository::Error::NoDocumentUpdated) => Err(Error::TicketAlreadyUsed),
            Err(err) => Err(Error::database(Operation::DeactivateTicket)(err)),
        }
    }

    async fn ticket_stats(&self) -> Result<output::TicketStats, Error> {
        tracing::info!("counting tickets");

        let (total, active, used) = tokio::try_join!(
            self.repository.count(None),
            self.repository.count(Some(input::TicketStatus::Active)),
            self.repository.count(Some(input::TicketStatus::Used)),
        )
        .map_err(Error::database(Operation::FetchTicketStats))?;
        tracing::info!(total, active, used, "counted tickets");

        Ok(output::TicketStats {
            total,
            active,
            used,
        })
    }
}
