use crate::{dto::input::TicketStatus, repository::tickets_repository::entity::TicketFindEntity};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: Uuid,

    pub status: TicketStatus,

    pub created_at: OffsetDateTime,
    pub deactivated_at: Option<OffsetDateTime>,
}

impl From<TicketFindEntity> for Ticket {
    fn from(value: TicketFindEntity) -> Self {
        Self {
            id: value.id.into(),
            status: value.status,
            created_at: value.created_at.into(),
            deactivated_at: value.deactivated_at.map(OffsetDateTime::from),
        }
    }
}
