use crate::dto::input::TicketStatus;
use bson::{DateTime, Uuid};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub id: Uuid,

    pub status: TicketStatus,

    pub created_at: DateTime,
    pub deactivated_at: Option<DateTime>,
}
