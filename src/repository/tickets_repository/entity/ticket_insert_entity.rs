use crate::dto::input::TicketStatus;
use bson::{DateTime, Uuid};
use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity {
    pub id: Uuid,

    pub status: TicketStatus,

    pub created_at: DateTime,
    pub deactivated_at: Option<DateTime>,
}
