use super::TicketStatus;
use crate::repository;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub status: TicketStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub deactivated_at: Option<OffsetDateTime>,
}

impl From<repository::Ticket> for Ticket {
    fn from(value: repository::Ticket) -> Self {
        Self {
            id: value.id,
            status: value.status,
            created_at: value.created_at,
            deactivated_at: value.deactivated_at,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;
    use time::macros::datetime;

    #[test]
    fn ticket_json_serialize_active() {
        let ticket = Ticket {
            id: Uuid::from_u128(1),
            status: TicketStatus::Active,
            created_at: datetime!(2024-03-02 10:15:30.123 UTC),
            deactivated_at: None,
        };

        let value = serde_json::to_value(&ticket).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(
            object.get("id").unwrap(),
            "00000000-0000-0000-0000-000000000001"
        );
        assert_eq!(object.get("status").unwrap(), "active");
        assert_eq!(
            object.get("createdAt").unwrap(),
            "2024-03-02T10:15:30.123Z"
        );
        assert_eq!(object.get("deactivatedAt").unwrap(), &Value::Null);
    }

    #[test]
    fn ticket_json_serialize_used() {
        let ticket = Ticket {
            id: Uuid::new_v4(),
            status: TicketStatus::Used,
            created_at: datetime!(2024-03-02 10:15:30 UTC),
            deactivated_at: Some(datetime!(2024-03-02 11:00:00 UTC)),
        };

        let value = serde_json::to_value(&ticket).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.get("status").unwrap(), "used");
        assert_eq!(
            object.get("deactivatedAt").unwrap(),
            "2024-03-02T11:00:00Z"
        );
    }
}
