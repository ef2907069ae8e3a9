use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
pub struct Health {
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}
