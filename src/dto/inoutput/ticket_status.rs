use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

///
/// The only legal transition is [TicketStatus::Active] -> [TicketStatus::Used]
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TicketStatus {
    Active,
    Used,
}
