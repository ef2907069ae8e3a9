use super::TicketStatus;
use serde::Deserialize;
use std::str::FromStr;

///
/// Raw query string of the tickets listing.
/// Values are not validated here, see [TicketFilters]
///
#[derive(Debug, Default, Deserialize)]
pub struct TicketQuery {
    pub status: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TicketFilters {
    pub status: Option<TicketStatus>,
}

impl From<TicketQuery> for TicketFilters {
    fn from(value: TicketQuery) -> Self {
        // Unknown status means no filter at all
        let status = value
            .status
            .and_then(|status| TicketStatus::from_str(&status).ok());

        Self { status }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn filters(status: Option<&str>) -> TicketFilters {
        TicketFilters::from(TicketQuery {
            status: status.map(str::to_string),
        })
    }

    #[test]
    fn known_status_kept() {
        assert_eq!(filters(Some("active")).status, Some(TicketStatus::Active));
        assert_eq!(filters(Some("used")).status, Some(TicketStatus::Used));
    }

    #[test]
    fn unknown_status_ignored() {
        assert_eq!(filters(Some("expired")).status, None);
        assert_eq!(filters(Some("")).status, None);
        assert_eq!(filters(Some("Active")).status, None);
    }

    #[test]
    fn missing_status_ignored() {
        assert_eq!(filters(None), TicketFilters::default());
    }
}
