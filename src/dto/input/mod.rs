mod ticket_filters;

pub use ticket_filters::*;

pub use super::inoutput::TicketStatus;
