mod envelope;
mod health;
mod ticket;
mod ticket_stats;

pub use envelope::*;
pub use health::*;
pub use ticket::*;
pub use ticket_stats::*;

pub use super::inoutput::TicketStatus;
