mod ticket_status;

pub use ticket_status::*;
