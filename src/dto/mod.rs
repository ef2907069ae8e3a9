//!
//! Module with all dtos that are passed between server and users
//!

mod inoutput;

pub mod input;
pub mod output;
