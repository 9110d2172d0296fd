//! HTTP route handlers

pub mod matches;
pub mod status;
pub mod table;
pub mod weeks;
