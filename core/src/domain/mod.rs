pub mod appointment;
pub mod common;
pub mod listing;
pub mod property;
pub mod query;
pub mod staff;
