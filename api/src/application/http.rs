pub mod appointment;
pub mod health;
pub mod options;
pub mod property;
pub mod query_extractor;
pub mod server;
pub mod staff;
