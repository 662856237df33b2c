//! Encoding and decoding of list filters, sorting and pagination.
//!
//! The client side turns UI state into a query string through an
//! [`adapter::EntityAdapter`]; list endpoints decode the same string back
//! into a [`list_request::ListRequest`].

pub mod adapter;
pub mod errors;
pub mod list_request;
pub mod pagination;
pub mod search_params;
pub mod sort;
