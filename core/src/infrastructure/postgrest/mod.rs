//! Supabase REST (PostgREST) backend for list and options queries.

pub mod client;
pub mod query;

pub use client::PostgrestRepository;
