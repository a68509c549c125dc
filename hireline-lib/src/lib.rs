//! Hireline ATS client library
//!
//! A Rust async client and view engine for the Hireline recruiting backend:
//! typed models for candidates, agencies, client companies, and job postings;
//! the REST surface the dashboard consumes; and a pure roster view engine
//! (filtering, pagination, column projection, multi-select) that derives
//! everything the table renders from an in-memory record collection.

pub mod api;
pub mod error;
pub mod export;
pub mod model;
pub mod view;

mod client;

pub use client::*;
