//! Waitlist API client library
//!
//! A thin async client for the read-only waitlist endpoint: one
//! unauthenticated GET returning a JSON array of records, parsed into the
//! dynamic [`Record`](waitlist_core::model::Record) model.

pub mod error;
pub mod parse;

mod client;

pub use client::*;
pub use error::Error;
