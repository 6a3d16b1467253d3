//! Domain types and pure logic for the DevHub portfolio service.
//!
//! This crate has no I/O: everything here is plain data and plain
//! functions, exercised by the `devhub-db`, `devhub-ai`, and
//! `devhub-api` crates.

pub mod catalog;
pub mod chat;
pub mod error;
pub mod fallback;
pub mod import;
pub mod project;
pub mod types;

pub use error::CoreError;
