//! Shared response envelope types for API handlers.
//!
//! Collection and report responses use a `{ "data": ... }` envelope;
//! single-entity CRUD responses return the entity directly. Use
//! [`DataResponse`] instead of ad-hoc
//! `serde_json::json!({ "data": ... })` for compile-time type safety
//! and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
