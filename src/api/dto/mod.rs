//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Conversions to and from domain types are `From` impls.

pub mod airline;
pub mod airport;
pub mod health;
