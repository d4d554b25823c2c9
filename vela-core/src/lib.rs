//! Vela Core
//!
//! Core types for the Vela infrastructure tool's provider plugins:
//! resource identity and values, the Provider trait, attribute schemas,
//! and structured diagnostics.

pub mod diagnostic;
pub mod provider;
pub mod resource;
pub mod schema;
