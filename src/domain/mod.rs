//! Domain layer for the platform clients
//!
//! Configuration models, credential types, the client port and the error
//! taxonomy shared by both platform adapters.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ClientError, ClientResult};
