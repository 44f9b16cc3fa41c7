//! Client for the address-validation service.
//!
//! The service does all matching; this crate only sends an [`AddressFilter`]
//! and hands back either the decoded [`AddressResult`] or a typed [`Error`]
//! carrying whatever the service said.

pub mod batch;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod record;

pub use client::AddressClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use model::{AddressFilter, AddressMatch, AddressResult};
