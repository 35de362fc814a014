//! Configuration Management
//!
//! This module handles loading the API token and client settings from the environment.

pub mod client;
pub mod credentials;

// Re-export
pub use client::ClientConfig;
pub use credentials::{Credentials, SecretString};
