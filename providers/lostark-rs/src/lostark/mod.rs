//! Lost Ark API Client
//!
//! This module contains the rate-limited HTTP client for the Lost Ark
//! developer API and the records its endpoints return.

pub mod client;
pub mod types;

// Re-export commonly used types
pub use client::LostArkClient;
