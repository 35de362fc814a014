// Library exports for lostark-provider

pub mod error;

// Lost Ark API integration modules
pub mod config; // Configuration management
pub mod lostark; // Lost Ark API client
pub mod ratelimit; // Header-driven request admission

pub use error::{LostArkError, Result};
pub use lostark::LostArkClient;
