//! Client-side rate limiting for Lost Ark API requests
//!
//! The server publishes one quota window per API key through `X-RateLimit-*`
//! response headers. [`QuotaState`] tracks that window and [`AdmissionGate`]
//! paces outbound requests against it so the client throttles itself before
//! the server starts answering 429.

pub mod gate;
pub mod quota;

// Re-export commonly used types
pub use gate::{AdmissionGate, QuotaPermit, QuotaSnapshot, DEFAULT_RESET_GRACE};
pub use quota::QuotaState;
