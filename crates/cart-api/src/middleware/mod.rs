//! HTTP middleware for the cart service.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded into the request span)
//! 4. CORS (browser GraphQL clients)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
