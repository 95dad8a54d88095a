//! Middleware components for the WhatsGate SDK.
//!
//! Every request leaves the client through a Tower stack wrapping
//! [`reqwest::Client`]:
//!
//! - [`ApiKeyLayer`] - Injects `X-Api-Key` and `Content-Type` headers
//! - [`LoggingMiddleware`] - Logs request/response information
//!
//! ## Usage
//!
//! ```ignore
//! use tower::ServiceBuilder;
//! use whatsgate_sdk::middleware::{ApiKeyLayer, LoggingMiddleware};
//!
//! let service = ServiceBuilder::new()
//!     .layer(ApiKeyLayer::new(&api_key)?)
//!     .layer(LoggingMiddleware::new())
//!     .service(reqwest::Client::new());
//! ```

// Re-export tower types for convenience
pub use tower::{Layer, Service, ServiceBuilder};

mod api_key;
mod logging;

pub use api_key::{ApiKeyLayer, ApiKeyService, API_KEY_HEADER};
pub use logging::{LoggingMiddleware, LoggingMiddlewareService};
