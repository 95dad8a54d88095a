//! WhatsGate SDK for Rust
//!
//! An async client for the [WhatsGate](https://whatsgate.ru) WhatsApp gateway
//! HTTP API.
//!
//! ## API Coverage
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | Send text message | `POST /send` |
//! | Send PDF document | `POST /send` |
//! | Check number registration | `POST /check` |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use whatsgate_sdk::Whatsgate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let whatsgate = Whatsgate::new("your_api_key", "your_whatsapp_id")?;
//!
//!     let sent = whatsgate.send_message("79990001122", "hello").await?;
//!     println!("Message ID: {} (ack {})", sent.result.id, sent.result.ack);
//!
//!     let pdf = std::fs::read("invoice.pdf")?;
//!     whatsgate
//!         .send_document("79990001122", "Your invoice", "invoice.pdf", &pdf)
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`api`] - Gateway API modules (message, contact)
//! - [`client`] - HTTP client and the [`Whatsgate`] facade
//! - [`error`] - Error types
//! - [`middleware`] - Tower layers for header injection and logging
//! - [`types`] - Identifiers and wire types
//!
//! ## Error Handling
//!
//! Every call is a single request; nothing is retried. Any response other
//! than HTTP 200 is reported as [`WhatsgateError::Status`]:
//!
//! ```rust,ignore
//! use whatsgate_sdk::WhatsgateError;
//!
//! match whatsgate.check_number("79990001122").await {
//!     Ok(registered) => println!("registered: {}", registered),
//!     Err(WhatsgateError::Status { status, body }) => {
//!         eprintln!("gateway rejected the call ({}): {}", status, body);
//!     }
//!     Err(WhatsgateError::Http(e)) => {
//!         eprintln!("HTTP error: {}", e);
//!     }
//!     Err(e) => {
//!         eprintln!("Other error: {}", e);
//!     }
//! }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod middleware;
pub mod types;

pub use client::{Whatsgate, WhatsgateBuilder, WhatsgateClient, WhatsgateClientBuilder};
pub use error::{HttpError, WhatsgateError};
