//! WhatsGate API modules
//!
//! - [`message`] - Text and document sending (`/send`)
//! - [`contact`] - WhatsApp registration check (`/check`)

pub mod contact;
pub mod message;
pub mod r#trait;

pub use contact::ContactApi;
pub use message::MessageApi;
pub use r#trait::WhatsgateApi;
