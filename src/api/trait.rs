//! Gateway API trait
//!
//! Provides the base trait shared by all gateway API implementations.

use crate::client::WhatsgateClient;

/// Trait for gateway API implementations.
pub trait WhatsgateApi: Send + Sync {
    /// Get a reference to the underlying client
    fn client(&self) -> &WhatsgateClient;
}
