//! WhatsGate HTTP Client module
//!
//! This module contains the WhatsgateClient and the Whatsgate facade.

mod whatsgate_client;
pub use whatsgate_client::{WhatsgateClient, WhatsgateClientBuilder};

mod whatsgate;
pub use whatsgate::Whatsgate;

mod builder;
pub use builder::WhatsgateBuilder;
