use std::time::Duration;

use crate::error::WhatsgateError;
use crate::types::{ApiKey, WhatsappId};

use super::{Whatsgate, WhatsgateClient};

#[must_use]
#[derive(Debug, Default)]
pub struct WhatsgateBuilder {
    api_key: Option<ApiKey>,
    whatsapp_id: Option<WhatsappId>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    verbose_logging: bool,
}

impl WhatsgateBuilder {
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn whatsapp_id(mut self, whatsapp_id: WhatsappId) -> Self {
        self.whatsapp_id = Some(whatsapp_id);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn verbose_logging(mut self) -> Self {
        self.verbose_logging = true;
        self
    }

    pub fn build(self) -> Result<Whatsgate, WhatsgateError> {
        let mut builder = WhatsgateClient::builder();

        if let Some(api_key) = self.api_key {
            builder = builder.api_key(api_key);
        }
        if let Some(whatsapp_id) = self.whatsapp_id {
            builder = builder.whatsapp_id(whatsapp_id);
        }
        if let Some(base_url) = self.base_url {
            builder = builder.base_url(base_url);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if self.verbose_logging {
            builder = builder.verbose_logging();
        }

        Ok(Whatsgate::from(builder.build()?))
    }
}
