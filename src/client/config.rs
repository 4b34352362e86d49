use std::time::Duration;

use crate::client::constants::{BASE_URL, DEFAULT_TIMEOUT_SECS};

/**
Settings used to build a `Client`

# Examples

```rust
use std::time::Duration;
use waxpeer::client::ClientConfig;

let config = ClientConfig::default()
    .with_timeout(Duration::from_secs(10))
    .with_user_agent("my-bot/1.0");
```
*/
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host and version prefix every endpoint path is appended to
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("waxpeer-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
