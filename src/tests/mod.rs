use crate::client::{Authenticated, Client, ClientConfig};
use httpmock::MockServer;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

mod market;

pub(crate) const API_KEY: &str = "test-api-key";

static INIT: Once = Once::new();

/// Route `tracing` output through the test harness, filtered by `RUST_LOG`
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Client authenticated with `API_KEY`, pointed at the mock server
pub(crate) fn client_for(server: &MockServer) -> Client<Authenticated> {
    init_logging();
    let config = ClientConfig::default().with_base_url(server.base_url());
    Client::from_api_key_with_config(API_KEY, config).unwrap()
}

/// Client whose requests can never reach a server
pub(crate) fn unreachable_client() -> Client<Authenticated> {
    let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
    Client::from_api_key_with_config(API_KEY, config).unwrap()
}
