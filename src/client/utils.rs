use crate::client::config::ClientConfig;
use crate::error::Result;

/**
INTERNAL: Build the HTTP client from the configuration

# Arguments
- `config`: Timeout and user agent applied to every request

# Returns
- A `reqwest::Client` with assigned default headers
*/
pub(super) fn build_http(config: &ClientConfig) -> Result<reqwest::Client> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );

    let http = reqwest::Client::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()?;

    Ok(http)
}
