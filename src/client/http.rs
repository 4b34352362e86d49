use crate::client::Client;
use crate::client::query::Query;
use crate::error::{ApiError, Result};
use crate::types::http::Status;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Method {
    Get,
    Post,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// How a `success: false` response is reported to the caller
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum OnFailure {
    /// The only documented failure is a rejected credential
    WrongApiKey,
    /// The service explains itself in `msg`
    Message,
}

impl OnFailure {
    fn to_error(self, status: Status) -> ApiError {
        match self {
            OnFailure::WrongApiKey => ApiError::WrongApiKey,
            OnFailure::Message => ApiError::Service(status.msg.unwrap_or_default()),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct NoBody;

/**
INTERNAL: Checks the `success` flag of a raw body, then decodes the payload.

# Arguments
- `body`: Raw response bytes
- `on_failure`: Mapping applied when the service reports `success: false`

# Returns
- The decoded payload, or `ApiError::Parsing` when the body does not match `T`
*/
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8], on_failure: OnFailure) -> Result<T> {
    let status: Status = serde_json::from_slice(body)?;
    if !status.success {
        return Err(on_failure.to_error(status));
    }

    Ok(serde_json::from_slice::<T>(body)?)
}

impl<State> Client<State> {
    /**
    INTERNAL: Makes a single request to the API and returns the raw body.

    # Arguments
    - `method`: GET for reads, POST for writes
    - `path`: The path to the API endpoint (e.g., "/user")
    - `query`: Query pairs, credential included
    - `body`: An optional body to send with the request, serialized as JSON

    # Returns
    - The response body, or `ApiError::Request` when no response was received
    */
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&impl Serialize>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}?{}", self.base_url, path, query.encode()?);
        tracing::debug!(method = ?method, path, "waxpeer request");

        let builder = self.http.request(method.into(), url);
        let builder = if let Some(body) = body {
            builder.json(body)
        } else {
            builder
        };

        let resp = builder.send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        tracing::trace!(path, status = status.as_u16(), len = bytes.len(), "waxpeer response");

        Ok(bytes.to_vec())
    }

    /**
    INTERNAL: Makes a request and decodes the response with the given failure mapping.

    # Arguments
    - `method`, `path`, `query`, `body`: As for `send`
    - `on_failure`: How a `success: false` response is reported

    # Returns
    - A `Result` containing the deserialized payload or an `ApiError` on failure.
    */
    pub(crate) async fn call_api<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Query,
        body: Option<&impl Serialize>,
        on_failure: OnFailure,
    ) -> Result<T> {
        let bytes = self.send(method, path, &query, body).await?;
        decode(&bytes, on_failure)
    }
}
