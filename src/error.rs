use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Element caps enforced on batch parameters before a request is sent.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BatchLimit {
    Max50,
    Max100,
    Max1000,
}

impl BatchLimit {
    pub const fn max(self) -> usize {
        match self {
            BatchLimit::Max50 => 50,
            BatchLimit::Max100 => 100,
            BatchLimit::Max1000 => 1000,
        }
    }

    pub(crate) fn check(self, len: usize) -> Result<()> {
        if len > self.max() {
            return Err(ApiError::LimitExceeded(self));
        }
        Ok(())
    }
}

impl fmt::Display for BatchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.max())
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or protocol failure from the HTTP client
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The response body was not the JSON shape the operation expects
    #[error("error parsing response: {0}")]
    Parsing(#[from] serde_json::Error),
    /// Query string or body could not be built from the parameters
    #[error("error encoding request: {0}")]
    Encoding(String),
    #[error("your api key is not working")]
    WrongApiKey,
    #[error("maximum number of elements {0}")]
    LimitExceeded(BatchLimit),
    #[error("this SteamID was not found")]
    SteamIdNotFound,
    /// `success: false` with the upstream message, verbatim
    #[error("{0}")]
    Service(String),
}

impl ApiError {
    /// True when the request never produced a usable HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Request(_))
    }

    /// True when the service answered but reported the operation as failed.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            ApiError::WrongApiKey | ApiError::SteamIdNotFound | ApiError::Service(_)
        )
    }
}

impl From<serde_urlencoded::ser::Error> for ApiError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        ApiError::Encoding(err.to_string())
    }
}
