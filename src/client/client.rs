use crate::client::config::ClientConfig;
use crate::client::constants::READY_TO_TRANSFER_P2P;
use crate::client::http::{Method, NoBody, OnFailure};
use crate::client::query::Query;
use crate::client::utils::build_http;
use crate::error::Result;
use crate::types::trade::{PendingTrade, PendingTradesResponse};
use std::marker::PhantomData;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Unauthenticated;
#[derive(Clone, Debug)]
pub struct Authenticated;

/**
Handle to the Waxpeer API

Cloning is cheap, clones share the connection pool. Every operation takes `&self`
and performs exactly one HTTP request, so a client can be used from many tasks at once.
*/
#[derive(Clone)]
pub struct Client<State = Unauthenticated> {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Arc<str>,

    api_key: Option<Arc<str>>,

    _state: PhantomData<State>,
}

// Generic implementations (can be used with or without an api key)
impl<State> Client<State> {
    /**
    Fetch trades that need to be sent by the seller

    Should be polled at least once a minute to stay online as a P2P seller,
    each trade should only be sent once.

    # Arguments
    - `steam_api_key`: Steam Web API key of the selling account (not the Waxpeer key)

    # Returns
    Trades waiting for a trade offer
    */
    pub async fn ready_to_transfer_p2p(&self, steam_api_key: &str) -> Result<Vec<PendingTrade>> {
        let query = Query::default().param("steam_api", steam_api_key);
        let resp: PendingTradesResponse = self
            .call_api(
                Method::Get,
                READY_TO_TRANSFER_P2P,
                query,
                None::<&NoBody>,
                OnFailure::Message,
            )
            .await?;

        Ok(resp.trades)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Client<Unauthenticated> {
    /**
    Constructs a new client with the default configuration

    # Returns
    - An unauthenticated client, or `ApiError::Request` if the TLS backend fails to initialize
    */
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Client {
            http: build_http(&config)?,
            base_url: config.base_url.trim_end_matches('/').into(),
            api_key: None,
            _state: PhantomData,
        })
    }

    /**
    Attach the Waxpeer API key

    No request is made, a bad key only surfaces as `ApiError::WrongApiKey`
    (or a service message) on the first call that uses it.

    # Arguments
    - `api_key`: Key from the Waxpeer profile page

    # Returns
    An authenticated client
    */
    pub fn login(self, api_key: &str) -> Client<Authenticated> {
        Client {
            http: self.http,
            base_url: self.base_url,
            api_key: Some(api_key.into()),
            _state: PhantomData,
        }
    }
}

impl Client<Authenticated> {
    /// Shorthand for `Client::new()?.login(api_key)`
    pub fn from_api_key(api_key: &str) -> Result<Self> {
        Ok(Client::new()?.login(api_key))
    }

    /// Shorthand for `Client::with_config(config)?.login(api_key)`
    pub fn from_api_key_with_config(api_key: &str, config: ClientConfig) -> Result<Self> {
        Ok(Client::with_config(config)?.login(api_key))
    }

    /**
    Return the api key

    # Returns
    The key this client was logged in with
    */
    pub fn api_key(&self) -> &str {
        // Only constructed through `login`, which always sets the key
        self.api_key.as_deref().unwrap_or_default()
    }

    pub(crate) fn query(&self) -> Query {
        Query::with_api_key(self.api_key())
    }
}
