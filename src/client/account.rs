use crate::client::constants::*;
use crate::client::http::{Method, NoBody, OnFailure, decode};
use crate::client::{Authenticated, Client};
use crate::error::{ApiError, Result};
use crate::types::account::{AccountInformation, AccountInformationResponse, TradelinkInfo};
use crate::types::http::Status;
use crate::types::order::{
    CreatedOrder, EditedOrder, OpenOrder, OpenOrdersResponse, OrderHistory, OrderHistoryResponse,
    PurchaseHistory, PurchaseHistoryResponse, RemovedOrders,
};
use crate::types::request::{
    AccountHistoryConfig, AccountTransferConfig, OrderCreateConfig, OrderEditConfig,
    OrderHistoryConfig, OrderOpenConfig,
};

impl Client<Authenticated> {
    /**
    Fetch the account behind the api key

    # Returns
    Wallet balance, trade link and profile information
    */
    pub async fn account_information(&self) -> Result<AccountInformation> {
        let resp: AccountInformationResponse = self
            .call_api(Method::Get, USER, self.query(), None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.user)
    }

    /**
    Fetch open buy orders

    # Arguments
    - `config`: Name filter (empty for all) and page offset, 100 orders per page

    # Returns
    The accounts open buy orders
    */
    pub async fn open_orders(&self, config: OrderOpenConfig) -> Result<Vec<OpenOrder>> {
        let query = self
            .query()
            .param("name", &config.name)
            .param("skip", config.skip);

        let resp: OpenOrdersResponse = self
            .call_api(Method::Get, BUY_ORDERS, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.offers)
    }

    /**
    Remove buy orders by id

    # Arguments
    - `ids`: At most 50 buy order ids

    # Returns
    Number of removed orders
    */
    pub async fn remove_orders(&self, ids: &[u64]) -> Result<u64> {
        REMOVE_ORDERS_LIMIT.check(ids.len())?;

        let query = self.query().repeated("id", ids);
        let resp: RemovedOrders = self
            .call_api(Method::Get, REMOVE_BUY_ORDER, query, None::<&NoBody>, OnFailure::Message)
            .await?;

        Ok(resp.removed)
    }

    /**
    Remove every open buy order

    The service answers a successful purge with an empty body, which is treated as success.
    */
    pub async fn remove_all_orders(&self) -> Result<()> {
        let bytes = self
            .send(Method::Get, REMOVE_ALL_ORDERS, &self.query(), None::<&NoBody>)
            .await?;
        if bytes.is_empty() {
            return Ok(());
        }

        decode::<Status>(&bytes, OnFailure::WrongApiKey)?;
        Ok(())
    }

    /**
    Fetch buy order history

    # Arguments
    - `config`: Page offset, 50 orders per page
    */
    pub async fn order_history(&self, config: OrderHistoryConfig) -> Result<Vec<OrderHistory>> {
        let query = self.query().param("skip", config.skip);
        let resp: OrderHistoryResponse = self
            .call_api(Method::Get, BUY_ORDER_HISTORY, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.history)
    }

    /**
    Link a Steam Web API key to the account, required for P2P selling

    # Arguments
    - `steam_api_key`: Key from steamcommunity.com/dev/apikey
    */
    pub async fn set_steam_api_key(&self, steam_api_key: &str) -> Result<()> {
        let query = self.query().param("steam_api", steam_api_key);
        let _: Status = self
            .call_api(Method::Get, SET_STEAM_API, query, None::<&NoBody>, OnFailure::Message)
            .await?;

        Ok(())
    }

    /**
    Edit price and amount of a buy order

    # Arguments
    - `config`: Order id with the new (or unchanged) price and amount, sent as JSON

    # Returns
    The order as stored after the edit
    */
    pub async fn edit_order(&self, config: OrderEditConfig) -> Result<EditedOrder> {
        self.call_api(Method::Post, EDIT_BUY_ORDER, self.query(), Some(&config), OnFailure::Message)
            .await
    }

    /**
    Create a buy order

    # Arguments
    - `config`: Item name, max price per item and amount

    # Returns
    The new order id and how many items were bought straight away
    */
    pub async fn create_order(&self, config: OrderCreateConfig) -> Result<CreatedOrder> {
        let query = self
            .query()
            .param("name", &config.name)
            .param("price", config.price)
            .param("amount", config.amount);

        self.call_api(Method::Post, CREATE_BUY_ORDER, query, None::<&NoBody>, OnFailure::Message)
            .await
    }

    /**
    Set the Steam trade link of the account

    # Arguments
    - `tradelink`: ex: `https://steamcommunity.com/tradeoffer/new/?partner=111&token=abc`
    */
    pub async fn set_tradelink(&self, tradelink: &str) -> Result<TradelinkInfo> {
        let query = self.query().param("tradelink", tradelink);
        self.call_api(Method::Post, CHANGE_TRADELINK, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await
    }

    /**
    Send funds to another Waxpeer user

    # Arguments
    - `config`: Receiving Steam id and amount

    # Returns
    - `ApiError::SteamIdNotFound` when the service answers with something other than JSON,
      which it does for unknown receivers
    */
    pub async fn transfer(&self, config: AccountTransferConfig) -> Result<()> {
        let query = self
            .query()
            .param("steam_id", config.steam_id)
            .param("amount", config.amount);

        let bytes = self
            .send(Method::Post, TRANSFER_MONEY, &query, None::<&NoBody>)
            .await?;
        let status: Status =
            serde_json::from_slice(&bytes).map_err(|_| ApiError::SteamIdNotFound)?;
        if !status.success {
            return Err(ApiError::Service(status.msg.unwrap_or_default()));
        }

        Ok(())
    }

    /**
    Fetch recent purchases delivered to a trade link

    # Arguments
    - `config`: Partner and token of the receiving trade link, page offset (50 per page)
    */
    pub async fn purchase_history(&self, config: AccountHistoryConfig) -> Result<Vec<PurchaseHistory>> {
        let query = self
            .query()
            .param("partner", &config.partner)
            .param("token", &config.token)
            .param("skip", config.skip);

        let resp: PurchaseHistoryResponse = self
            .call_api(Method::Get, HISTORY, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.history)
    }
}
