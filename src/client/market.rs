use crate::client::constants::*;
use crate::client::http::{Method, NoBody, OnFailure};
use crate::client::{Authenticated, Client};
use crate::error::Result;
use crate::types::account::{InventoryReload, TradelinkCheck};
use crate::types::http::Count;
use crate::types::market::{
    AvailableItem, EditItemsResult, Inventory, ItemsResponse, ListedItem, MarketItem, Price,
    PriceByName, SellResult, SteamItem,
};
use crate::types::request::{
    BuyIdConfig, BuyNameConfig, PricesConfig, PricesFilterConfig, SellItemConfig, SellItemsBody,
    SellItemsConfig, TradelinkBody,
};
use crate::types::trade::{ProjectTrade, ProjectTradesResponse, Purchase};

impl Client<Authenticated> {
    /**
    Fetch Steam market reference prices

    # Arguments
    - `app_id`: Steam app id, ex: 730 (CS2) or 570 (Dota 2)
    */
    pub async fn steam_prices(&self, app_id: u64) -> Result<Vec<SteamItem>> {
        let query = self.query().param("game", app_id);
        let resp: ItemsResponse<SteamItem> = self
            .call_api(Method::Get, GET_STEAM_ITEMS, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.items)
    }

    /**
    Fetch the lowest price and listing count per item name

    # Arguments
    - `config`: Game, search string and optional price bounds (zero means unbounded)
    */
    pub async fn prices(&self, config: PricesConfig) -> Result<Vec<Price>> {
        let query = self
            .query()
            .param("game", &config.game)
            .param("search", &config.search)
            .non_zero("max_price", config.max_price)
            .non_zero("min_price", config.min_price);

        let resp: ItemsResponse<Price> = self
            .call_api(Method::Get, PRICES, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.items)
    }

    /**
    Fetch the cheapest listing for each of the given names

    # Arguments
    - `names`: At most 100 full market names
    */
    pub async fn prices_by_name(&self, names: &[String]) -> Result<Vec<PriceByName>> {
        LOOKUP_LIMIT.check(names.len())?;

        let query = self.query().repeated("names", names);
        let resp: ItemsResponse<PriceByName> = self
            .call_api(Method::Get, SEARCH_ITEMS_BY_NAME, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.items)
    }

    /**
    Validate a Steam trade link before buying to it

    # Returns
    The parsed link with partner token and Steam ids
    */
    pub async fn check_tradelink(&self, tradelink: &str) -> Result<TradelinkCheck> {
        let body = TradelinkBody { tradelink };
        self.call_api(Method::Post, CHECK_TRADELINK, self.query(), Some(&body), OnFailure::Message)
            .await
    }

    /**
    Check whether items are still for sale

    # Arguments
    - `item_ids`: At most 100 item ids
    */
    pub async fn items_available(&self, item_ids: &[u64]) -> Result<Vec<AvailableItem>> {
        LOOKUP_LIMIT.check(item_ids.len())?;

        let query = self.query().repeated("item_id", item_ids);
        let resp: ItemsResponse<AvailableItem> = self
            .call_api(Method::Get, CHECK_AVAILABILITY, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.items)
    }

    /**
    Search the public listing

    # Arguments
    - `config`: Filters, see [`PricesFilterConfig`] for which ones are sent when empty
    */
    pub async fn items_list(&self, config: PricesFilterConfig) -> Result<Vec<MarketItem>> {
        let query = self
            .query()
            .param("search", &config.search)
            .param("brand", &config.brand)
            .param("order", &config.order)
            .param("order_by", &config.order_by)
            .param("exterior", &config.exterior)
            .param("by", &config.by)
            .param("sort", &config.sort)
            .param("game", &config.game)
            .non_zero("skip", config.skip)
            .non_zero("max_price", config.max_price)
            .non_zero("min_price", config.min_price)
            .non_zero("limit", config.limit)
            .non_zero("discount", config.discount)
            .flag("auto", config.auto)
            .flag("minified", config.minified);

        let resp: ItemsResponse<MarketItem> = self
            .call_api(Method::Get, GET_ITEMS_LIST, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.items)
    }

    /**
    Ask the service to re-read the Steam inventory of the account

    # Returns
    Total number of items in the inventory
    */
    pub async fn reload_inventory(&self) -> Result<u64> {
        let resp: InventoryReload = self
            .call_api(Method::Get, FETCH_MY_INVENTORY, self.query(), None::<&NoBody>, OnFailure::Message)
            .await?;

        Ok(resp.total_inventory_count)
    }

    /**
    Fetch inventory items that can be listed for sale

    # Arguments
    - `config`: Page offset (30 items per page) and Steam app id
    */
    pub async fn inventory(&self, config: SellItemsConfig) -> Result<Inventory> {
        let query = self
            .query()
            .param("skip", config.skip)
            .param("game", config.game);

        self.call_api(Method::Get, GET_MY_INVENTORY, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await
    }

    /**
    List items for sale

    # Arguments
    - `items`: At most 50 item ids with their price

    # Returns
    Listed and failed items, a partial listing is still a successful call
    */
    pub async fn sell(&self, items: &[SellItemConfig]) -> Result<SellResult> {
        SELL_LIMIT.check(items.len())?;

        let body = SellItemsBody { items };
        self.call_api(Method::Post, LIST_ITEMS_STEAM, self.query(), Some(&body), OnFailure::WrongApiKey)
            .await
    }

    /**
    Change the price of listed items

    # Arguments
    - `items`: At most 50 item ids with their new price

    # Returns
    Updated, failed and removed items
    */
    pub async fn edit_items(&self, items: &[SellItemConfig]) -> Result<EditItemsResult> {
        SELL_LIMIT.check(items.len())?;

        let body = SellItemsBody { items };
        self.call_api(Method::Post, EDIT_ITEMS, self.query(), Some(&body), OnFailure::WrongApiKey)
            .await
    }

    /// Fetch the items the account currently has on sale
    pub async fn listed_items(&self) -> Result<Vec<ListedItem>> {
        let resp: ItemsResponse<ListedItem> = self
            .call_api(Method::Get, LIST_ITEMS_STEAM, self.query(), None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.items)
    }

    /**
    Take items off sale

    # Arguments
    - `item_ids`: At most 1000 item ids

    # Returns
    Number of removed items
    */
    pub async fn remove_items(&self, item_ids: &[u64]) -> Result<u64> {
        REMOVE_ITEMS_LIMIT.check(item_ids.len())?;

        let query = self.query().repeated("id", item_ids);
        let resp: Count = self
            .call_api(Method::Get, REMOVE_ITEMS, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.count)
    }

    /// Take every item off sale, returns the number of removed items
    pub async fn remove_all_items(&self) -> Result<u64> {
        let resp: Count = self
            .call_api(Method::Get, REMOVE_ALL, self.query(), None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.count)
    }

    /**
    Look up purchases by the project ids they were bought with

    # Arguments
    - `project_ids`: At most 100 ids passed to `buy_by_name`/`buy_by_id`
    */
    pub async fn trades_by_project_id(&self, project_ids: &[String]) -> Result<Vec<ProjectTrade>> {
        LOOKUP_LIMIT.check(project_ids.len())?;

        let query = self.query().repeated("id", project_ids);
        let resp: ProjectTradesResponse = self
            .call_api(Method::Get, CHECK_MANY_PROJECT_ID, query, None::<&NoBody>, OnFailure::WrongApiKey)
            .await?;

        Ok(resp.trades)
    }

    /**
    Buy the cheapest item matching a name and send it to a trade link

    # Arguments
    - `config`: Tracking id, item name, max price and the receiving trade link parts
    */
    pub async fn buy_by_name(&self, config: BuyNameConfig) -> Result<Purchase> {
        let query = self
            .query()
            .param("project_id", &config.project_id)
            .param("name", &config.name)
            .param("token", &config.token)
            .param("price", config.price)
            .param("partner", &config.partner);

        self.call_api(Method::Get, BUY_ONE_P2P_NAME, query, None::<&NoBody>, OnFailure::Message)
            .await
    }

    /**
    Buy a specific listing and send it to a trade link

    # Arguments
    - `config`: Tracking id, item id, price and the receiving trade link parts
    */
    pub async fn buy_by_id(&self, config: BuyIdConfig) -> Result<Purchase> {
        let query = self
            .query()
            .param("project_id", &config.project_id)
            .param("item_id", config.item_id)
            .param("token", &config.token)
            .param("price", config.price)
            .param("partner", &config.partner);

        self.call_api(Method::Get, BUY_ONE_P2P, query, None::<&NoBody>, OnFailure::Message)
            .await
    }
}
