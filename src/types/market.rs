use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as};

#[serde_as]
#[derive(Clone, Deserialize, Debug)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct ItemsResponse<T> {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub items: Vec<T>,
}

/// Steam market reference price for a single item
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct SteamItem {
    pub name: String,
    pub average: i64,
    pub game_id: i64,
    #[serde(rename = "type", default)]
    pub item_type: Value,
    #[serde(default)]
    pub collection: Value,
    #[serde(default)]
    pub ru_name: Value,
}

/// Lowest price and number of listings for an item name
#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Eq, PartialEq)]
pub struct Price {
    pub name: String,
    pub min: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub avg: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub max: i64,
    pub count: i64,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Eq, PartialEq)]
pub struct PriceByName {
    pub name: String,
    pub price: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub image: String,
    pub item_id: String,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Eq, PartialEq)]
pub struct AvailableItem {
    pub item_id: String,
    pub selling: bool,
    pub price: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub image: String,
}

/// An item from the public, filterable listing
#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct MarketItem {
    pub item_id: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub brand: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub image: String,
    pub price: i64,
    pub name: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub float: f64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub best_deals: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub discount: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub steam_price: i64,
    #[serde(rename = "type", default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub item_type: String,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Default)]
pub struct Inventory {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub items: Vec<InventoryItem>,
    /// Total number of sellable items across all pages
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub count: u64,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct InventoryItem {
    pub item_id: i64,
    pub name: String,
    #[serde(rename = "type", default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub item_type: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub steam_price: InventorySteamPrice,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Default)]
pub struct InventorySteamPrice {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub average: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub current: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub img: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub lowest_price: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub highest_offer: i64,
}

/// An item the account currently has on sale
#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct ListedItem {
    pub item_id: i64,
    pub price: i64,
    pub date: DateTime<Utc>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub position: i64,
    pub name: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub steam_price: ListedSteamPrice,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Default)]
pub struct ListedSteamPrice {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub average: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub current: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub img: String,
}

/**
Outcome of listing items for sale

The service lists what it can and reports the rest in `failed`,
a successful response may still contain failed items
*/
#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Default)]
pub struct SellResult {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub listed: Vec<SellListed>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub failed: Vec<SellFailed>,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Eq, PartialEq)]
pub struct SellListed {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    pub price: i64,
    pub item_id: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub position: i64,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Eq, PartialEq)]
pub struct SellFailed {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub price: i64,
    pub item_id: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub msg: String,
}

/// Outcome of editing listed prices, split into updated, failed and removed items
#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Default)]
pub struct EditItemsResult {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub updated: Vec<EditUpdated>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub failed: Vec<EditFailed>,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub removed: Vec<EditRemoved>,
}

#[derive(Clone, Deserialize, Serialize, Debug, Eq, PartialEq)]
pub struct EditUpdated {
    pub item_id: Value,
    pub price: Value,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Eq, PartialEq)]
pub struct EditFailed {
    pub item_id: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub msg: String,
}

#[derive(Clone, Deserialize, Serialize, Debug, Eq, PartialEq)]
pub struct EditRemoved {
    pub item_id: i64,
    #[serde(default)]
    pub price: Value,
}
