use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as};

#[serde_as]
#[derive(Clone, Deserialize, Debug)]
pub(crate) struct PendingTradesResponse {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub trades: Vec<PendingTrade>,
}

/// A sold item waiting for the seller to send the Steam trade offer
#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct PendingTrade {
    pub id: Value,
    #[serde(rename = "costum_id", default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub custom_id: String,
    #[serde(default)]
    pub trade_id: Value,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub trade_message: String,
    pub tradelink: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub done: bool,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub for_steamid32: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub for_steamid64: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub created: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub send_until: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub items: Vec<PendingTradeItem>,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct PendingTradeItem {
    pub id: i64,
    pub item_id: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub give_amount: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub image: String,
    pub price: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub game: String,
    pub name: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub status: i64,
}

#[serde_as]
#[derive(Clone, Deserialize, Debug)]
pub(crate) struct ProjectTradesResponse {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub trades: Vec<ProjectTrade>,
}

/// A purchase made through `buy_by_name`/`buy_by_id`, looked up by its project id
#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct ProjectTrade {
    pub id: u64,
    pub price: u64,
    pub name: String,
    pub status: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub project_id: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub custom_id: String,
    #[serde(default)]
    pub trade_id: Value,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub done: bool,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub for_steamid64: String,
    #[serde(default)]
    pub reason: Value,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub send_until: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last_updated: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub counter: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub msg: String,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Default, Eq, PartialEq)]
pub struct Purchase {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub price: i64,
}
