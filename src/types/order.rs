use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as};

#[serde_as]
#[derive(Clone, Deserialize, Debug)]
pub(crate) struct OpenOrdersResponse {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub offers: Vec<OpenOrder>,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Eq, PartialEq)]
pub struct OpenOrder {
    pub id: i64,
    pub name: String,
    pub price: Value, // Sent as a string by the service, kept as-is
    pub amount: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub filled: i64,
}

#[serde_as]
#[derive(Clone, Deserialize, Debug)]
pub(crate) struct OrderHistoryResponse {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub history: Vec<OrderHistory>,
}

#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct OrderHistory {
    pub id: i64,
    pub item_name: String,
    pub price: Value,
    pub created: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
}

#[serde_as]
#[derive(Clone, Copy, Deserialize, Debug, Default)]
pub(crate) struct RemovedOrders {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub removed: u64,
}

#[serde_as]
#[derive(Clone, Copy, Deserialize, Serialize, Debug, Default, Eq, PartialEq)]
pub struct EditedOrder {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub price: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub amount: i64,
}

#[serde_as]
#[derive(Clone, Copy, Deserialize, Serialize, Debug, Default, Eq, PartialEq)]
pub struct CreatedOrder {
    pub id: i64,
    /// Items bought immediately on creation
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub filled: i64,
}

#[serde_as]
#[derive(Clone, Deserialize, Debug)]
pub(crate) struct PurchaseHistoryResponse {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub history: Vec<PurchaseHistory>,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug)]
pub struct PurchaseHistory {
    pub id: i64,
    #[serde(default)]
    pub trade_id: Value,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub token: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub partner: i64,
    pub created: DateTime<Utc>,
    pub send_until: DateTime<Utc>,
    #[serde(default)]
    pub reason: Value,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub item_id: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub image: String,
    pub price: i64,
    pub name: String,
    pub status: i64,
}
