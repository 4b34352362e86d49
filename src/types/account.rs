use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as};

#[derive(Clone, Deserialize, Serialize, Debug)]
pub(crate) struct AccountInformationResponse {
    pub user: AccountInformation,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Default)]
pub struct AccountInformation {
    pub wallet: i64, // Balance in minor units
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub user_id: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub id64: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub btc_wallet: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub usdt_wallet: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub eth_wallet: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub avatar: String,
    #[serde(default)]
    pub proxy: Value,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub rank: i64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub shop: String,
    #[serde(rename = "ref", default)]
    pub referral: Value,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub name: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub sell_status: bool,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub sell_fees: f64,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub can_p2p: bool,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub login: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tradelink: String,
}

/// Trade link as normalized by the service after `set_tradelink`
#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Default)]
pub struct TradelinkInfo {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub link: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub token: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub steamid32: String,
}

#[serde_as]
#[derive(Clone, Deserialize, Serialize, Debug, Default)]
pub struct TradelinkCheck {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub msg: String,
    #[serde(default)]
    pub info: Value,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub link: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub token: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub steamid32: String,
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub steamid64: String,
}

#[serde_as]
#[derive(Clone, Copy, Deserialize, Debug, Default)]
pub(crate) struct InventoryReload {
    #[serde(default)]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub total_inventory_count: u64,
}
