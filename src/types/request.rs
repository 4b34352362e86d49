use serde::Serialize;

#[derive(Clone, Debug, Default)]
pub struct OrderOpenConfig {
    pub name: String, // Item name to filter by, empty for all
    pub skip: u64,    // 100 orders per page
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OrderHistoryConfig {
    pub skip: u64, // 50 trades per page
}

#[derive(Clone, Copy, Debug, Default, Serialize, Eq, PartialEq)]
pub struct OrderEditConfig {
    pub id: u64,     // Buy order id
    pub price: u64,  // New (or current) price
    pub amount: u64, // New (or current) amount
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OrderCreateConfig {
    pub name: String,
    pub price: u64, // Max price to buy a single item for
    pub amount: u64,
}

impl OrderCreateConfig {
    pub fn new(name: &str, price: u64, amount: u64) -> Self {
        OrderCreateConfig {
            name: name.to_string(),
            price,
            amount,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AccountTransferConfig {
    pub steam_id: u64, // Receiving user
    pub amount: u64,
}

#[derive(Clone, Debug, Default)]
pub struct AccountHistoryConfig {
    pub partner: String, // Partner from the trade link used to purchase, or steamid32
    pub token: String,   // Token from the trade link used to purchase
    pub skip: u64,       // 50 trades per page
}

#[derive(Clone, Debug, Default)]
pub struct PricesConfig {
    pub game: String, // csgo, dota2, ...
    pub min_price: u64,
    pub max_price: u64,
    pub search: String, // Name fragment, ex: "hardened"
}

/**
Filters for the public item listing

Empty strings are still sent, zero numbers and `false` flags are left out of the query
*/
#[derive(Clone, Debug, Default)]
pub struct PricesFilterConfig {
    pub skip: u64,
    /// Only items that can be withdrawn instantly
    pub auto: bool,
    pub search: String,
    /// Item category, ex: key, rifle, knife
    pub brand: String,
    /// `desc` or `asc`
    pub order: String,
    /// ex: price, profit, best_deals
    pub order_by: String,
    /// ex: FN, MW, FT, WW, BS
    pub exterior: String,
    /// Only fetch items from this seller (UUID from their profile page)
    pub by: String,
    pub limit: u64,
    pub sort: String,
    pub max_price: u64,
    pub min_price: u64,
    /// Minimum discount in percent
    pub discount: u64,
    /// Include extra info such as float
    pub minified: bool,
    pub game: String,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SellItemsConfig {
    pub skip: u64, // 30 items per page
    pub game: u64, // Steam app id, ex: 730
}

#[derive(Clone, Copy, Debug, Default, Serialize, Eq, PartialEq)]
pub struct SellItemConfig {
    pub item_id: u64,
    pub price: u64,
}

impl SellItemConfig {
    pub fn new(item_id: u64, price: u64) -> Self {
        SellItemConfig { item_id, price }
    }
}

#[derive(Clone, Debug, Default)]
pub struct BuyNameConfig {
    pub project_id: String, // Caller chosen id to track the trade, max 50 symbols
    pub name: String,       // Without the exterior suffix the cheapest variant is bought
    pub token: String,      // Token from the receiving trade link
    pub price: u64,
    pub partner: String, // Partner from the receiving trade link
}

#[derive(Clone, Debug, Default)]
pub struct BuyIdConfig {
    pub project_id: String,
    pub item_id: u64,
    pub token: String,
    pub price: u64,
    pub partner: String,
}

#[derive(Serialize)]
pub(crate) struct SellItemsBody<'a> {
    pub items: &'a [SellItemConfig],
}

#[derive(Serialize)]
pub(crate) struct TradelinkBody<'a> {
    pub tradelink: &'a str,
}
