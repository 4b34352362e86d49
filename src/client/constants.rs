use crate::error::BatchLimit;

pub(super) const BASE_URL: &str = "https://api.waxpeer.com/v1";
pub(super) const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Account and buy orders
pub(super) const USER: &str = "/user";
pub(super) const HISTORY: &str = "/history";
pub(super) const BUY_ORDERS: &str = "/buy-orders";
pub(super) const REMOVE_BUY_ORDER: &str = "/remove-buy-order";
pub(super) const REMOVE_ALL_ORDERS: &str = "/remove-all-orders";
pub(super) const BUY_ORDER_HISTORY: &str = "/buy-order-history";
pub(super) const SET_STEAM_API: &str = "/set-my-steamapi";
pub(super) const EDIT_BUY_ORDER: &str = "/edit-buy-order";
pub(super) const CREATE_BUY_ORDER: &str = "/create-buy-order";
pub(super) const CHANGE_TRADELINK: &str = "/change-tradelink";
pub(super) const TRANSFER_MONEY: &str = "/transfer-money";

// Market
pub(super) const GET_STEAM_ITEMS: &str = "/get-steam-items";
pub(super) const CHECK_TRADELINK: &str = "/check-tradelink";
pub(super) const BUY_ONE_P2P: &str = "/buy-one-p2p";
pub(super) const BUY_ONE_P2P_NAME: &str = "/buy-one-p2p-name";
pub(super) const PRICES: &str = "/prices";
pub(super) const READY_TO_TRANSFER_P2P: &str = "/ready-to-transfer-p2p";
pub(super) const CHECK_AVAILABILITY: &str = "/check-availability";
pub(super) const GET_ITEMS_LIST: &str = "/get-items-list";
pub(super) const FETCH_MY_INVENTORY: &str = "/fetch-my-inventory";
pub(super) const EDIT_ITEMS: &str = "/edit-items";
pub(super) const LIST_ITEMS_STEAM: &str = "/list-items-steam";
pub(super) const GET_MY_INVENTORY: &str = "/get-my-inventory";
pub(super) const SEARCH_ITEMS_BY_NAME: &str = "/search-items-by-name";
pub(super) const REMOVE_ITEMS: &str = "/remove-items";
pub(super) const REMOVE_ALL: &str = "/remove-all";
pub(super) const CHECK_MANY_PROJECT_ID: &str = "/check-many-project-id";

pub(super) const REMOVE_ORDERS_LIMIT: BatchLimit = BatchLimit::Max50;
pub(super) const SELL_LIMIT: BatchLimit = BatchLimit::Max50;
pub(super) const LOOKUP_LIMIT: BatchLimit = BatchLimit::Max100;
pub(super) const REMOVE_ITEMS_LIMIT: BatchLimit = BatchLimit::Max1000;
