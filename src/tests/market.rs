use httpmock::prelude::*;
use serde_json::json;

use crate::client::{Client, ClientConfig};
use crate::error::{ApiError, BatchLimit};
use crate::tests::{API_KEY, client_for};
use crate::types::request::{
    BuyIdConfig, BuyNameConfig, PricesConfig, PricesFilterConfig, SellItemConfig, SellItemsConfig,
};

#[tokio::test]
async fn steam_prices_keep_opaque_fields() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/get-steam-items")
                .query_param("api", API_KEY)
                .query_param("game", "730");
            then.status(200).json_body(json!({
                "success": true,
                "items": [
                    {"name": "Glove Case", "average": 3210, "game_id": 730, "type": "Container", "collection": null, "ru_name": null},
                    {"name": "AK-47 | Redline (Field-Tested)", "average": 15000, "game_id": 730, "type": {"weapon": "Rifle"}, "collection": "The Phoenix Collection"}
                ]
            }));
        })
        .await;

    let items = client_for(&server).steam_prices(730).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].item_type, json!("Container"));
    assert!(items[0].collection.is_null());
    assert_eq!(items[1].item_type, json!({"weapon": "Rifle"}));
    assert!(items[1].ru_name.is_null());
}

#[tokio::test]
async fn prices() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/prices")
                .query_param("game", "csgo")
                .query_param("search", "hardened")
                .query_param("min_price", "1000");
            then.status(200).json_body(json!({
                "success": true,
                "items": [{"name": "Five-SeveN | Case Hardened (Field-Tested)", "min": 1200, "avg": 1500, "max": 2000, "count": 14}]
            }));
        })
        .await;

    let prices = client_for(&server)
        .prices(PricesConfig {
            game: "csgo".to_string(),
            min_price: 1000,
            max_price: 0,
            search: "hardened".to_string(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(prices[0].min, 1200);
    assert_eq!(prices[0].count, 14);
}

#[tokio::test]
async fn prices_by_name_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/search-items-by-name");
            then.status(200).json_body(json!({"success": true, "items": []}));
        })
        .await;
    let client = client_for(&server);

    let names: Vec<String> = (0..101).map(|i| format!("item {}", i)).collect();
    let err = client.prices_by_name(&names).await.unwrap_err();
    assert!(matches!(err, ApiError::LimitExceeded(BatchLimit::Max100)));
    assert_eq!(mock.hits_async().await, 0);

    let items = client.prices_by_name(&names[..100]).await.unwrap();
    assert!(items.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn check_tradelink_posts_json() {
    let server = MockServer::start_async().await;
    let link = "https://steamcommunity.com/tradeoffer/new/?partner=111&token=abc";
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/check-tradelink")
                .query_param("api", API_KEY)
                .header("content-type", "application/json")
                .json_body(json!({"tradelink": link}));
            then.status(200).json_body(json!({
                "success": true,
                "msg": "",
                "info": {"state": 3},
                "link": link,
                "token": "abc",
                "steamid32": "111",
                "steamid64": "76561197960265839"
            }));
        })
        .await;

    let check = client_for(&server).check_tradelink(link).await.unwrap();

    mock.assert_async().await;
    assert_eq!(check.steamid64, "76561197960265839");
    assert_eq!(check.info, json!({"state": 3}));
}

#[tokio::test]
async fn check_tradelink_service_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/check-tradelink");
            then.status(200)
                .json_body(json!({"success": false, "msg": "Invalid tradelink"}));
        })
        .await;

    let err = client_for(&server).check_tradelink("nope").await.unwrap_err();
    assert!(matches!(&err, ApiError::Service(msg) if msg == "Invalid tradelink"));
}

#[tokio::test]
async fn items_available_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/check-availability");
            then.status(200).json_body(json!({
                "success": true,
                "items": [{"item_id": "1", "selling": true, "price": 500, "name": "Chroma Case", "image": ""}]
            }));
        })
        .await;
    let client = client_for(&server);

    let ids: Vec<u64> = (0..101).collect();
    let err = client.items_available(&ids).await.unwrap_err();
    assert!(matches!(err, ApiError::LimitExceeded(BatchLimit::Max100)));
    assert_eq!(mock.hits_async().await, 0);

    let items = client.items_available(&ids[..100]).await.unwrap();
    assert!(items[0].selling);
    mock.assert_async().await;
}

#[tokio::test]
async fn items_list() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/get-items-list")
                .query_param("api", API_KEY)
                .query_param("search", "asiimov")
                .query_param("brand", "")
                .query_param("game", "csgo")
                .query_param("discount", "10")
                .query_param("auto", "1");
            then.status(200).json_body(json!({
                "success": true,
                "items": [{
                    "item_id": "2900", "brand": "rifle", "image": "", "price": 99000,
                    "name": "AWP | Asiimov (Field-Tested)", "float": 0.2513, "best_deals": 3,
                    "discount": 12, "steam_price": 112000, "type": "Sniper Rifle"
                }]
            }));
        })
        .await;

    let items = client_for(&server)
        .items_list(PricesFilterConfig {
            search: "asiimov".to_string(),
            game: "csgo".to_string(),
            discount: 10,
            auto: true,
            ..Default::default()
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(items[0].discount, 12);
    assert_eq!(items[0].item_type, "Sniper Rifle");
}

#[tokio::test]
async fn reload_inventory() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fetch-my-inventory");
            then.status(200)
                .json_body(json!({"success": true, "total_inventory_count": 84}));
        })
        .await;

    let count = client_for(&server).reload_inventory().await.unwrap();
    assert_eq!(count, 84);
}

#[tokio::test]
async fn reload_inventory_service_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/fetch-my-inventory");
            then.status(200)
                .json_body(json!({"success": false, "msg": "Steam inventory is private"}));
        })
        .await;

    let err = client_for(&server).reload_inventory().await.unwrap_err();
    assert_eq!(err.to_string(), "Steam inventory is private");
}

#[tokio::test]
async fn inventory() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/get-my-inventory")
                .query_param("skip", "30")
                .query_param("game", "730");
            then.status(200).json_body(json!({
                "success": true,
                "count": 31,
                "items": [{
                    "item_id": 2901, "name": "Spectrum Case", "type": "Container",
                    "steam_price": {"average": 900, "current": 950, "img": "", "lowest_price": 880, "highest_offer": 860}
                }]
            }));
        })
        .await;

    let inventory = client_for(&server)
        .inventory(SellItemsConfig { skip: 30, game: 730 })
        .await
        .unwrap();

    assert_eq!(inventory.count, 31);
    assert_eq!(inventory.items[0].steam_price.lowest_price, 880);
}

#[tokio::test]
async fn sell_reports_partial_success() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/list-items-steam")
                .query_param("api", API_KEY)
                .json_body(json!({"items": [
                    {"item_id": 1, "price": 1000},
                    {"item_id": 2, "price": 2000}
                ]}));
            then.status(200).json_body(json!({
                "success": true,
                "msg": "",
                "listed": [{"name": "Clutch Case", "price": 1000, "item_id": 1, "position": 3}],
                "failed": [{"name": "Danger Zone Case", "price": 2000, "item_id": 2, "msg": "Item not tradable"}]
            }));
        })
        .await;

    let result = client_for(&server)
        .sell(&[SellItemConfig::new(1, 1000), SellItemConfig::new(2, 2000)])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.listed.len(), 1);
    assert_eq!(result.listed[0].position, 3);
    assert_eq!(result.failed[0].msg, "Item not tradable");
}

#[tokio::test]
async fn sell_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/list-items-steam");
            then.status(200)
                .json_body(json!({"success": true, "listed": [], "failed": []}));
        })
        .await;
    let edit = server
        .mock_async(|when, then| {
            when.method(POST).path("/edit-items");
            then.status(200)
                .json_body(json!({"success": true, "updated": [], "failed": [], "removed": []}));
        })
        .await;
    let client = client_for(&server);

    let items: Vec<SellItemConfig> = (0..51).map(|i| SellItemConfig::new(i, 1000)).collect();
    let err = client.sell(&items).await.unwrap_err();
    assert!(matches!(err, ApiError::LimitExceeded(BatchLimit::Max50)));
    let err = client.edit_items(&items).await.unwrap_err();
    assert!(matches!(err, ApiError::LimitExceeded(BatchLimit::Max50)));
    assert_eq!(mock.hits_async().await, 0);
    assert_eq!(edit.hits_async().await, 0);

    client.sell(&items[..50]).await.unwrap();
    mock.assert_async().await;
    client.edit_items(&items[..50]).await.unwrap();
    edit.assert_async().await;
}

#[tokio::test]
async fn edit_items_three_buckets() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/edit-items")
                .json_body(json!({"items": [{"item_id": 5, "price": 800}]}));
            then.status(200).json_body(json!({
                "success": true,
                "updated": [{"item_id": "5", "price": "800"}],
                "failed": [{"item_id": 6, "msg": "Item not found"}],
                "removed": [{"item_id": 7, "price": "100"}]
            }));
        })
        .await;

    let result = client_for(&server)
        .edit_items(&[SellItemConfig::new(5, 800)])
        .await
        .unwrap();

    assert_eq!(result.updated[0].price, json!("800"));
    assert_eq!(result.failed[0].item_id, 6);
    assert_eq!(result.removed[0].item_id, 7);
}

#[tokio::test]
async fn listed_items() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/list-items-steam").query_param("api", API_KEY);
            then.status(200).json_body(json!({
                "success": true,
                "items": [{
                    "item_id": 12, "price": 4400, "date": "2024-05-05T12:00:00.000Z", "position": 1,
                    "name": "Sticker | Crown (Foil)", "steam_price": {"average": 4300, "current": 4500, "img": ""}
                }]
            }));
        })
        .await;

    let items = client_for(&server).listed_items().await.unwrap();
    assert_eq!(items[0].item_id, 12);
    assert_eq!(items[0].steam_price.current, 4500);
}

#[tokio::test]
async fn remove_items_limit() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/remove-items");
            then.status(200)
                .json_body(json!({"success": true, "count": 1000, "removed": []}));
        })
        .await;
    let client = client_for(&server);

    let ids: Vec<u64> = (0..1001).collect();
    let err = client.remove_items(&ids).await.unwrap_err();
    assert!(matches!(err, ApiError::LimitExceeded(BatchLimit::Max1000)));
    assert_eq!(err.to_string(), "maximum number of elements 1000");
    assert_eq!(mock.hits_async().await, 0);

    let removed = client.remove_items(&ids[..1000]).await.unwrap();
    assert_eq!(removed, 1000);
    mock.assert_async().await;
}

#[tokio::test]
async fn remove_all_items() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/remove-all");
            then.status(200)
                .json_body(json!({"success": true, "msg": "", "count": 17}));
        })
        .await;

    assert_eq!(client_for(&server).remove_all_items().await.unwrap(), 17);
}

#[tokio::test]
async fn trades_by_project_id() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/check-many-project-id");
            then.status(200).json_body(json!({
                "success": true,
                "trades": [{
                    "id": 555, "price": 1500, "name": "Revolution Case", "status": 5,
                    "project_id": "p-abc", "custom_id": "", "trade_id": "6011223344",
                    "done": true, "for_steamid64": "76561198000000000", "reason": null,
                    "send_until": 1714910400, "last_updated": 1714910000, "counter": 0, "msg": ""
                }]
            }));
        })
        .await;
    let client = client_for(&server);

    let trades = client
        .trades_by_project_id(&["p-abc".to_string()])
        .await
        .unwrap();
    assert_eq!(trades[0].project_id, "p-abc");
    assert_eq!(trades[0].trade_id, json!("6011223344"));
    assert!(trades[0].done);

    let ids: Vec<String> = (0..101).map(|i| format!("p-{}", i)).collect();
    let err = client.trades_by_project_id(&ids).await.unwrap_err();
    assert!(matches!(err, ApiError::LimitExceeded(BatchLimit::Max100)));
    assert_eq!(mock.hits_async().await, 1);

    let trades = client.trades_by_project_id(&ids[..100]).await.unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(mock.hits_async().await, 2);
}

#[tokio::test]
async fn null_items_decode_as_empty() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/prices");
            then.status(200).json_body(json!({"success": true, "items": null}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/get-items-list");
            then.status(200).json_body(json!({
                "success": true,
                "items": [{
                    "item_id": "900", "brand": null, "image": null, "price": 1200,
                    "name": "Sticker | Crown (Foil)", "float": null, "type": null
                }]
            }));
        })
        .await;
    let client = client_for(&server);

    let prices = client.prices(PricesConfig::default()).await.unwrap();
    assert!(prices.is_empty());

    let items = client.items_list(PricesFilterConfig::default()).await.unwrap();
    assert_eq!(items[0].brand, "");
    assert_eq!(items[0].float, 0.0);
    assert_eq!(items[0].item_type, "");
}

#[tokio::test]
async fn buy_by_name() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/buy-one-p2p-name")
                .query_param("api", API_KEY)
                .query_param("project_id", "p-1")
                .query_param("name", "Prisma 2 Case")
                .query_param("token", "abc")
                .query_param("price", "450")
                .query_param("partner", "111");
            then.status(200)
                .json_body(json!({"success": true, "msg": "buy_success", "id": 9001, "price": 440}));
        })
        .await;

    let purchase = client_for(&server)
        .buy_by_name(BuyNameConfig {
            project_id: "p-1".to_string(),
            name: "Prisma 2 Case".to_string(),
            token: "abc".to_string(),
            price: 450,
            partner: "111".to_string(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(purchase.id, 9001);
    assert_eq!(purchase.price, 440);
}

#[tokio::test]
async fn buy_by_id_service_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/buy-one-p2p")
                .query_param("item_id", "31337");
            then.status(200).json_body(json!({
                "success": false, "msg": "Item is sold", "error_msg": "sold"
            }));
        })
        .await;

    let err = client_for(&server)
        .buy_by_id(BuyIdConfig {
            project_id: "p-2".to_string(),
            item_id: 31337,
            token: "abc".to_string(),
            price: 100,
            partner: "111".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(&err, ApiError::Service(msg) if msg == "Item is sold"));
}

#[tokio::test]
async fn ready_to_transfer_without_api_key() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ready-to-transfer-p2p")
                .query_param("steam_api", "STEAMKEY");
            then.status(200).json_body(json!({
                "success": true,
                "trades": [{
                    "id": 4021, "costum_id": "c-1", "trade_id": null, "status": 0,
                    "trade_message": "Waxpeer 4021", "tradelink": "https://steamcommunity.com/tradeoffer/new/?partner=2&token=b",
                    "done": false, "for_steamid32": "2", "for_steamid64": "76561197960265730",
                    "created": "2024-05-05T12:00:00.000Z", "send_until": "2024-05-05T12:10:00.000Z",
                    "items": [{"id": 1, "item_id": "2900", "give_amount": 950, "image": "", "price": 1000, "game": "csgo", "name": "Clutch Case", "status": 0}]
                }]
            }));
        })
        .await;

    let config = ClientConfig::default().with_base_url(server.base_url());
    let client = Client::with_config(config).unwrap();
    let trades = client.ready_to_transfer_p2p("STEAMKEY").await.unwrap();

    mock.assert_async().await;
    assert_eq!(trades[0].custom_id, "c-1");
    assert_eq!(trades[0].items[0].give_amount, 950);
    assert!(trades[0].trade_id.is_null());
}

#[tokio::test]
async fn ready_to_transfer_service_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/ready-to-transfer-p2p");
            then.status(200)
                .json_body(json!({"success": false, "msg": "Steam api key is invalid"}));
        })
        .await;

    let err = client_for(&server)
        .ready_to_transfer_p2p("bad")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Steam api key is invalid");
}
