mod common;

use pool_agents::subgraph::PoolsData;
use pool_agents::PoolAgentError;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn retries_until_gateway_recovers() {
    let mock = common::spawn_subgraph(2, common::pools_reply(common::sample_pools())).await;
    let client = mock.client(3);

    let response = assert_ok!(client.fetch_pools("recent pools please").await);
    assert_eq!(mock.hits(), 3);

    let data: PoolsData = assert_ok!(response.decode());
    assert_eq!(data.pools.len(), 6);
    assert_eq!(data.pools[0].token0.symbol, "USDC");
}

#[tokio::test]
async fn sends_bearer_key_and_variables() {
    let mock = common::spawn_subgraph(0, common::pools_reply(json!([]))).await;
    let client = mock.client(1);

    assert_ok!(client.fetch_pools("anything").await);

    let seen = mock.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer test-key"));
    let body = &seen[0].body;
    assert!(body["query"].as_str().unwrap().contains("pools("));
    assert_eq!(body["variables"]["first"], 1000);
    assert_eq!(body["variables"]["orderBy"], "volumeUSD");
    assert_eq!(body["variables"]["orderDirection"], "desc");
}

#[tokio::test]
async fn gives_up_after_max_retries() {
    let mock = common::spawn_subgraph(usize::MAX, json!({})).await;
    let client = mock.client(3);

    let err = assert_err!(client.fetch_pools("").await);
    assert_eq!(mock.hits(), 3);
    match err {
        PoolAgentError::NetworkError(e) => {
            assert_eq!(e.status().map(|s| s.as_u16()), Some(500));
        }
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn graphql_errors_are_not_retried() {
    let reply = json!({
        "data": null,
        "errors": [{ "message": "bad field" }, { "message": "auth" }]
    });
    let mock = common::spawn_subgraph(0, reply).await;
    let client = mock.client(3);

    let response = assert_ok!(client.fetch_pools("").await);
    assert_eq!(mock.hits(), 1);
    assert_eq!(response.error_summary().as_deref(), Some("bad field; auth"));
}

#[tokio::test]
async fn pool_lookup_sends_id() {
    let reply = json!({ "data": { "pool": null } });
    let mock = common::spawn_subgraph(0, reply).await;
    let client = mock.client(1);

    assert_ok!(client.pool_by_id("0xabc").await);
    assert_ok!(client.top_pools(7).await);

    let seen = mock.requests();
    assert_eq!(seen[0].body["variables"]["poolId"], "0xabc");
    assert_eq!(seen[1].body["variables"]["limit"], 7);
}
