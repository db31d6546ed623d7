mod common;

use pool_agents::tools::recent_pools::NO_INDEX_MESSAGE;
use pool_agents::tools::{
    AnswerQuestionInput, PoolStatsInput, PoolStatsTools, RecentPoolTools, ToolSet, TopPoolsInput,
};
use serde_json::json;

#[tokio::test]
async fn top_pools_invalid_limit() {
    let tools = PoolStatsTools::new(common::offline_client());
    let result = tools.query_top_pools(TopPoolsInput { limit: 0 }).await;
    assert_eq!(result, "Error querying top pools: API error: limit must be 1..=1000");
}

#[tokio::test]
async fn pool_stats_empty_id() {
    let tools = PoolStatsTools::new(common::offline_client());
    let result = tools
        .query_pool_stats(PoolStatsInput {
            pool_id: "  ".to_string(),
        })
        .await;
    assert!(result.starts_with("Error querying pool stats:"));
    assert!(result.contains("pool_id is required"));
}

#[tokio::test]
async fn invalid_arguments_return_text() {
    let tools = PoolStatsTools::new(common::offline_client());
    let result = tools.call("query_pool_stats", json!("nope")).await;
    assert!(result.starts_with("Invalid arguments for query_pool_stats"));

    let result = tools.call("get_btc_price", json!({})).await;
    assert_eq!(result, "Unknown tool: get_btc_price");
}

#[tokio::test]
async fn answer_question_before_fetch() {
    let tools = RecentPoolTools::new(common::offline_client());
    let result = tools
        .answer_question(AnswerQuestionInput {
            question: "Which pool has the most volume?".to_string(),
        })
        .await;
    assert_eq!(result, NO_INDEX_MESSAGE);
}

#[tokio::test]
async fn unreachable_subgraph_becomes_error_text() {
    let tools = RecentPoolTools::new(common::offline_client());
    let result = tools.call("fetch_and_index_data", json!({})).await;
    assert!(result.starts_with("Error during fetch and index:"), "{}", result);
    assert!(tools.pools().await.is_empty());
}
