pub const RECENT_POOLS_QUERY: &str = r#"
query GetUniswapPools($first: Int!, $orderBy: Pool_orderBy, $orderDirection: OrderDirection) {
    pools(first: $first, orderBy: $orderBy, orderDirection: $orderDirection) {
        id
        token0 { symbol }
        token1 { symbol }
        volumeUSD
    }
}
"#;

pub const POOL_STATS_QUERY: &str = r#"
query GetPoolStats($poolId: ID!) {
    pool(id: $poolId) {
        id
        token0 { id symbol name }
        token1 { id symbol name }
        feeTier
        liquidity
        volumeUSD
        txCount
        totalValueLockedToken0
        totalValueLockedToken1
        totalValueLockedUSD
        feesUSD
        createdAtBlockNumber
        createdAtTimestamp
    }
}
"#;

pub const TOP_POOLS_QUERY: &str = r#"
query GetTopPools($limit: Int!) {
    pools(first: $limit, orderBy: volumeUSD, orderDirection: desc) {
        id
        token0 { symbol }
        token1 { symbol }
        volumeUSD
        txCount
        totalValueLockedUSD
    }
}
"#;

/// Page size of the recent-pools fetch.
pub const RECENT_POOLS_PAGE: u32 = 1000;
