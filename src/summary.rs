//! Text renderings of pool records handed back to the chat layer.

use crate::error::{PoolAgentError, Result};
use crate::subgraph::Pool;

pub const RECENT_POOLS_SHOWN: usize = 5;
pub const NO_POOLS_MESSAGE: &str = "No pools data received from the GraphQL query";

/// Numbered digest of the first five pools, in the order received.
pub fn summarize_recent(pools: &[Pool]) -> Result<String> {
    if pools.is_empty() {
        return Ok(NO_POOLS_MESSAGE.to_string());
    }

    let mut result = format!(
        "Here are the {} most recent pools launched on Uniswap:\n\n",
        RECENT_POOLS_SHOWN
    );
    for (i, pool) in pools.iter().take(RECENT_POOLS_SHOWN).enumerate() {
        result.push_str(&format!(
            "{}. {}/{} - Volume: ${:.2}\n",
            i + 1,
            pool.token0.symbol,
            pool.token1.symbol,
            parse_volume(pool)?
        ));
    }
    Ok(result)
}

pub fn summarize_stats(pool_id: &str, pool: Option<&Pool>) -> Result<String> {
    match pool {
        Some(pool) => Ok(serde_json::to_string_pretty(pool)?),
        None => Ok(format!("No pool found with ID: {}", pool_id)),
    }
}

pub fn summarize_top(pools: &[Pool], limit: usize) -> Result<String> {
    let top = &pools[..pools.len().min(limit)];
    Ok(serde_json::to_string_pretty(top)?)
}

fn parse_volume(pool: &Pool) -> Result<f64> {
    pool.volume_usd
        .trim()
        .parse::<f64>()
        .map_err(|_| PoolAgentError::InvalidVolume {
            pool_id: pool.id.clone(),
            value: pool.volume_usd.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subgraph::Token;

    fn pool(id: &str, sym0: &str, sym1: &str, volume: &str) -> Pool {
        Pool {
            id: id.to_string(),
            token0: Token {
                id: None,
                symbol: sym0.to_string(),
                name: None,
            },
            token1: Token {
                id: None,
                symbol: sym1.to_string(),
                name: None,
            },
            fee_tier: None,
            liquidity: None,
            volume_usd: volume.to_string(),
            tx_count: None,
            total_value_locked_token0: None,
            total_value_locked_token1: None,
            total_value_locked_usd: None,
            fees_usd: None,
            created_at_block_number: None,
            created_at_timestamp: None,
        }
    }

    #[test]
    fn single_pool_line() {
        let pools = vec![pool("p1", "USDC", "ETH", "1234.5")];
        let text = summarize_recent(&pools).unwrap();
        let lines: Vec<_> = text.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "1. USDC/ETH - Volume: $1234.50");
    }

    #[test]
    fn only_first_five_in_received_order() {
        let pools: Vec<Pool> = (1..=8)
            .map(|i| pool(&format!("p{}", i), &format!("T{}", i), "WETH", &format!("{}.125", i)))
            .collect();
        let text = summarize_recent(&pools).unwrap();
        let numbered: Vec<_> = text
            .lines()
            .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(numbered.len(), 5);
        for (i, line) in numbered.iter().enumerate() {
            let n = i + 1;
            assert!(line.starts_with(&format!("{}. T{}/WETH - Volume: $", n, n)));
            let amount = line.rsplit('$').next().unwrap();
            assert_eq!(amount.split('.').nth(1).unwrap().len(), 2, "line: {}", line);
        }
    }

    #[test]
    fn empty_list_is_a_message() {
        let text = summarize_recent(&[]).unwrap();
        assert_eq!(text, NO_POOLS_MESSAGE);
    }

    #[test]
    fn bad_volume_is_an_error() {
        let pools = vec![pool("p1", "USDC", "ETH", "lots")];
        let err = summarize_recent(&pools).unwrap_err();
        assert!(err.to_string().contains("p1"));
    }

    #[test]
    fn stats_not_found_names_the_id() {
        let text = summarize_stats("0xdead", None).unwrap();
        assert_eq!(text, "No pool found with ID: 0xdead");
    }

    #[test]
    fn stats_pretty_prints() {
        let p = pool("0xabc", "DAI", "USDC", "10");
        let text = summarize_stats("0xabc", Some(&p)).unwrap();
        assert!(text.contains("\n  \"id\": \"0xabc\""));
        assert!(text.contains("\"volumeUSD\": \"10\""));
    }

    #[test]
    fn top_respects_limit() {
        let pools: Vec<Pool> = (0..4).map(|i| pool(&format!("p{}", i), "A", "B", "1")).collect();
        let text = summarize_top(&pools, 2).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1]["id"], "p1");

        let all: Vec<serde_json::Value> =
            serde_json::from_str(&summarize_top(&pools, 10).unwrap()).unwrap();
        assert_eq!(all.len(), 4);
    }
}
