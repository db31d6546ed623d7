//! Rule-based intent classification for the pool-stats agent.

use crate::tools::pool_stats::DEFAULT_TOP_POOLS_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    TopPools { limit: u32 },
    PoolStats { pool_id: Option<String> },
    Unknown,
}

const POOL_ID_MARKER: &str = "pool id";

/// Classifies free text into an [`Intent`], case-insensitively.
///
/// "top pools" (or "top <n> pools") wins over "pool stats". For pool stats
/// the id is whatever follows the last "pool id" marker.
pub fn classify(text: &str) -> Intent {
    // ASCII lowering keeps byte offsets aligned with `text`
    let lower = text.to_ascii_lowercase();

    if let Some(limit) = top_pools_limit(&lower) {
        return Intent::TopPools { limit };
    }

    if lower.contains("pool stats") {
        let pool_id = lower
            .rfind(POOL_ID_MARKER)
            .map(|idx| text[idx + POOL_ID_MARKER.len()..].trim())
            .map(|id| id.trim_start_matches(':').trim().to_string())
            .filter(|id| !id.is_empty());
        return Intent::PoolStats { pool_id };
    }

    Intent::Unknown
}

fn top_pools_limit(lower: &str) -> Option<u32> {
    if lower.contains("top pools") {
        return Some(DEFAULT_TOP_POOLS_LIMIT);
    }
    let words: Vec<&str> = lower
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .collect();
    words.windows(3).find_map(|w| match w {
        ["top", n, "pools"] => n.parse::<u32>().ok().filter(|n| *n > 0),
        _ => None,
    })
}
