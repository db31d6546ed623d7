// Runs the recent-pools agent once against the live subgraph and model.
use anyhow::{Context, Result};
use pool_agents::{AgentConfig, RecentPoolAgent, Responder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_QUERY: &str = "What are the 5 most recent pools launched on Uniswap?";

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pool_agents=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AgentConfig::load().context("failed to load agent configuration")?;
    let agent = RecentPoolAgent::from_config(&config)
        .await
        .context("failed to build recent pools agent")?;

    println!("User input: {}", DEMO_QUERY);
    let result = agent.respond(DEMO_QUERY).await;
    println!("Result:");
    println!("{}", result);
    Ok(())
}
