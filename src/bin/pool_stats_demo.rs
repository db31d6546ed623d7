// Runs the pool-stats agent once. Pass `--model` to route through the chat model.
use anyhow::{Context, Result};
use pool_agents::{AgentConfig, DispatchStrategy, PoolStatsAgent, Responder};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEMO_QUERY: &str = "Print the top 5 pools by volume";

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

    let strategy = if std::env::args().skip(1).any(|a| a == "--model") {
        DispatchStrategy::Model
    } else {
        DispatchStrategy::Rules
    };

    let config = AgentConfig::load().context("failed to load agent configuration")?;
    let agent = PoolStatsAgent::from_config(&config, strategy)
        .context("failed to build pool stats agent")?;

    println!("User input: {}", DEMO_QUERY);
    let result = agent.respond(DEMO_QUERY).await;
    println!("Result:");
    println!("{}", result);
    Ok(())
}
