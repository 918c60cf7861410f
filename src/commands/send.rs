//! Send command implementation.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use agora::client::DiscoveryClient;

pub async fn run(
    base_url: &str,
    agent: Option<&str>,
    message: &str,
    timeout_seconds: u64,
) -> Result<()> {
    let client = DiscoveryClient::with_timeout(base_url, Duration::from_secs(timeout_seconds));
    let discovery = client.discover(agent, message).await?;
    info!(agent = %discovery.agent.name, url = %discovery.agent.url, "Agent replied");
    println!("{}", discovery.event.content);

    Ok(())
}
