//! Catalog command implementation.

use anyhow::{Context, Result};
use tracing::warn;

use agora::catalog;
use agora::client::DiscoveryClient;

pub async fn run(base_url: &str, json: bool, cards: bool) -> Result<()> {
    let client = DiscoveryClient::new(base_url);
    let document = client
        .fetch_catalog()
        .await
        .with_context(|| format!("failed to fetch catalog from {}", client.base_url()))?;

    let entries = catalog::entries(&document);

    if json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else if entries.is_empty() {
        println!("Catalog is empty.");
    } else {
        for entry in &entries {
            println!("{}  {}", entry.name, entry.url);
            if !entry.description.is_empty() {
                println!("    {}", entry.description);
            }
        }
    }

    if cards {
        for entry in &entries {
            let Some(card_url) = &entry.card_url else {
                warn!(agent = %entry.name, "Catalog entry has no card link");
                continue;
            };
            let card = client
                .fetch_card(card_url)
                .await
                .with_context(|| format!("failed to fetch card for {}", entry.name))?;
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
    }

    Ok(())
}
