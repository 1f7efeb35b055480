use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::nytimes::WordleApiClient;
use crate::domain::models::{Config, LoginRequest};
use crate::services::CredentialBackend;

/// Handle the `login` command: run the full login flow with a candidate.
pub async fn execute(config: &Config, candidate: String, json: bool) -> Result<()> {
    let client =
        Arc::new(WordleApiClient::from_config(&config.upstream).context("Failed to build answer client")?);
    let backend = CredentialBackend::new(client);

    let grant = backend.login(&LoginRequest::new(candidate)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&grant)?);
    } else {
        println!("Login accepted!");
        println!("  Policies: {}", grant.policies.join(", "));
        println!("  Lease TTL: {}s", grant.lease.ttl.as_secs());
        println!("  Max TTL: {}s", grant.lease.max_ttl.as_secs());
        println!("  Renewable: {}", grant.lease.renewable);
    }

    Ok(())
}
