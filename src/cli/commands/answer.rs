use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::nytimes::WordleApiClient;
use crate::domain::models::Config;
use crate::domain::ports::{Clock, SystemClock};
use crate::services::DailyAnswerCache;

/// Handle the `answer` command: fetch and print today's reference answer.
pub async fn execute(config: &Config, json: bool) -> Result<()> {
    let client =
        Arc::new(WordleApiClient::from_config(&config.upstream).context("Failed to build answer client")?);
    let cache = DailyAnswerCache::new(client);

    let answer = cache
        .current()
        .await
        .context("Failed to fetch today's answer")?;
    let date = SystemClock.today();

    if json {
        let output = serde_json::json!({
            "date": date.to_string(),
            "answer": answer,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Answer for {date}: {answer}");
    }

    Ok(())
}
