//! Tests against the real Gamma API.

use polymarket_prompt::config::Config;
use polymarket_prompt::market::{EventSource, GammaClient};
use polymarket_prompt::prompt::{PromptGenerator, ERROR_PREFIX};
use polymarket_prompt::ErrorKind;

/// A long-resolved event that should stay listed.
const KNOWN_EVENT_URL: &str =
    "https://polymarket.com/event/presidential-election-winner-2024?tid=1";

/// Test that a known event renders a full prompt.
#[tokio::test]
#[ignore = "requires network access to gamma-api.polymarket.com"]
async fn test_live_prompt() {
    let generator = PromptGenerator::from_config(&Config::default()).unwrap();

    let prompt = generator.generate(KNOWN_EVENT_URL, true).await;

    assert!(!prompt.starts_with(ERROR_PREFIX), "Generation failed: {}", prompt);
    assert!(prompt.contains("# EVENT"));
    assert!(prompt.contains("- **Option Name**: "));

    println!("{}", prompt);
}

/// Test that an unknown slug is reported as not found.
#[tokio::test]
#[ignore = "requires network access to gamma-api.polymarket.com"]
async fn test_live_unknown_slug() {
    let client = GammaClient::new(&Config::default());

    let result = client
        .fetch_event("this-event-slug-does-not-exist-0000000000")
        .await;

    let err = result.expect_err("unknown slug should not resolve");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
