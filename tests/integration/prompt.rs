//! End-to-end prompt generation against a canned Gamma response.

use pretty_assertions::assert_eq;
use serde_json::json;

use polymarket_prompt::market::MockEventSource;
use polymarket_prompt::prompt::{PromptGenerator, NO_MARKETS_MESSAGE};
use polymarket_prompt::ErrorKind;

const EVENT_URL: &str = "https://polymarket.com/event/israel-x-hamas-ceasefire-by-july-15?tid=1752";
const SLUG: &str = "israel-x-hamas-ceasefire-by-july-15";

fn ceasefire_event() -> serde_json::Value {
    json!({
        "id": "23784",
        "slug": SLUG,
        "title": "Israel x Hamas ceasefire by July 15?",
        "description": "This market will resolve to \"Yes\" if Israel and Hamas agree to a ceasefire by July 15.",
        "resolutionSource": "Official statements from Israel and Hamas.",
        "endDate": "2025-07-15T12:00:00Z",
        "markets": [
            {
                "question": "Israel x Hamas ceasefire by July 15?",
                "outcomePrices": "[\"0.235\", \"0.765\"]",
                "volumeNum": 1834210.52
            },
            {
                "question": "Malformed market",
                "outcomePrices": "[\"0.5\", \"not-a-price\"]",
                "volumeNum": 10
            },
            {
                "groupItemTitle": "By July 31",
                "question": "Israel x Hamas ceasefire by July 31?",
                "outcomePrices": ["0.4", "0.6"]
            }
        ]
    })
}

const EXPECTED_WITH_VOLUME: &str = r#"Analyze Polymarket data to identify markets with value for betting. Define 'value' as a market where the difference between the market's implied probability (Yes Price) and the estimated true probability exceeds 5% and offers a positive expected return after accounting for Polymarket fees (e.g., 2%). Respond with a JSON array where each element represents a market analysis in the following format:

```json
[
  {
    "market": "<Option Name>",
    "true_cost": <Estimated true probability of the Yes outcome in percentage, e.g., 5.0>,
    "value_score": <Absolute difference between Yes Price and true_cost>,
    "bet": "<Yes, No, or None>",
    "reasoning": "<Detailed explanation of the estimated true probability, including candidate relevance, X sentiment, historical patterns, and market liquidity>",
    "confidence": "<low, medium, high>"
  }
]
```

# EVENT
- **Title**: Israel x Hamas ceasefire by July 15?
- **Description**: This market will resolve to "Yes" if Israel and Hamas agree to a ceasefire by July 15.
- **Resolution Source**: Official statements from Israel and Hamas.
- **End Date**: 2025-07-15T12:00:00Z

# POSSIBLE MARKETS
- **Option Name**: Israel x Hamas ceasefire by July 15?
  - **Yes Price**: 23.5%
  - **No Price**: 76.5%
  - **Volume**: 1834210.52
- **Option Name**: By July 31
  - **Yes Price**: 40.0%
  - **No Price**: 60.0%
  - **Volume**: 0.0

# INSTRUCTIONS
- Estimate the 'true' probability using: (1) relevance of the outcome based on historical patterns, public statements, or connections to the event; (2) sentiment from X posts or news after the event's start date; (3) historical data on similar events; and (4) Polymarket trading volume to assess market confidence. Weight these factors and explain their contribution in the reasoning.
- Prioritize recent data from provided search results and X posts (post-event start date). Cross-reference sources for reliability and discard outdated or unverified information.
- Recommend a 'Yes' or 'No' bet only if the absolute difference between the Yes Price and true_cost is at least 5% and the expected return, accounting for Polymarket fees (e.g., 2%), is positive. Otherwise, set 'bet' to 'None'.
- Ignore markets with 0% Yes/No prices or low liquidity (volume < $1000), assume no value unless credible external evidence suggests otherwise. Note illiquidity in the reasoning.
- Include a 'confidence' field (low, medium, high) based on data availability. If information is limited, provide a probability range for 'true_cost' (e.g., 10-15%) and note uncertainty.
- Sort markets by descending value_score to highlight the most promising betting opportunities.
"#;

#[tokio::test]
async fn test_full_prompt_is_byte_identical() {
    let mock = MockEventSource::new().with_event(SLUG, ceasefire_event());
    let generator = PromptGenerator::new(mock.clone());

    let prompt = generator.generate(EVENT_URL, true).await;

    assert_eq!(prompt, EXPECTED_WITH_VOLUME);
    assert_eq!(prompt.matches("- **Option Name**").count(), 2);
    assert!(!prompt.contains("Malformed market"));
    assert_eq!(mock.requests(), vec![SLUG.to_string()]);
}

#[tokio::test]
async fn test_prompt_without_volume() {
    let mock = MockEventSource::new().with_event(SLUG, ceasefire_event());
    let generator = PromptGenerator::new(mock);

    let prompt = generator.generate(EVENT_URL, false).await;

    let expected: String = EXPECTED_WITH_VOLUME
        .split('\n')
        .filter(|line| !line.starts_with("  - **Volume**"))
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(prompt, expected);
}

#[tokio::test]
async fn test_event_without_markets() {
    let mock = MockEventSource::new().with_event(SLUG, json!({"title": "Empty", "markets": []}));
    let generator = PromptGenerator::new(mock);

    assert_eq!(generator.generate(EVENT_URL, true).await, NO_MARKETS_MESSAGE);
    assert_eq!(generator.generate(EVENT_URL, false).await, NO_MARKETS_MESSAGE);
}

#[tokio::test]
async fn test_error_kinds_are_distinguishable() {
    let mock = MockEventSource::new().with_body("garbled", "<!doctype html>");
    let generator = PromptGenerator::new(mock);

    let invalid = generator.try_generate("https://polymarket.com/", true).await;
    assert_eq!(invalid.unwrap_err().kind(), ErrorKind::InvalidInput);

    let missing = generator.try_generate("https://polymarket.com/event/gone", true).await;
    assert_eq!(missing.unwrap_err().kind(), ErrorKind::NotFound);

    let garbled = generator.try_generate("https://polymarket.com/event/garbled", true).await;
    assert_eq!(garbled.unwrap_err().kind(), ErrorKind::Decode);

    let text = generator.generate("https://polymarket.com/event/gone", true).await;
    assert!(text.starts_with("Error generating prompt: "));
}
