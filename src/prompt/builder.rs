//! Rendering of an event and its markets into prompt text.

use rust_decimal::Decimal;

use super::template::PromptTemplate;
use crate::market::{parse_market_info, GammaEvent, MarketInfo, Outcome};

/// Whole output for an event without markets.
pub const NO_MARKETS_MESSAGE: &str = "This event has no markets available.";

const UNKNOWN_TITLE: &str = "Unknown Event";
const NO_DESCRIPTION: &str = "No description available.";
const NO_RESOLUTION_SOURCE: &str = "No resolution source specified.";
const UNKNOWN_END_DATE: &str = "Unknown end date.";

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptOptions {
    /// Emit a `Volume` line in every market block.
    pub include_volume: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            include_volume: true,
        }
    }
}

/// Render `event` into a prompt.
///
/// Markets that fail to parse are left out. An event with no markets at all
/// renders as [`NO_MARKETS_MESSAGE`] alone.
pub fn build_prompt(event: &GammaEvent, options: PromptOptions, template: &PromptTemplate) -> String {
    let markets = event.markets();
    if markets.is_empty() {
        return NO_MARKETS_MESSAGE.to_string();
    }

    let mut lines = vec![
        template.preamble.clone(),
        String::new(),
        "# EVENT".to_string(),
        format!("- **Title**: {}", event.title.as_deref().unwrap_or(UNKNOWN_TITLE)),
        format!(
            "- **Description**: {}",
            event.description.as_deref().unwrap_or(NO_DESCRIPTION)
        ),
        format!(
            "- **Resolution Source**: {}",
            event.resolution_source.as_deref().unwrap_or(NO_RESOLUTION_SOURCE)
        ),
        format!(
            "- **End Date**: {}",
            event.end_date.as_deref().unwrap_or(UNKNOWN_END_DATE)
        ),
        String::new(),
        "# POSSIBLE MARKETS".to_string(),
    ];

    for info in markets.iter().filter_map(parse_market_info) {
        lines.extend(market_block(&info, options));
    }

    lines.push(template.instructions.clone());
    lines.join("\n")
}

/// Lines describing one market.
pub fn market_block(info: &MarketInfo, options: PromptOptions) -> Vec<String> {
    let mut block = vec![format!("- **Option Name**: {}", info.option_name)];
    for outcome in [Outcome::Yes, Outcome::No] {
        block.push(format!(
            "  - **{} Price**: {}%",
            outcome,
            format_number(info.price(outcome))
        ));
    }
    if options.include_volume {
        block.push(format!("  - **Volume**: {}", format_number(info.volume)));
    }
    block
}

/// Shortest decimal form with at least one fractional digit: `30.0`,
/// `12.35`, `1500.5`.
pub fn format_number(value: Decimal) -> String {
    let value = value.normalize();
    if value.scale() == 0 {
        format!("{}.0", value)
    } else {
        value.to_string()
    }
}
