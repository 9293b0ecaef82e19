//! Event and market records returned by the Gamma API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::Display;

/// Side of a binary market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Outcome {
    /// First entry of `outcomePrices`.
    #[strum(to_string = "Yes")]
    Yes,
    /// Second entry of `outcomePrices`.
    #[strum(to_string = "No")]
    No,
}

impl Outcome {
    /// Position of this outcome in the `outcomePrices` sequence.
    pub fn price_index(&self) -> usize {
        match self {
            Outcome::Yes => 0,
            Outcome::No => 1,
        }
    }
}

/// Event record from `GET /events?slug=…`.
///
/// Every field is optional; the prompt builder supplies placeholders.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaEvent {
    /// Event title. Placeholder: "Unknown Event".
    pub title: Option<String>,
    /// Event description. Placeholder: "No description available.".
    pub description: Option<String>,
    /// Resolution source. Placeholder: "No resolution source specified.".
    pub resolution_source: Option<String>,
    /// End date (ISO string as sent by the API). Placeholder: "Unknown end date.".
    pub end_date: Option<String>,
    /// Raw market records, kept untyped so that one malformed market
    /// cannot fail decoding of the whole event.
    pub markets: Option<Vec<Value>>,
}

impl GammaEvent {
    /// Raw market records, empty when the field is absent or null.
    pub fn markets(&self) -> &[Value] {
        self.markets.as_deref().unwrap_or_default()
    }
}

/// `outcomePrices` arrives either as a JSON-encoded string
/// (`"[\"0.3\", \"0.7\"]"`) or as a plain array.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OutcomePrices {
    /// Text-encoded sequence, decoded before use.
    Encoded(String),
    /// Already-decoded sequence of strings or numbers.
    List(Vec<Value>),
}

impl Default for OutcomePrices {
    /// Missing prices read as `["0", "0"]`.
    fn default() -> Self {
        OutcomePrices::List(vec![Value::from("0"), Value::from("0")])
    }
}

/// Market record nested inside a [`GammaEvent`].
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GammaMarket {
    /// Short option label for multi-market events.
    pub group_item_title: Option<String>,
    /// Full market question.
    pub question: Option<String>,
    /// Yes/No prices in [0, 1]. An absent key reads as `["0", "0"]`; an
    /// explicit `null` stays `None` and the market is skipped.
    #[serde(default = "default_outcome_prices")]
    pub outcome_prices: Option<OutcomePrices>,
    /// Traded volume, number or numeric string.
    pub volume_num: Option<Value>,
}

fn default_outcome_prices() -> Option<OutcomePrices> {
    Some(OutcomePrices::default())
}

impl GammaMarket {
    /// Name shown in the prompt: group title, then question, then "Yes/No".
    pub fn option_name(&self) -> &str {
        [&self.group_item_title, &self.question]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|s| !s.is_empty())
            .unwrap_or(DEFAULT_OPTION_NAME)
    }
}

/// Option name used when a market has neither a group title nor a question.
pub const DEFAULT_OPTION_NAME: &str = "Yes/No";

/// Parsed market, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketInfo {
    /// Option name.
    pub option_name: String,
    /// Yes price as a percentage, two decimal places.
    pub yes_price: Decimal,
    /// No price as a percentage, two decimal places.
    pub no_price: Decimal,
    /// Traded volume, zero when absent.
    pub volume: Decimal,
}

impl MarketInfo {
    /// Price for the given outcome.
    pub fn price(&self, outcome: Outcome) -> Decimal {
        match outcome {
            Outcome::Yes => self.yes_price,
            Outcome::No => self.no_price,
        }
    }
}
