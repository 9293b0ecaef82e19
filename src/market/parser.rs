//! Conversion of raw Gamma market records into [`MarketInfo`].

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{GammaMarket, MarketInfo, OutcomePrices, Outcome};
use crate::metrics;

/// Why a single market was left out of the prompt.
#[derive(Error, Debug)]
pub enum MarketParseError {
    /// The record does not match the market shape at all.
    #[error("malformed market record: {0}")]
    Malformed(serde_json::Error),

    /// `outcomePrices` was present but `null`.
    #[error("outcome prices are null")]
    NullPrices,

    /// `outcomePrices` was a string that is not a JSON list.
    #[error("outcome prices are not a JSON list: {0}")]
    UndecodablePrices(serde_json::Error),

    /// Fewer than two outcome prices.
    #[error("missing {outcome} price at index {index}")]
    MissingPrice {
        /// Which side was missing.
        outcome: Outcome,
        /// Index looked up.
        index: usize,
    },

    /// A price entry is not a number.
    #[error("non-numeric {outcome} price: {value}")]
    NotNumeric {
        /// Which side failed.
        outcome: Outcome,
        /// The offending raw value.
        value: Value,
    },
}

/// Parse one raw market record.
///
/// Returns `None` (and logs a warning naming the market) when any field
/// conversion fails; the caller skips that market.
pub fn parse_market_info(raw: &Value) -> Option<MarketInfo> {
    match try_parse_market_info(raw) {
        Ok(info) => {
            debug!(
                option = %info.option_name,
                yes = %info.yes_price,
                no = %info.no_price,
                "Parsed market"
            );
            Some(info)
        }
        Err(e) => {
            let name = raw
                .get("question")
                .and_then(Value::as_str)
                .unwrap_or("unnamed");
            warn!(market = %name, error = %e, "Skipping market");
            metrics::inc_markets_skipped();
            None
        }
    }
}

/// Parse one raw market record, reporting why it failed.
pub fn try_parse_market_info(raw: &Value) -> Result<MarketInfo, MarketParseError> {
    let market: GammaMarket =
        serde_json::from_value(raw.clone()).map_err(MarketParseError::Malformed)?;

    let prices = match market
        .outcome_prices
        .clone()
        .ok_or(MarketParseError::NullPrices)?
    {
        OutcomePrices::Encoded(text) => {
            serde_json::from_str::<Vec<Value>>(&text).map_err(MarketParseError::UndecodablePrices)?
        }
        OutcomePrices::List(list) => list,
    };

    let yes_price = percent_at(&prices, Outcome::Yes)?;
    let no_price = percent_at(&prices, Outcome::No)?;

    let volume = market
        .volume_num
        .as_ref()
        .and_then(decimal_from_value)
        .unwrap_or(Decimal::ZERO);

    Ok(MarketInfo {
        option_name: market.option_name().to_string(),
        yes_price,
        no_price,
        volume,
    })
}

/// Price for `outcome` as a percentage rounded to two places, halves away
/// from zero.
fn percent_at(prices: &[Value], outcome: Outcome) -> Result<Decimal, MarketParseError> {
    let index = outcome.price_index();
    let raw = prices
        .get(index)
        .ok_or(MarketParseError::MissingPrice { outcome, index })?;

    decimal_from_value(raw)
        .and_then(|p| p.checked_mul(dec!(100)))
        .map(|p| p.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .ok_or_else(|| MarketParseError::NotNumeric {
            outcome,
            value: raw.clone(),
        })
}

/// Read a JSON number or numeric string as a decimal.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
