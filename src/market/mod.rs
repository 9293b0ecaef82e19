//! Market module for Polymarket events.
//!
//! This module handles:
//! - Event and market record types
//! - Slug extraction from event URLs
//! - Gamma API client
//! - Per-market price parsing
//! - Mock event source for testing

pub mod client;
pub mod mock;
pub mod parser;
pub mod slug;
pub mod types;

pub use client::{decode_event_list, EventSource, GammaClient};
pub use mock::MockEventSource;
pub use parser::{parse_market_info, MarketParseError};
pub use slug::extract_slug;
pub use types::{GammaEvent, GammaMarket, MarketInfo, Outcome, OutcomePrices};
