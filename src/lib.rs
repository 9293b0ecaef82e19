//! Polymarket event prompt generator.
//!
//! Turns a Polymarket event URL into a text prompt asking a language model
//! to look for mispriced markets in that event.
//!
//! # Pipeline
//!
//! ```text
//! https://polymarket.com/event/<slug>?tid=…
//!   → slug
//!   → GET https://gamma-api.polymarket.com/events?slug=<slug>
//!   → first event
//!   → preamble + # EVENT + # POSSIBLE MARKETS + instructions
//! ```
//!
//! Markets whose prices cannot be read are left out of the prompt. Any other
//! failure ends the call; [`PromptGenerator::generate`] turns it into a
//! string starting with `"Error generating prompt: "`.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`market`]: Slug extraction, Gamma client, market parsing
//! - [`prompt`]: Template, rendering and the generator entry point
//! - [`api`]: HTTP API for prompts, health and metrics
//! - [`metrics`]: Prometheus counters and latency timers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod market;
pub mod metrics;
pub mod prompt;
pub mod utils;

pub use config::Config;
pub use error::{AppError, ErrorKind, PromptError, Result};
pub use prompt::{PromptGenerator, PromptOptions, PromptTemplate};
