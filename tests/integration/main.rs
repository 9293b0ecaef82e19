//! Integration tests for the Polymarket prompt generator.
//!
//! Offline tests drive the public API through `MockEventSource`. The live
//! test talks to the real Gamma API.
//! Run it with: cargo test --test integration -- --ignored

mod live;
mod prompt;
