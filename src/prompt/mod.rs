//! Prompt rendering and the URL-to-prompt entry point.

pub mod builder;
pub mod generator;
pub mod template;

pub use builder::{build_prompt, PromptOptions, NO_MARKETS_MESSAGE};
pub use generator::{error_message, PromptGenerator, ERROR_PREFIX};
pub use template::PromptTemplate;
