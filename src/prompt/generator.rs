//! URL-to-prompt pipeline: slug extraction, event fetch, rendering.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::builder::{build_prompt, PromptOptions};
use super::template::PromptTemplate;
use crate::config::Config;
use crate::error::PromptError;
use crate::market::{extract_slug, EventSource, GammaClient};
use crate::metrics;

/// Prefix of the string returned by [`PromptGenerator::generate`] on failure.
pub const ERROR_PREFIX: &str = "Error generating prompt: ";

/// Turns event URLs into prompts.
#[derive(Clone)]
pub struct PromptGenerator {
    source: Arc<dyn EventSource>,
    template: PromptTemplate,
}

impl PromptGenerator {
    /// Create a generator with the built-in template.
    pub fn new(source: impl EventSource + 'static) -> Self {
        Self::with_template(source, PromptTemplate::default())
    }

    /// Create a generator with a custom template.
    pub fn with_template(source: impl EventSource + 'static, template: PromptTemplate) -> Self {
        Self {
            source: Arc::new(source),
            template,
        }
    }

    /// Create a generator against the Gamma API with the template named by
    /// config.
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        let template = PromptTemplate::from_config(config)?;
        Ok(Self::with_template(GammaClient::new(config), template))
    }

    /// Template in use.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Generate the prompt for `event_url`, reporting failures by kind.
    #[instrument(skip(self))]
    pub async fn try_generate(
        &self,
        event_url: &str,
        include_volume: bool,
    ) -> Result<String, PromptError> {
        let _timer = metrics::timer_prompt_generation();

        let result = self.run(event_url, include_volume).await;
        match &result {
            Ok(prompt) => {
                info!(bytes = prompt.len(), "Prompt generated");
                metrics::inc_prompts_generated();
            }
            Err(e) => {
                warn!(kind = %e.kind(), error = %e, "Prompt generation failed");
                metrics::inc_prompt_errors(e.kind());
            }
        }
        result
    }

    /// Generate the prompt for `event_url`.
    ///
    /// Never fails: any error comes back as text starting with
    /// [`ERROR_PREFIX`].
    pub async fn generate(&self, event_url: &str, include_volume: bool) -> String {
        self.try_generate(event_url, include_volume)
            .await
            .unwrap_or_else(|e| error_message(&e))
    }

    async fn run(&self, event_url: &str, include_volume: bool) -> Result<String, PromptError> {
        let slug = extract_slug(event_url)?;
        debug!(slug = %slug, "Extracted slug");

        let event = self.source.fetch_event(&slug).await?;
        info!(
            slug = %slug,
            title = event.title.as_deref().unwrap_or("?"),
            markets = event.markets().len(),
            "Fetched event"
        );

        Ok(build_prompt(
            &event,
            PromptOptions { include_volume },
            &self.template,
        ))
    }
}

/// User-facing text for a failed generation.
pub fn error_message(err: &PromptError) -> String {
    format!("{}{}", ERROR_PREFIX, err)
}
