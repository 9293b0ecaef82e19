//! Fixed text surrounding the event and market sections of a prompt.

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::config::Config;

/// Built-in preamble: task description and the expected JSON answer shape.
pub const DEFAULT_PREAMBLE: &str = r#"Analyze Polymarket data to identify markets with value for betting. Define 'value' as a market where the difference between the market's implied probability (Yes Price) and the estimated true probability exceeds 5% and offers a positive expected return after accounting for Polymarket fees (e.g., 2%). Respond with a JSON array where each element represents a market analysis in the following format:

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
```"#;

/// Built-in closing block with the analysis heuristics.
///
/// Starts and ends with a newline: it follows the last market line after a
/// blank line and closes the prompt with a trailing newline.
pub const DEFAULT_INSTRUCTIONS: &str = r#"
# INSTRUCTIONS
- Estimate the 'true' probability using: (1) relevance of the outcome based on historical patterns, public statements, or connections to the event; (2) sentiment from X posts or news after the event's start date; (3) historical data on similar events; and (4) Polymarket trading volume to assess market confidence. Weight these factors and explain their contribution in the reasoning.
- Prioritize recent data from provided search results and X posts (post-event start date). Cross-reference sources for reliability and discard outdated or unverified information.
- Recommend a 'Yes' or 'No' bet only if the absolute difference between the Yes Price and true_cost is at least 5% and the expected return, accounting for Polymarket fees (e.g., 2%), is positive. Otherwise, set 'bet' to 'None'.
- Ignore markets with 0% Yes/No prices or low liquidity (volume < $1000), assume no value unless credible external evidence suggests otherwise. Note illiquidity in the reasoning.
- Include a 'confidence' field (low, medium, high) based on data availability. If information is limited, provide a probability range for 'true_cost' (e.g., 10-15%) and note uncertainty.
- Sort markets by descending value_score to highlight the most promising betting opportunities.
"#;

/// Preamble and closing instructions of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    /// Text before the `# EVENT` section.
    pub preamble: String,
    /// Text after the last market block.
    pub instructions: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            preamble: DEFAULT_PREAMBLE.to_string(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }
}

impl PromptTemplate {
    /// Build the template named by config, falling back to the built-in
    /// text for any part without an override file.
    pub fn from_config(config: &Config) -> io::Result<Self> {
        let mut template = Self::default();

        if let Some(path) = &config.prompt_preamble_path {
            template.preamble = read_part(path)?;
        }
        if let Some(path) = &config.prompt_instructions_path {
            template.instructions = read_part(path)?;
        }

        Ok(template)
    }

    /// Whether this is the built-in template.
    pub fn is_builtin(&self) -> bool {
        *self == Self::default()
    }
}

/// File contents are used verbatim.
fn read_part(path: &Path) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    info!(path = %path.display(), bytes = text.len(), "Loaded prompt template part");
    Ok(text)
}
