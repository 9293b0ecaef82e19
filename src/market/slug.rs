//! Event slug extraction from Polymarket URLs.

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::PromptError;

/// Extract the event slug from a Polymarket event URL.
///
/// The query string and fragment are dropped and the last non-empty path
/// segment is returned, percent-decoded. Bare slugs and scheme-less URLs
/// (`polymarket.com/event/foo`, `localhost:3000/event/foo`) are accepted too.
pub fn extract_slug(event_url: &str) -> Result<String, PromptError> {
    let input = event_url.trim();
    if input.is_empty() {
        return Err(PromptError::invalid_input(event_url, "url is empty"));
    }

    let path = match Url::parse(input) {
        Ok(url) if !url.cannot_be_a_base() => url.path().to_string(),
        // `host:port/...` parses with `host` as the scheme
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => strip_query(input).to_string(),
        Err(e) => return Err(PromptError::invalid_input(event_url, e.to_string())),
    };

    let segment = path
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .ok_or_else(|| PromptError::invalid_input(event_url, "url has no path segments"))?;

    percent_decode_str(segment)
        .decode_utf8()
        .map(|slug| slug.into_owned())
        .map_err(|e| PromptError::invalid_input(event_url, e.to_string()))
}

fn strip_query(input: &str) -> &str {
    input.split(['?', '#']).next().unwrap_or_default()
}
