//! Translation estimate markers.
//!
//! Annotated documents carry an HTML comment such as:
//!
//! ```text
//! <!--
//! 要翻译的文件：https://github.com/...
//! 翻译估计用时：⭐️⭐️
//! -->
//! ```
//!
//! The value after `翻译估计用时：` is the effort rating.

use regex::Regex;
use std::sync::LazyLock;

static ESTIMATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)翻译估计用时[：:][ \t]*(.+?)[ \t]*(?:-->|$)")
        .expect("estimate pattern is a valid regex")
});

/// Extracts the translation estimate from a document, if it carries one.
///
/// Only the first marker is considered. Both full-width and ASCII colons are accepted.
/// The value runs to the end of the line or to a closing `-->`.
#[must_use]
pub fn extract_estimate(content: &str) -> Option<String> {
    ESTIMATE_PATTERN
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|value| value.as_str().trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
