//! Issue title derivation and body rendering.
//!
//! Titles double as the idempotence key of a run: the same path (and, for
//! [`TitleStyle::Hyphenated`], the same estimate marker) always yields the
//! same title, byte for byte.

mod error;
mod renderer;

pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};

use crate::scanner::DocumentReference;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How an issue title is derived from a document path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TitleStyle {
    /// `"{folder} / {lowercased name}{ext}"`.
    #[default]
    Plain,

    /// Camel-case names become hyphenated, followed by the document's
    /// translation estimate when it carries one.
    Hyphenated,
}

impl TitleStyle {
    /// Returns true if the document content must be fetched to build the title.
    #[must_use]
    pub fn needs_content(self) -> bool {
        matches!(self, Self::Hyphenated)
    }
}

impl FromStr for TitleStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "hyphenated" => Ok(Self::Hyphenated),
            other => Err(format!(
                "unknown title style '{other}', expected 'plain' or 'hyphenated'"
            )),
        }
    }
}

impl fmt::Display for TitleStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Hyphenated => "hyphenated",
        })
    }
}

/// Derives the issue title for a document.
///
/// `estimate` is only used by [`TitleStyle::Hyphenated`].
///
/// Format: `"{folder} / {name}{extension}"`, plus `" {estimate}"` when hyphenated
/// and an estimate is present.
#[must_use]
pub fn derive_title(
    document: &DocumentReference,
    style: TitleStyle,
    extension: &str,
    estimate: Option<&str>,
) -> String {
    match style {
        TitleStyle::Plain => {
            let name = document
                .file_name
                .to_lowercase()
                .replacen(&extension.to_lowercase(), "", 1);
            format!("{} / {name}{extension}", document.folder)
        }
        TitleStyle::Hyphenated => {
            let stem = document
                .file_name
                .strip_suffix(extension)
                .unwrap_or(&document.file_name);
            let title = format!("{} / {}{extension}", document.folder, hyphenate(stem));
            match estimate {
                Some(estimate) => format!("{title} {estimate}"),
                None => title,
            }
        }
    }
}

/// Converts a camel-case name to lowercase words joined by hyphens.
///
/// Acronyms stay together (`URLSession` -> `url-session`); underscores and
/// spaces become hyphens; already hyphenated names are unchanged.
#[must_use]
pub fn hyphenate(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == ' ' {
            out.push('-');
            continue;
        }

        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                out.push('-');
            }
        }

        out.extend(c.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(path: &str) -> DocumentReference {
        DocumentReference::from_path(path)
    }

    #[test]
    fn plain_title_lowercases_name() {
        let title = derive_title(&document("Foo/bar-baz.md"), TitleStyle::Plain, ".md", None);
        assert_eq!(title, "Foo / bar-baz.md");

        let title = derive_title(
            &document("swift-6-beta.docc/GuidedTour/GuidedTour.md"),
            TitleStyle::Plain,
            ".md",
            None,
        );
        assert_eq!(title, "GuidedTour / guidedtour.md");
    }

    #[test]
    fn plain_title_ignores_estimate() {
        let title = derive_title(
            &document("Foo/bar-baz.md"),
            TitleStyle::Plain,
            ".md",
            Some("⭐️"),
        );
        assert_eq!(title, "Foo / bar-baz.md");
    }

    #[test]
    fn hyphenated_title_appends_estimate() {
        let title = derive_title(
            &document("Foo/bar-baz.md"),
            TitleStyle::Hyphenated,
            ".md",
            Some("⭐️⭐️"),
        );
        assert_eq!(title, "Foo / bar-baz.md ⭐️⭐️");
    }

    #[test]
    fn hyphenated_title_without_estimate() {
        let title = derive_title(
            &document("docs/LanguageGuide/TheBasics.md"),
            TitleStyle::Hyphenated,
            ".md",
            None,
        );
        assert_eq!(title, "LanguageGuide / the-basics.md");
    }

    #[test]
    fn title_is_stable() {
        let doc = document("LanguageGuide/AdvancedOperators.md");
        for style in [TitleStyle::Plain, TitleStyle::Hyphenated] {
            let first = derive_title(&doc, style, ".md", Some("⭐️⭐️⭐️"));
            let second = derive_title(&doc, style, ".md", Some("⭐️⭐️⭐️"));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn can_hyphenate() {
        assert_eq!(hyphenate("TheBasics"), "the-basics");
        assert_eq!(hyphenate("AdvancedOperators"), "advanced-operators");
        assert_eq!(hyphenate("URLSession"), "url-session");
        assert_eq!(hyphenate("bar-baz"), "bar-baz");
        assert_eq!(hyphenate("Swift6Features"), "swift6-features");
        assert_eq!(hyphenate("Lexical_Structure"), "lexical-structure");
    }

    #[test]
    fn can_parse_title_style() {
        assert_eq!("plain".parse::<TitleStyle>(), Ok(TitleStyle::Plain));
        assert_eq!("hyphenated".parse::<TitleStyle>(), Ok(TitleStyle::Hyphenated));
        assert!("camel".parse::<TitleStyle>().is_err());
        assert_eq!(TitleStyle::Hyphenated.to_string(), "hyphenated");
    }
}
