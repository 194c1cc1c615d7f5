//! Synchronization settings.

use crate::config::ConfigError;
use crate::issues::RetryPolicy;
use crate::templates::TitleStyle;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Issue body used when the configuration does not provide one.
pub const DEFAULT_BODY_TEMPLATE: &str = "翻译文件：{{file_url}}\n请在认领任务前查看 Markdown 文件内容，并了解对应的 Swift 原文档链接和翻译预估时长";

/// Largest page size the issues API accepts.
const MAX_PER_PAGE: u8 = 100;

/// Everything a synchronization run needs to know about the target repository.
///
/// Every key is optional in the TOML file; missing keys fall back to
/// [`SyncConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Branch the documents are read from.
    pub branch: String,

    /// Directories scanned for documents, in processing order.
    pub directories: Vec<String>,

    /// File name suffix of translatable documents.
    pub extension: String,

    /// Labels attached to every created issue.
    pub labels: Vec<String>,

    /// How issue titles are derived from file paths.
    pub title_style: TitleStyle,

    /// Handlebars template for issue bodies.
    pub body_template: String,

    /// Retry behaviour for issue creation.
    pub retry: RetryPolicy,

    /// Issues requested per inventory page.
    pub per_page: u8,

    /// Upper bound on inventory pages requested in one run.
    pub max_pages: u32,

    /// Record failed submissions and keep going instead of aborting the run.
    pub continue_on_failure: bool,

    /// Base URL used to build links to documents.
    pub web_url: String,

    /// Alternative API base URL (GitHub Enterprise, test servers).
    pub api_url: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            owner: "SwiftGGTeam".to_string(),
            repo: "the-swift-programming-language-in-chinese".to_string(),
            branch: "swift-6-beta-translation".to_string(),
            directories: vec![
                "swift-6-beta.docc/GuidedTour".to_string(),
                "swift-6-beta.docc/LanguageGuide".to_string(),
                "swift-6-beta.docc/ReferenceManual".to_string(),
            ],
            extension: ".md".to_string(),
            labels: vec!["Swift 6 beta translation".to_string()],
            title_style: TitleStyle::default(),
            body_template: DEFAULT_BODY_TEMPLATE.to_string(),
            retry: RetryPolicy::default(),
            per_page: MAX_PER_PAGE,
            max_pages: 100,
            continue_on_failure: false,
            web_url: "https://github.com".to_string(),
            api_url: None,
        }
    }
}

impl SyncConfig {
    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, not valid
    /// TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading sync configuration");

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(&path.display().to_string())?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// `origin` names where the values came from and is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] describing the first invalid value.
    pub fn validate(&self, origin: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::ValidationError {
            path: origin.to_string(),
            message,
        };

        for (key, value) in [
            ("owner", &self.owner),
            ("repo", &self.repo),
            ("branch", &self.branch),
            ("extension", &self.extension),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{key} must not be empty")));
            }
        }

        if self.directories.is_empty() {
            return Err(invalid("directories must list at least one path".to_string()));
        }

        if let Some(dir) = self.directories.iter().find(|d| d.trim().is_empty()) {
            return Err(invalid(format!("directories contains an empty path: {dir:?}")));
        }

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(invalid(format!(
                "per-page must be between 1 and {MAX_PER_PAGE}, got {}",
                self.per_page
            )));
        }

        if self.max_pages == 0 {
            return Err(invalid("max-pages must be at least 1".to_string()));
        }

        if self.retry.max_attempts() == 0 {
            return Err(invalid("retry.max-attempts must be at least 1".to_string()));
        }

        Url::parse(&self.web_url)
            .map_err(|e| invalid(format!("web-url '{}' is not a valid URL: {e}", self.web_url)))?;

        if let Some(api_url) = &self.api_url {
            Url::parse(api_url)
                .map_err(|e| invalid(format!("api-url '{api_url}' is not a valid URL: {e}")))?;
        }

        handlebars::Template::compile(&self.body_template)
            .map_err(|e| invalid(format!("body-template does not compile: {e}")))?;

        Ok(())
    }

    /// Returns the repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Builds the web link to a file at the configured branch.
    #[must_use]
    pub fn file_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}/blob/{}/{}",
            self.web_url.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.branch,
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_valid() {
        let config = SyncConfig::default();
        config.validate("defaults").unwrap();
        assert_eq!(config.per_page, 100);
        assert_eq!(config.directories.len(), 3);
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn can_build_file_url() {
        let config = SyncConfig {
            owner: "acme".to_string(),
            repo: "docs".to_string(),
            branch: "main".to_string(),
            web_url: "https://github.com/".to_string(),
            ..SyncConfig::default()
        };

        assert_eq!(
            config.file_url("Foo/bar-baz.md"),
            "https://github.com/acme/docs/blob/main/Foo/bar-baz.md"
        );
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sync.toml");
        fs::write(
            &path,
            r#"
branch = "main"
title-style = "hyphenated"
"#,
        )
        .unwrap();

        let config = SyncConfig::load(&path).unwrap();

        assert_eq!(config.branch, "main");
        assert_eq!(config.title_style, TitleStyle::Hyphenated);
        assert_eq!(config.owner, "SwiftGGTeam");
        assert_eq!(config.labels, vec!["Swift 6 beta translation".to_string()]);
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sync.toml");
        fs::write(&path, "brnach = \"main\"\n").unwrap();

        let result = SyncConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn rejects_oversized_page() {
        let config = SyncConfig {
            per_page: 101,
            ..SyncConfig::default()
        };

        let result = config.validate("test");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_broken_body_template() {
        let config = SyncConfig {
            body_template: "{{#if file_url}}unterminated".to_string(),
            ..SyncConfig::default()
        };

        let result = config.validate("test");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn rejects_zero_attempts() {
        let config = SyncConfig {
            retry: RetryPolicy::Bounded {
                max_attempts: 0,
                base_delay_ms: 1000,
            },
            ..SyncConfig::default()
        };

        let result = config.validate("test");
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
