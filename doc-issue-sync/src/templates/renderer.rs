//! Issue body renderer.

use crate::config::SyncConfig;
use crate::scanner::DocumentReference;
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};

/// Creates a configured Handlebars registry.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();

    // Issue bodies are markdown
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);

    hbs
}

/// Renders issue bodies from the configured template.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Creates a new template renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlebars: create_handlebars_registry(),
        }
    }

    /// Renders the issue body for a document.
    ///
    /// Available variables: `file_url`, `path`, `folder`, `file_name`,
    /// `owner`, `repo`, `branch` and `estimate` (empty when unknown).
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_issue_body(
        &self,
        template: &str,
        document: &DocumentReference,
        config: &SyncConfig,
        estimate: Option<&str>,
    ) -> Result<String, super::TemplateError> {
        let data = json!({
            "file_url": config.file_url(&document.path),
            "path": document.path,
            "folder": document.folder,
            "file_name": document.file_name,
            "owner": config.owner,
            "repo": config.repo,
            "branch": config.branch,
            "estimate": estimate.unwrap_or("")
        });

        self.render_template(template, &data)
    }

    fn render_template(&self, template: &str, data: &Value) -> Result<String, super::TemplateError> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}
