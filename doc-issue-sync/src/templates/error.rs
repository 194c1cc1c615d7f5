//! Issue body rendering error types.

/// Issue body rendering error.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The body template failed to compile or render.
    #[error("Failed to render issue body: {0}")]
    Render(#[from] handlebars::RenderError),
}
