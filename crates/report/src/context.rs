//! Rendering options shared by the text and JSON report paths.

use tethys_locale::Language;

/// Default project name when the caller does not supply one.
pub const DEFAULT_PROJECT: &str = "Unnamed Project";

/// Options controlling how a report is rendered.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use tethys_locale::Language;
/// use tethys_report::ReportContext;
///
/// let ctx = ReportContext::new()
///     .with_language(Language::Thai)
///     .with_project("Riverside Resort")
///     .with_charts(false);
///
/// assert_eq!(ctx.language(), Language::Thai);
/// assert_eq!(ctx.project(), "Riverside Resort");
/// assert!(!ctx.charts());
/// ```
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Language every label is resolved in.
    language: Language,
    /// Project name shown under the title. `None` renders the default.
    project: Option<String>,
    /// Whether the chart section is rendered.
    charts: bool,
}

impl ReportContext {
    /// Creates a context with defaults: English, no project name, charts on.
    pub fn new() -> Self {
        Self {
            language: Language::English,
            project: None,
            charts: true,
        }
    }

    /// Sets the report language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Sets the project name shown under the report title.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Enables or disables the chart section.
    pub fn with_charts(mut self, charts: bool) -> Self {
        self.charts = charts;
        self
    }

    /// Returns the report language.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Returns the project name, or [`DEFAULT_PROJECT`] if none was set.
    pub fn project(&self) -> &str {
        self.project.as_deref().unwrap_or(DEFAULT_PROJECT)
    }

    /// Returns whether the chart section is rendered.
    pub fn charts(&self) -> bool {
        self.charts
    }
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::new()
    }
}
