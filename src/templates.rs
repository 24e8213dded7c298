//! HTML rendering for the time and error pages.
//!
//! Templates are plain Tera files loaded once at startup. A missing or
//! syntactically broken template is a startup error rather than a request-time
//! surprise.

use anyhow::{anyhow, Context, Result};
use tera::Tera;

/// Template rendered with status 400 when a request is rejected.
pub const ERROR_TEMPLATE: &str = "error.html";
/// Template rendered with status 200 showing the current time.
pub const TIME_TEMPLATE: &str = "time.html";

/// Wrapper around the Tera engine with the pages this service renders.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load all `*.html` templates from `templates_dir`.
    ///
    /// Fails if the directory cannot be parsed or if either required
    /// template is absent.
    pub fn load(templates_dir: &str) -> Result<Self> {
        let glob = format!("{}/*.html", templates_dir.trim_end_matches('/'));
        let tera = Tera::new(&glob)
            .with_context(|| format!("Failed to load templates from '{templates_dir}'"))?;

        let engine = Self { tera };
        for required in [ERROR_TEMPLATE, TIME_TEMPLATE] {
            if !engine.tera.get_template_names().any(|name| name == required) {
                return Err(anyhow!(
                    "Missing required template '{required}' in '{templates_dir}'"
                ));
            }
        }
        Ok(engine)
    }

    /// Render the error page with a human-readable rejection message.
    pub fn render_error_page(&self, message: &str) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("message", message);
        self.tera
            .render(ERROR_TEMPLATE, &context)
            .context("Failed to render error page")
    }

    /// Render the time page for an already-formatted timestamp and zone name.
    pub fn render_time_page(&self, time: &str, zone: &str) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("time", time);
        context.insert("zone", zone);
        self.tera
            .render(TIME_TEMPLATE, &context)
            .context("Failed to render time page")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_template(dir: &TempDir, name: &str, body: &str) {
        fs::write(dir.path().join(name), body).expect("Failed to write template");
    }

    fn template_dir() -> TempDir {
        let dir = TempDir::new().expect("Failed to create temp directory");
        write_template(&dir, "error.html", "<h1>Error</h1><p>{{ message }}</p>");
        write_template(&dir, "time.html", "<p>{{ time }} in {{ zone }}</p>");
        dir
    }

    #[test]
    fn test_load_and_render_error_page() {
        let dir = template_dir();
        let engine = TemplateEngine::load(dir.path().to_str().unwrap()).unwrap();

        let body = engine.render_error_page("Invalid timezone").unwrap();
        assert!(body.contains("Invalid timezone"));
    }

    #[test]
    fn test_load_and_render_time_page() {
        let dir = template_dir();
        let engine = TemplateEngine::load(dir.path().to_str().unwrap()).unwrap();

        let body = engine.render_time_page("2024-06-01 12:00:00", "Europe/Paris").unwrap();
        assert!(body.contains("2024-06-01 12:00:00"));
        // Tera escapes the slash in the zone name
        assert!(body.contains("Europe&#x2F;Paris"));
    }

    #[test]
    fn test_missing_required_template_is_a_startup_error() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        write_template(&dir, "error.html", "<p>{{ message }}</p>");

        let result = TemplateEngine::load(dir.path().to_str().unwrap());
        assert!(result.is_err());
        let error_msg = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(error_msg.contains("time.html"));
    }

    #[test]
    fn test_message_is_escaped() {
        let dir = template_dir();
        let engine = TemplateEngine::load(dir.path().to_str().unwrap()).unwrap();

        let body = engine.render_error_page("<script>alert(1)</script>").unwrap();
        assert!(!body.contains("<script>"));
    }
}
