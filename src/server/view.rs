//! Server-rendered views.
//!
//! A [`View`] pairs a template name with a view model serialized once per response.
//! Rendering goes through the [`ViewRenderer`] trait so the template engine stays a
//! swappable collaborator. [`LayoutRenderer`] is the built-in renderer: it emits the
//! shared page layout and embeds the view model as JSON for client-side templates.

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

const SITE_NAME: &str = "Weight Loss Watch";

#[derive(Error, Debug)]
pub enum ViewError {
    /// The view model could not be converted to JSON.
    #[error("Failed to serialize view model for '{template}': {source}")]
    Serialize {
        template: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The view model serialized to something other than a JSON object.
    #[error("View model for '{0}' must serialize to an object")]
    NotObject(&'static str),
}

/// A template name, response status and the data rendered into it.
#[derive(Debug, Clone)]
pub struct View {
    template: &'static str,
    status: StatusCode,
    model: Value,
}

impl View {
    /// Builds a view from a serializable view model.
    ///
    /// # Arguments
    /// - `template` - Template name such as `"donate/index"`
    /// - `model` - View model; must serialize to a JSON object
    ///
    /// # Returns
    /// - `Ok(View)` - View with status 200 OK
    /// - `Err(ViewError)` - Model failed to serialize or is not an object
    pub fn new<M: Serialize>(template: &'static str, model: &M) -> Result<Self, ViewError> {
        let model = serde_json::to_value(model)
            .map_err(|source| ViewError::Serialize { template, source })?;

        if !model.is_object() {
            return Err(ViewError::NotObject(template));
        }

        Ok(Self {
            template,
            status: StatusCode::OK,
            model,
        })
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn template(&self) -> &'static str {
        self.template
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn model(&self) -> &Value {
        &self.model
    }
}

/// Turns a template name and view model into a response body.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, template: &str, model: &Value) -> Result<String, ViewError>;

    /// Content type of the rendered body.
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

/// Built-in HTML layout renderer.
///
/// Reads `title`, `description`, `message` and `user.theme` from the view model. The
/// whole model is embedded in a `<script type="application/json" id="view-model">` block.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRenderer;

impl ViewRenderer for LayoutRenderer {
    fn render(&self, template: &str, model: &Value) -> Result<String, ViewError> {
        let title = model.get("title").and_then(Value::as_str).unwrap_or(SITE_NAME);
        let theme = model
            .get("user")
            .and_then(|user| user.get("theme"))
            .and_then(Value::as_str);

        let mut html = String::with_capacity(1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str(&format!(
            "<title>{} | {}</title>\n",
            escape_html(title),
            SITE_NAME
        ));
        if let Some(description) = model.get("description").and_then(Value::as_str) {
            html.push_str(&format!(
                "<meta name=\"description\" content=\"{}\">\n",
                escape_html(description)
            ));
        }
        if let Some(theme) = theme {
            html.push_str(&format!(
                "<meta name=\"theme-preference\" content=\"{}\">\n",
                escape_html(theme)
            ));
        }
        html.push_str("<link rel=\"stylesheet\" href=\"/css/style.css\">\n");
        html.push_str("<script src=\"/js/theme.js\" defer></script>\n</head>\n");
        html.push_str(&format!(
            "<body data-template=\"{}\">\n<main>\n<h1>{}</h1>\n",
            escape_html(template),
            escape_html(title)
        ));
        if let Some(message) = model.get("message").and_then(Value::as_str) {
            html.push_str(&format!("<p>{}</p>\n", escape_html(message)));
        }
        html.push_str("</main>\n<script type=\"application/json\" id=\"view-model\">");
        html.push_str(&escape_script_json(&model.to_string()));
        html.push_str("</script>\n</body>\n</html>\n");

        Ok(html)
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// JSON inside a script element must not contain a literal `</script>`.
fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_models() {
        let err = View::new("home/index", &"Welcome").unwrap_err();
        assert!(matches!(err, ViewError::NotObject("home/index")));
    }

    #[test]
    fn layout_escapes_title_and_embeds_model() {
        let model = json!({ "title": "<Welcome>", "note": "</script>" });
        let html = LayoutRenderer.render("home/index", &model).unwrap();

        assert!(html.contains("<title>&lt;Welcome&gt; | Weight Loss Watch</title>"));
        assert!(html.contains("data-template=\"home/index\""));
        assert!(!html.contains("\"</script>\""));
        assert!(html.contains("\\u003c/script>"));
    }

    #[test]
    fn layout_exposes_user_theme_preference() {
        let model = json!({ "title": "Dashboard", "user": { "theme": "dark" } });
        let html = LayoutRenderer.render("dashboard/index", &model).unwrap();

        assert!(html.contains("<meta name=\"theme-preference\" content=\"dark\">"));
    }

    #[test]
    fn layout_omits_preference_for_anonymous_pages() {
        let model = json!({ "title": "Welcome" });
        let html = LayoutRenderer.render("home/index", &model).unwrap();

        assert!(!html.contains("theme-preference"));
    }
}
