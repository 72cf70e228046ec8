use serde_json::Value;

/// Turns a template key and a JSON context into display text.
///
/// Only the email projection renders; the template engine itself lives
/// outside this crate.
pub trait Renderer: Send + Sync {
    fn render(&self, template: &str, context: &Value) -> String;
}
