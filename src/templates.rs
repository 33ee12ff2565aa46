//! Template store and renderer.
//!
//! The store is an explicitly constructed, immutable registry handed to the
//! generators at startup. Rendering is single-pass and non-recursive: a
//! substituted value is never re-scanned for placeholders. A placeholder
//! missing from the context is a hard error (`MissingPlaceholder`), not a
//! silent blank substitution.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::content;
use crate::errors::{ForgeError, ForgeResult};

/// Placeholder syntax: `{{name}}`, lowercase identifiers only.
fn placeholder_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([a-z][a-z0-9_]*)\}\}").unwrap())
}

/// Per-call placeholder context.
#[derive(Debug, Clone, Default)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context pre-populated with `current_date` and `current_year`, so the
    /// catalogue templates never depend on callers supplying dates.
    pub fn with_defaults() -> Self {
        let now = chrono::Local::now();
        let mut ctx = Self::new();
        ctx.insert("current_date", now.format("%Y-%m-%d").to_string());
        ctx.insert("current_year", now.format("%Y").to_string());
        ctx
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Builder-style variant of [`Context::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Immutable mapping from template ids to template bodies.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates: BTreeMap<&'static str, &'static str>,
}

impl TemplateStore {
    /// Empty store, mostly useful in tests.
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Store loaded with the full catalogue from [`crate::content`].
    pub fn with_catalogue() -> Self {
        let mut store = Self::new();
        for &(id, body) in content::CATALOGUE {
            store.templates.insert(id, body);
        }
        store
    }

    pub fn register(&mut self, id: &'static str, body: &'static str) {
        self.templates.insert(id, body);
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.templates.keys().copied()
    }

    /// Placeholder names referenced by a template.
    pub fn placeholders(&self, id: &str) -> ForgeResult<Vec<String>> {
        let body = self.body(id)?;
        Ok(placeholder_re()
            .captures_iter(body)
            .map(|c| c[1].to_string())
            .collect())
    }

    fn body(&self, id: &str) -> ForgeResult<&'static str> {
        self.templates
            .get(id)
            .copied()
            .ok_or_else(|| ForgeError::UnknownTemplate(id.to_string()))
    }

    /// Render a template by id against the given context.
    pub fn render(&self, id: &str, ctx: &Context) -> ForgeResult<String> {
        let body = self.body(id)?;
        debug!("rendering template: {}", id);

        let re = placeholder_re();
        let mut out = String::with_capacity(body.len());
        let mut last = 0;
        for caps in re.captures_iter(body) {
            let m = caps.get(0).unwrap();
            let key = &caps[1];
            let value = ctx.get(key).ok_or_else(|| ForgeError::MissingPlaceholder {
                template: id.to_string(),
                placeholder: key.to_string(),
            })?;
            out.push_str(&body[last..m.start()]);
            out.push_str(value);
            last = m.end();
        }
        out.push_str(&body[last..]);
        Ok(out)
    }
}

impl Default for TemplateStore {
    fn default() -> Self {
        Self::with_catalogue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_template_when_render_then_substitutes_placeholders() {
        let mut store = TemplateStore::new();
        store.register("greeting", "Hello, {{name}}!");
        let ctx = Context::new().with("name", "world");

        let rendered = store.render("greeting", &ctx).unwrap();

        assert_eq!(rendered, "Hello, world!");
    }

    #[test]
    fn given_unknown_template_when_render_then_unknown_template_error() {
        let store = TemplateStore::new();
        let result = store.render("nope", &Context::new());

        assert!(matches!(result, Err(ForgeError::UnknownTemplate(_))));
    }

    #[test]
    fn given_missing_key_when_render_then_missing_placeholder_error() {
        let mut store = TemplateStore::new();
        store.register("greeting", "Hello, {{name}}!");

        let result = store.render("greeting", &Context::new());

        match result {
            Err(ForgeError::MissingPlaceholder {
                template,
                placeholder,
            }) => {
                assert_eq!(template, "greeting");
                assert_eq!(placeholder, "name");
            }
            other => panic!("expected MissingPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn given_placeholder_valued_substitution_when_render_then_not_rescanned() {
        // Single-pass: a substituted value containing placeholder syntax
        // must come through verbatim.
        let mut store = TemplateStore::new();
        store.register("t", "value: {{a}}");
        let ctx = Context::new().with("a", "{{b}}");

        let rendered = store.render("t", &ctx).unwrap();

        assert_eq!(rendered, "value: {{b}}");
    }

    #[test]
    fn given_shell_expansion_syntax_when_render_then_left_untouched() {
        let mut store = TemplateStore::new();
        store.register("script", "echo ${HOME} and {{name}}");
        let ctx = Context::new().with("name", "x");

        assert_eq!(
            store.render("script", &ctx).unwrap(),
            "echo ${HOME} and x"
        );
    }

    #[test]
    fn with_defaults_supplies_date_and_year() {
        let ctx = Context::with_defaults();
        assert!(ctx.get("current_date").is_some());
        assert!(ctx.get("current_year").is_some());
    }
}
