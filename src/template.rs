//! Include path templating
//!
//! Include paths may contain Go-template placeholders (`{{.VAR}}`,
//! `{{if .X}}...{{end}}`). They are rendered with no variables bound, so
//! every unresolved placeholder renders empty.
//!
//! Actions are rewritten into their Handlebars equivalents before
//! rendering:
//!
//! | Taskfile | Handlebars |
//! |----------|------------|
//! | `{{.NAME}}` | `{{NAME}}` |
//! | `{{.}}` | `{{this}}` |
//! | `{{if .X}}` / `{{else}}` / `{{end}}` | `{{#if X}}` / `{{else}}` / `{{/if}}` |
//! | `{{range .X}}` | `{{#each X}}` |
//! | `{{with .X}}` | `{{#with X}}` |
//! | `{{- .X -}}` | `{{~X~}}` |
//! | `{{/* note */}}` | removed |

use handlebars::Handlebars;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid template \"{template}\": {reason}")]
    Syntax {
        template: String,
        reason: &'static str,
    },

    #[error("Failed to render template \"{template}\": {source}")]
    Render {
        template: String,
        #[source]
        source: handlebars::RenderError,
    },
}

/// Renders strings with an empty variable set
pub struct Templater {
    registry: Handlebars<'static>,
}

impl Templater {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Renders `input`, dropping any placeholder that has no value
    pub fn replace(&self, input: &str) -> Result<String, TemplateError> {
        if !input.contains("{{") {
            return Ok(input.to_string());
        }

        let translated = to_handlebars(input).map_err(|reason| TemplateError::Syntax {
            template: input.to_string(),
            reason,
        })?;

        let rendered = self
            .registry
            .render_template(&translated, &json!({}))
            .map_err(|source| TemplateError::Render {
                template: input.to_string(),
                source,
            })?;

        debug!(template = input, rendered = %rendered, "Rendered include path");
        Ok(rendered)
    }
}

impl Default for Templater {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrites every `{{ ... }}` action into Handlebars syntax
fn to_handlebars(template: &str) -> Result<String, &'static str> {
    let mut out = String::with_capacity(template.len());
    let mut blocks: Vec<&'static str> = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find("}}").ok_or("unclosed action")?;
        let action = &after[..end];
        rest = &after[end + 2..];

        let (trim_left, action) = match action.strip_prefix('-') {
            Some(inner) if inner.starts_with(char::is_whitespace) => (true, inner),
            _ => (false, action),
        };
        let (trim_right, action) = match action.strip_suffix('-') {
            Some(inner) if inner.ends_with(char::is_whitespace) => (true, inner),
            _ => (false, action),
        };
        let action = action.trim();

        if action.starts_with("/*") {
            continue;
        }

        let (word, args) = match action.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args.trim()),
            None => (action, ""),
        };

        let body = match word {
            "if" | "range" | "with" => {
                let helper = match word {
                    "if" => "if",
                    "range" => "each",
                    _ => "with",
                };
                if args.is_empty() {
                    return Err("block action without an argument");
                }
                blocks.push(helper);
                format!("#{helper} {}", expression(args))
            }
            "else" if args.is_empty() => "else".to_string(),
            "else" => match args.split_once(char::is_whitespace) {
                Some(("if", cond)) => format!("else if {}", expression(cond.trim())),
                _ => return Err("unsupported else clause"),
            },
            "end" => {
                let helper = blocks.pop().ok_or("unexpected {{end}}")?;
                format!("/{helper}")
            }
            _ => expression(action),
        };

        out.push_str("{{");
        if trim_left {
            out.push('~');
        }
        out.push_str(&body);
        if trim_right {
            out.push('~');
        }
        out.push_str("}}");
    }
    out.push_str(rest);

    if !blocks.is_empty() {
        return Err("missing {{end}}");
    }
    Ok(out)
}

/// Drops the leading `.` of field references; a bare `.` becomes `this`
fn expression(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() + 4);
    let mut chars = expr.chars().peekable();
    let mut token_start = true;
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '.' if token_start => match chars.peek() {
                Some(&next) if next.is_alphabetic() || next == '_' => {}
                Some(&next) if next.is_ascii_digit() => out.push(c),
                _ => out.push_str("this"),
            },
            _ => out.push(c),
        }
        token_start = c.is_whitespace() || c == '(';
    }

    out
}
