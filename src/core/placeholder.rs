//! `{{name}}` placeholder extraction and substitution.
//!
//! Substitution is a single pass over the original content: values that
//! themselves contain `{{...}}` are inserted verbatim and never expanded.
//! Nested or recursive substitution is not supported.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("placeholder pattern is valid"));

pub const HIGHLIGHT_OPEN: &str = r#"<span class="variable-highlight">"#;
pub const HIGHLIGHT_CLOSE: &str = "</span>";

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Variable {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Trimmed placeholder name, or `None` for tokens like `{{   }}`.
fn token_name<'a>(caps: &'a Captures<'_>) -> Option<&'a str> {
    let name = caps.get(1)?.as_str().trim();
    (!name.is_empty()).then_some(name)
}

/// Returns each distinct placeholder name once, in order of first appearance.
pub fn extract_variables(content: &str) -> Vec<Variable> {
    let mut seen = HashSet::new();
    PLACEHOLDER
        .captures_iter(content)
        .filter_map(|caps| token_name(&caps).map(str::to_owned))
        .filter(|name| seen.insert(name.clone()))
        .map(Variable::new)
        .collect()
}

/// Carries values over from `previous` for names that survive in `new_vars`.
pub fn merge_variables(new_vars: Vec<Variable>, previous: &[Variable]) -> Vec<Variable> {
    new_vars
        .into_iter()
        .map(|var| match previous.iter().find(|p| p.name == var.name) {
            Some(existing) => existing.clone(),
            None => var,
        })
        .collect()
}

/// Re-derives the variable list for edited content, keeping in-progress values.
pub fn refresh_variables(content: &str, previous: &[Variable]) -> Vec<Variable> {
    merge_variables(extract_variables(content), previous)
}

/// Substitutes every placeholder whose variable has a non-empty value.
/// Unresolved placeholders are left exactly as written.
pub fn render(content: &str, vars: &[Variable]) -> String {
    let mut values: HashMap<&str, &str> = HashMap::new();
    for var in vars.iter().filter(|v| !v.value.is_empty()) {
        values.entry(var.name.as_str()).or_insert(var.value.as_str());
    }

    if values.is_empty() {
        return content.to_string();
    }

    PLACEHOLDER
        .replace_all(content, |caps: &Captures<'_>| {
            match token_name(caps).and_then(|name| values.get(name)) {
                Some(value) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Wraps each placeholder in `open`/`close` markers.
pub fn highlight_with(content: &str, open: &str, close: &str) -> String {
    PLACEHOLDER
        .replace_all(content, |caps: &Captures<'_>| match token_name(caps) {
            Some(_) => format!("{}{}{}", open, &caps[0], close),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// HTML markup for previews: `<span class="variable-highlight">{{name}}</span>`.
pub fn highlight(content: &str) -> String {
    highlight_with(content, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE)
}
