//! HTML rendering for registered assets.
//!
//! Assets render to one tag per line: `<script src="...">` for scripts,
//! `<link href="...">` with stylesheet defaults for styles. Inline entries
//! never reach this module; the container returns their markup verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::AssetGroup;

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// One attribute value.
///
/// `Flag` serializes boolean-style (`defer="defer"`); `Value` serializes
/// as `key="value"` with the value HTML-escaped, and is omitted entirely
/// when the value is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
    Flag,
    Value(String),
}

/// Insertion-ordered attribute map for a rendered tag.
///
/// Attribute order in the output follows insertion order, with the
/// group's source attribute (`src`/`href`) always placed last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    entries: IndexMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form: add a boolean-style attribute such as `defer`.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), AttrValue::Flag);
        self
    }

    /// Builder form: add a named attribute.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries
            .insert(name.into(), AttrValue::Value(value.into()));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: AttrValue) {
        self.entries.insert(name.into(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append any of `defaults` not already present. Explicit attributes
    /// keep their position and win over defaults with the same name.
    fn with_defaults(&self, defaults: &[(&str, &str)]) -> Attributes {
        let mut merged = self.clone();
        for (name, value) in defaults {
            if !merged.entries.contains_key(*name) {
                merged
                    .entries
                    .insert((*name).to_string(), AttrValue::Value((*value).to_string()));
            }
        }
        merged
    }

    /// Force `name` to the last emission slot with the given value.
    fn push_last(&mut self, name: &str, value: String) {
        self.entries.shift_remove(name);
        self.entries.insert(name.to_string(), AttrValue::Value(value));
    }

    /// Serialize to ` key="value" ...` with a leading space, or an empty
    /// string when nothing renders. Empty-valued named attributes are
    /// skipped.
    fn to_html(&self) -> String {
        let mut html = String::new();
        for (name, value) in &self.entries {
            match value {
                AttrValue::Flag => {
                    html.push(' ');
                    html.push_str(name);
                    html.push_str("=\"");
                    html.push_str(name);
                    html.push('"');
                }
                AttrValue::Value(v) if !v.is_empty() => {
                    html.push(' ');
                    html.push_str(name);
                    html.push_str("=\"");
                    html.push_str(&escape_attr(v));
                    html.push('"');
                }
                AttrValue::Value(_) => {}
            }
        }
        html
    }
}

// ---------------------------------------------------------------------------
// Escaping
// ---------------------------------------------------------------------------

/// Escape a string for embedding inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tag rendering
// ---------------------------------------------------------------------------

/// Stylesheet defaults merged under explicit attributes.
const STYLE_DEFAULTS: [(&str, &str); 3] = [
    ("media", "all"),
    ("type", "text/css"),
    ("rel", "stylesheet"),
];

/// Wrap a resolved source URL in its group's canonical tag.
pub fn render_tag(group: AssetGroup, source: &str, attributes: &Attributes) -> String {
    match group {
        AssetGroup::Script => {
            let mut attrs = attributes.clone();
            attrs.push_last("src", source.to_string());
            format!("<script{}></script>\n", attrs.to_html())
        }
        AssetGroup::Style => {
            let mut attrs = attributes.with_defaults(&STYLE_DEFAULTS);
            attrs.push_last("href", source.to_string());
            format!("<link{}>\n", attrs.to_html())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
