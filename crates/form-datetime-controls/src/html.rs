//! A small HTML element builder for control parts.
//!
//! Attributes keep their insertion order. `true` flags render as bare
//! attribute names, `false` flags and missing values are omitted.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrValue {
    Text(String),
    Flag,
}

/// An HTML element.
///
/// # Examples
///
/// ```
/// use form_datetime_controls::html::Html;
///
/// let input = Html::el("input")
///     .attr("type", "text")
///     .attr("name", "when[date]")
///     .flag("required", true)
///     .flag("disabled", false);
/// assert_eq!(input.to_string(), r#"<input type="text" name="when[date]" required />"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html {
    tag: String,
    attrs: Vec<(String, AttrValue)>,
}

impl Html {
    /// Creates an element with the given tag name.
    pub fn el(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    /// Sets an attribute, replacing a previous value.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name.into(), AttrValue::Text(value.into()));
        self
    }

    /// Sets an attribute when `value` is present.
    #[must_use]
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.attr(name, v),
            None => self,
        }
    }

    /// Sets a boolean attribute; `false` removes it.
    #[must_use]
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        let name = name.into();
        if on {
            self.set(name, AttrValue::Flag);
        } else {
            self.attrs.retain(|(n, _)| *n != name);
        }
        self
    }

    fn set(&mut self, name: String, value: AttrValue) {
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    fn is_void(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "br" | "hr" | "img" | "meta" | "link")
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            match value {
                AttrValue::Text(v) => write!(f, r#" {name}="{}""#, escape(v))?,
                AttrValue::Flag => write!(f, " {name}")?,
            }
        }
        if self.is_void() {
            return f.write_str(" />");
        }
        write!(f, "></{}>", self.tag)
    }
}

/// Escapes text for use in HTML content and attribute values.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
impl Html {
    pub(crate) fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find_map(|(n, v)| match v {
            AttrValue::Text(t) if n == name => Some(t.as_str()),
            _ => None,
        })
    }

    pub(crate) fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| n == name)
    }
}
