//! Submitted form data.
//!
//! [`FormData`] is a multi-value dictionary holding the fields of one form
//! submission. Picker controls submit their parts under bracketed keys such as
//! `meeting[date]` and `meeting[time]`; [`FormData::get_part`] looks those up.

use std::collections::HashMap;

/// A dictionary of submitted fields that may hold several values per key.
///
/// [`get`](FormData::get) returns the **last** value for a key, the way
/// browsers resolve repeated single-value inputs.
///
/// # Examples
///
/// ```
/// use form_datetime_core::FormData;
///
/// let data = FormData::parse("meeting%5Bdate%5D=2024-12-25&meeting%5Btime%5D=09%3A30");
/// assert_eq!(data.get_part("meeting", "date"), Some("2024-12-25"));
/// assert_eq!(data.get_part("meeting", "time"), Some("09:30"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormData {
    inner: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Creates an empty `FormData`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an `application/x-www-form-urlencoded` body.
    ///
    /// `+` decodes to a space and percent sequences are decoded lossily.
    pub fn parse(body: &str) -> Self {
        let mut data = Self::new();
        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair
                .find('=')
                .map_or((pair, ""), |eq_pos| (&pair[..eq_pos], &pair[eq_pos + 1..]));
            data.append(percent_decode(key), percent_decode(value));
        }
        data
    }

    /// Returns the last value for the given key, or `None` if not present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns the value of the `part` sub-field of control `name`
    /// (the key `name[part]`).
    pub fn get_part(&self, name: &str, part: &str) -> Option<&str> {
        self.get(&part_key(name, part))
    }

    /// Returns all values for the given key, or `None` if not present.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.inner.get(key).map(Vec::as_slice)
    }

    /// Sets a single value for the given key, replacing existing values.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), vec![value.into()]);
    }

    /// Appends a value to the list for the given key.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.entry(key.into()).or_default().push(value.into());
    }

    /// Returns `true` if the key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if nothing was submitted.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (key, value) in iter {
            data.append(key, value);
        }
        data
    }
}

/// Builds the HTML name of a control sub-field, e.g. `meeting[date]`.
pub fn part_key(name: &str, part: &str) -> String {
    format!("{name}[{part}]")
}

fn percent_decode(input: &str) -> String {
    let plus_decoded = input.replace('+', " ");
    percent_encoding::percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}
