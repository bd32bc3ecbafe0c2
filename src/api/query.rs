//! Query string construction
//!
//! Keys are emitted in the order they are pushed. Each value is URL-encoded
//! on its own and multi-valued keys are comma-joined, so the separators stay
//! literal: `names=A,B&start=Q,SCHD`.

use std::fmt;

use crate::api::constants;

/// Ordered list of `key=value` pairs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(&'static str, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a multi-valued key; skipped when `values` is empty
    pub fn push_list<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| urlencoding::encode(v.as_ref()))
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((key, joined));
        }
        self
    }

    /// Append a single value
    pub fn push(&mut self, key: &'static str, value: impl fmt::Display) -> &mut Self {
        let value = value.to_string();
        self.pairs.push((key, urlencoding::encode(&value).into_owned()));
        self
    }

    /// Append a single value when present
    pub fn push_opt<T: fmt::Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Build the request resource: `/<resource>?<query>`
    pub fn resource(&self, resource: &str) -> String {
        format!("{}{}{}", constants::URL, resource, self)
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_separator() {
        let query = QueryString::new();
        assert!(query.is_empty());
        assert_eq!(query.resource("region"), "/region");
    }

    #[test]
    fn test_keys_keep_push_order() {
        let mut query = QueryString::new();
        query
            .push_list("names", &["TRAN1", "TRAN2"])
            .push_list("start", &["Q", "SCHD", "TRACE"])
            .push_list("route", &["IMS1"]);
        assert_eq!(
            query.to_string(),
            "?names=TRAN1,TRAN2&start=Q,SCHD,TRACE&route=IMS1"
        );
    }

    #[test]
    fn test_empty_lists_are_skipped() {
        let mut query = QueryString::new();
        let none: [&str; 0] = [];
        query.push_list("names", &["A"]).push_list("route", &none);
        assert_eq!(query.to_string(), "?names=A");
    }

    #[test]
    fn test_values_are_encoded_individually() {
        let mut query = QueryString::new();
        query.push_list("names", &["IVT*", "A B"]);
        assert_eq!(query.to_string(), "?names=IVT%2A,A%20B");
    }

    #[test]
    fn test_push_opt() {
        let mut query = QueryString::new();
        query.push_opt("local", Some(true)).push_opt::<u16>("class", None);
        assert_eq!(query.to_string(), "?local=true");
    }
}
