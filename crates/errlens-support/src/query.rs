//! Query-string assembly
//!
//! Parameters keep insertion order. Keys and values are percent-encoded so
//! that only RFC 3986 unreserved characters pass through unescaped.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::errors::{Result, SupportError};

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    params: Vec<(String, String)>,
}

impl QueryString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter; repeated keys are kept
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Append a parameter only when `value` is present
    pub fn param_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Encoded `k=v&k2=v2`, or an empty string when there are no parameters
    ///
    /// # Errors
    ///
    /// Returns `SupportError::EmptyQueryKey` if any parameter has an empty key.
    pub fn build(&self) -> Result<String> {
        let mut pairs = Vec::with_capacity(self.params.len());
        for (key, value) in &self.params {
            if key.is_empty() {
                return Err(SupportError::EmptyQueryKey);
            }
            pairs.push(format!(
                "{}={}",
                utf8_percent_encode(key, COMPONENT),
                utf8_percent_encode(value, COMPONENT)
            ));
        }
        Ok(pairs.join("&"))
    }

    /// Like [`build`](Self::build) with a leading `?` when non-empty
    ///
    /// # Errors
    ///
    /// Returns `SupportError::EmptyQueryKey` if any parameter has an empty key.
    pub fn to_query(&self) -> Result<String> {
        let built = self.build()?;
        if built.is_empty() {
            Ok(built)
        } else {
            Ok(format!("?{}", built))
        }
    }
}
