use std::{collections::BTreeMap, ops::RangeInclusive};

use chrono::NaiveDate;

use crate::error::{JamendoError, Result};

/// Format used by Jamendo for both ends of a `datebetween` range.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Response format injected when the caller does not ask for one.
pub const DEFAULT_FORMAT: &str = "json";

/// A single request parameter before it is flattened to a query string value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Text(String),
    Number(i64),
    Flag(bool),
    /// Multiple values for one key, e.g. `id`, `tags` or `include`.
    List(Vec<String>),
    /// Inclusive date range, e.g. for `datebetween`.
    DateRange { from: NaiveDate, to: NaiveDate },
}

impl ParamValue {
    /// Flattens the value to the string the API expects.
    ///
    /// Returns `Ok(None)` when the value should not be sent at all (an empty
    /// list).
    fn encode(&self, name: &str) -> Result<Option<String>> {
        match self {
            ParamValue::Text(s) => Ok(Some(s.clone())),
            ParamValue::Number(n) => Ok(Some(n.to_string())),
            ParamValue::Flag(b) => Ok(Some(b.to_string())),
            ParamValue::List(items) => {
                let joined = items
                    .iter()
                    .map(|i| i.trim())
                    .filter(|i| !i.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                if joined.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(joined))
                }
            }
            ParamValue::DateRange { from, to } => {
                if from > to {
                    return Err(JamendoError::invalid_parameter(
                        name,
                        format!("range starts on {from} but ends on {to}"),
                    ));
                }
                Ok(Some(format!(
                    "{}_{}",
                    from.format(DATE_FORMAT),
                    to.format(DATE_FORMAT)
                )))
            }
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Number(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Number(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Flag(value)
    }
}

impl<T: ToString> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<T: ToString> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        ParamValue::List(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<(NaiveDate, NaiveDate)> for ParamValue {
    fn from((from, to): (NaiveDate, NaiveDate)) -> Self {
        ParamValue::DateRange { from, to }
    }
}

impl From<RangeInclusive<NaiveDate>> for ParamValue {
    fn from(range: RangeInclusive<NaiveDate>) -> Self {
        let (from, to) = range.into_inner();
        ParamValue::DateRange { from, to }
    }
}

/// Request parameters for a Jamendo endpoint.
///
/// Keys are kept sorted so the generated query strings are stable.
///
/// ```ignore
/// let params = Parameters::new()
///     .with("id", vec![245, 246])
///     .with("include", vec!["musicinfo", "stats"])
///     .with("limit", 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: BTreeMap<String, ParamValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Shorthand for the `datebetween` filter accepted by most read endpoints.
    pub fn date_between(self, from: NaiveDate, to: NaiveDate) -> Self {
        self.with("datebetween", (from, to))
    }

    /// Flattens the parameters into key/value pairs ready for a query string
    /// or a form body.
    ///
    /// `client_id` is always set to the given value, replacing anything the
    /// caller put there, and `format` defaults to `json`.
    pub fn normalize(&self, client_id: &str) -> Result<Vec<(String, String)>> {
        let mut pairs = Vec::with_capacity(self.values.len() + 2);

        for (name, value) in &self.values {
            if name == "client_id" {
                continue;
            }
            if let Some(encoded) = value.encode(name)? {
                pairs.push((name.clone(), encoded));
            }
        }

        if !pairs.iter().any(|(k, _)| k == "format") {
            pairs.push(("format".to_string(), DEFAULT_FORMAT.to_string()));
        }
        pairs.push(("client_id".to_string(), client_id.to_string()));

        Ok(pairs)
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Parameters::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}
