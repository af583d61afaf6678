use std::fmt;

use crate::credentials::Credentials;

pub const UID_KEY: &str = "uid";
pub const PWD_KEY: &str = "pwd";

/// A single query parameter value. The upstream API accepts plain strings and integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(value) => f.write_str(value),
            ParamValue::Int(value) => write!(f, "{value}"),
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

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

/// Ordered query parameters for one request.
///
/// Built by the client starting from the credential pair; operation specific
/// fields are appended after `uid` and `pwd`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    entries: Vec<(&'static str, ParamValue)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: &Credentials) -> Self {
        Self::new()
            .with(UID_KEY, credentials.login_name())
            .with(PWD_KEY, credentials.password())
    }

    /// Append a parameter, replacing the value in place if the key is already present.
    pub fn with(mut self, key: &'static str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<ParamValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as string pairs ready for query encoding.
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

impl fmt::Debug for RequestParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (key, value) in &self.entries {
            if *key == PWD_KEY {
                map.entry(key, &"***");
            } else {
                map.entry(key, &value.to_string());
            }
        }
        map.finish()
    }
}
