//! Colon-separated `key=value` custom parameter strings.
//!
//! Every strategy and placement instance parses its own string; the keys it
//! recognizes are its own business. Malformed entries and keys nothing
//! consumed are errors that name the offender.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

/// Errors from parsing a custom parameter string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// An entry without a `key=value` shape.
    Malformed { entry: String },
    /// A key the consumer does not recognize.
    UnknownKey { key: String },
    /// A value that does not parse as the expected type.
    BadValue { key: String, value: String },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Malformed { entry } => {
                write!(f, "malformed parameter entry '{}'", entry)
            }
            ParamsError::UnknownKey { key } => write!(f, "unknown parameter '{}'", key),
            ParamsError::BadValue { key, value } => {
                write!(f, "parameter '{}': cannot parse value '{}'", key, value)
            }
        }
    }
}

/// Parsed `key=value` pairs. Consumers `take` the keys they understand and
/// then call [`CustomParams::finish`] so leftovers are reported by name.
#[derive(Debug, Clone, Default)]
pub struct CustomParams {
    entries: BTreeMap<String, String>,
}

impl CustomParams {
    pub fn parse(params: &str) -> Result<Self, ParamsError> {
        let mut entries = BTreeMap::new();
        for entry in params.split(':') {
            if entry.is_empty() {
                continue;
            }
            let Some((key, value)) = entry.split_once('=') else {
                return Err(ParamsError::Malformed {
                    entry: entry.to_string(),
                });
            };
            if key.is_empty() {
                return Err(ParamsError::Malformed {
                    entry: entry.to_string(),
                });
            }
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(Self { entries })
    }

    /// Remove and parse `key`; `None` when the key is absent.
    pub fn take<T: FromStr>(&mut self, key: &str) -> Result<Option<T>, ParamsError> {
        let Some(value) = self.entries.remove(key) else {
            return Ok(None);
        };
        value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ParamsError::BadValue {
                key: key.to_string(),
                value,
            })
    }

    /// Every recognized key must have been taken by now.
    pub fn finish(self) -> Result<(), ParamsError> {
        match self.entries.into_iter().next() {
            Some((key, _)) => Err(ParamsError::UnknownKey { key }),
            None => Ok(()),
        }
    }
}
