use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Free-form string settings for one external service (`[django]`,
/// `[rabbitmq]`, `[redis]`). Keys are lower-case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvSection {
    values: BTreeMap<String, String>,
}

impl EnvSection {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_ascii_lowercase()).map(String::as_str)
    }

    /// Parses a value; a present but unparsable value is an error.
    pub fn get_parsed<T>(&self, key: &str) -> ConfigResult<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(key)
            .map(|raw| {
                raw.parse::<T>()
                    .map_err(|err| ConfigError::invalid(key, format!("`{raw}`: {err}")))
            })
            .transpose()
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_ascii_lowercase(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let mut section = EnvSection::default();
        section.set("HOST", "localhost");
        assert_eq!(section.get("host"), Some("localhost"));
        assert_eq!(section.get("Host"), Some("localhost"));
    }

    #[test]
    fn get_parsed_reports_bad_values() {
        let mut section = EnvSection::default();
        section.set("port", "not-a-port");
        let err = section.get_parsed::<u16>("port").unwrap_err();
        assert!(err.to_string().contains("port"));
        assert_eq!(section.get_parsed::<u16>("missing").unwrap(), None);
    }
}
