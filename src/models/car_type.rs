//! Car type filtering.
//!
//! Car types are short AAR-style tags ("HT", "HTC", "TM"). A filter is a
//! comma-separated pattern list; `HT*` matches every type starting with
//! `HT`, `TM` matches exactly `TM`. An empty filter matches everything.

use serde::{Deserialize, Serialize};

/// Pattern list selecting which car types a component services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CarTypeFilter {
    patterns: Vec<String>,
}

impl CarTypeFilter {
    /// Parses a comma-separated pattern list.
    pub fn parse(text: &str) -> Self {
        let patterns = text
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();
        Self { patterns }
    }

    /// A filter accepting every car type.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether `car_type` is accepted.
    pub fn matches(&self, car_type: &str) -> bool {
        if self.patterns.is_empty() {
            return true;
        }
        self.patterns.iter().any(|pattern| match pattern.strip_suffix('*') {
            Some(prefix) => car_type.starts_with(prefix),
            None => pattern == car_type,
        })
    }
}

impl From<String> for CarTypeFilter {
    fn from(text: String) -> Self {
        Self::parse(&text)
    }
}

impl From<&str> for CarTypeFilter {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<CarTypeFilter> for String {
    fn from(filter: CarTypeFilter) -> Self {
        filter.patterns.join(",")
    }
}
