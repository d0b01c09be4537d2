//! `setoption` handling.
//!
//! No option changes engine behavior yet. Pairs are recorded in arrival
//! order so a searcher can pick them up later.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options received through `setoption`, latest value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendingOptions {
    entries: Vec<(String, Option<String>)>,
}

impl PendingOptions {
    #[must_use]
    pub fn new() -> Self {
        PendingOptions::default()
    }

    /// Record an option. Names compare case-insensitively, as UCI requires.
    pub fn set(&mut self, name: &str, value: Option<&str>) {
        let value = value.map(str::to_string);
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    /// Value recorded for `name`. `Some(None)` means the option was set
    /// without a value (a button).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

#[must_use]
pub fn parse_setoption<S: AsRef<str>>(parts: &[S]) -> Option<(String, Option<String>)> {
    if parts.first().map(AsRef::as_ref) != Some("setoption") {
        return None;
    }

    let mut name_parts: Vec<&str> = Vec::new();
    let mut value_parts: Vec<&str> = Vec::new();
    let mut mode = "";

    for part in parts.iter().skip(1).map(AsRef::as_ref) {
        match part {
            "name" if mode.is_empty() => mode = "name",
            "value" if mode == "name" => mode = "value",
            _ => match mode {
                "name" => name_parts.push(part),
                "value" => value_parts.push(part),
                _ => {}
            },
        }
    }

    if name_parts.is_empty() {
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };

    Some((name, value))
}
