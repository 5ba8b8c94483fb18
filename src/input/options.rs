/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Free-form FEFF directives written above the POTENTIALS card

use super::errors::{InputError, Result};
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Keyword/value directives such as `RMAX 6.0` or `HOLE 1 1.0`
///
/// Entries are kept sorted by keyword so the generated file does not depend
/// on insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeffOptions(BTreeMap<String, String>);

impl FeffOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a directive, replacing any previous value for the same keyword
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.0.insert(key.into(), value.to_string())
    }

    /// Builder-style variant of [`FeffOptions::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Set the HOLE directive for an absorption edge with the given S0^2
    pub fn set_hole(&mut self, edge: Edge, s02: f64) {
        self.insert("HOLE", format!("{} {}", edge.hole_number(), s02));
    }

    /// Check that every directive fits on one `KEY VALUE` line
    pub fn validate(&self) -> Result<()> {
        for (key, value) in &self.0 {
            if key.is_empty() {
                return Err(InputError::InvalidOption {
                    key: key.clone(),
                    reason: "keyword is empty".to_string(),
                });
            }
            if key.chars().any(char::is_whitespace) {
                return Err(InputError::InvalidOption {
                    key: key.clone(),
                    reason: "keyword contains whitespace".to_string(),
                });
            }
            if value.contains(['\n', '\r']) {
                return Err(InputError::InvalidOption {
                    key: key.clone(),
                    reason: "value spans more than one line".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for FeffOptions {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut options = Self::new();
        for (key, value) in iter {
            options.insert(key, value);
        }
        options
    }
}

impl<'a> IntoIterator for &'a FeffOptions {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Absorption edge of the core hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    K,
    L1,
    L2,
    L3,
}

impl Edge {
    /// FEFF hole code used on the HOLE card
    pub fn hole_number(&self) -> i32 {
        match self {
            Edge::K => 1,
            Edge::L1 => 2,
            Edge::L2 => 3,
            Edge::L3 => 4,
        }
    }
}

impl FromStr for Edge {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "k" => Ok(Edge::K),
            "l1" | "li" => Ok(Edge::L1),
            "l2" | "lii" => Ok(Edge::L2),
            "l3" | "liii" => Ok(Edge::L3),
            _ => Err(InputError::UnknownEdge(s.to_string())),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Edge::K => "K",
            Edge::L1 => "L1",
            Edge::L2 => "L2",
            Edge::L3 => "L3",
        };
        write!(f, "{}", name)
    }
}
