// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

/// Legislative session identifier.
///
/// Open States lists sessions as strings (`"85"`, `"851"`) but some payloads
/// carry them as bare integers; both decode to the same value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Session(String);

impl Session {
    pub fn new(session: impl Into<String>) -> Self {
        Self(session.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Session {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u32> for Session {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl<'de> Deserialize<'de> for Session {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Session(s),
            Raw::Number(n) => Session(n.to_string()),
        })
    }
}

/// Entry of the bill search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSummary {
    pub bill_id: String,
    pub title: String,
    pub session: Session,
    #[serde(default)]
    pub subjects: Vec<String>,
}

/// Full bill record including action dates and roll-call votes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillDetail {
    pub bill_id: String,
    pub title: String,
    pub session: Session,
    #[serde(default)]
    pub subjects: Vec<String>,
    /// Action name (`first`, `passed_lower`, `signed`, ...) to timestamp.
    #[serde(default)]
    pub action_dates: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub votes: Vec<Vote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub date: String,
    pub yes_count: u32,
    pub no_count: u32,
    #[serde(default)]
    pub other_count: u32,
    pub chamber: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
}

static BILL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z]+)\s*-?\s*([0-9]+)\s*$").unwrap());

/// Normalize user input like `hb1`, `HB-1` or `hb 1` to the Open States form `HB 1`.
///
/// Anything that does not look like `<letters><digits>` is returned unchanged.
pub fn normalize_bill_id(input: &str) -> String {
    match BILL_ID.captures(input) {
        Some(caps) => format!("{} {}", caps[1].to_uppercase(), &caps[2]),
        None => input.to_string(),
    }
}
