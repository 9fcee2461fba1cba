// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// A legislator record as served by Open States.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legislator {
    pub leg_id: String,
    pub full_name: String,
    pub district: String,
    pub party: String,
    pub chamber: String,

    #[serde(default = "default_active")]
    pub active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

fn default_active() -> bool {
    true
}

impl Legislator {
    /// Human label for the chamber code (`upper`/`lower`).
    pub fn chamber_label(&self) -> &str {
        chamber_label(&self.chamber)
    }
}

/// Texas names its chambers; Open States uses `upper` and `lower`.
pub fn chamber_label(chamber: &str) -> &str {
    match chamber {
        "upper" => "Senate",
        "lower" => "House",
        other => other,
    }
}
