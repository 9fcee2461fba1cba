// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

/// Date part of an Open States timestamp.
///
/// Open States formats times as `YYYY-MM-DD HH:MM:SS`; ISO `T` separators are
/// accepted too. Input without a time part is returned trimmed.
pub fn display_date(timestamp: &str) -> &str {
    let trimmed = timestamp.trim();
    match trimmed.split_once([' ', 'T']) {
        Some((date, _)) => date,
        None => trimmed,
    }
}
