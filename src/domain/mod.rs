// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

mod bill;
mod legislator;
mod metadata;
mod timestamp;

pub use bill::*;
pub use legislator::*;
pub use metadata::*;
pub use timestamp::*;
