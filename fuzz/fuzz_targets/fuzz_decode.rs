// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

#![no_main]

use influencetx::domain::{BillDetail, Legislator, display_date, normalize_bill_id};
use influencetx::services::openstates::decode;
use influencetx::services::pages::Pages;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(Some(bill)) = decode::<BillDetail>(body) {
        let _ = Pages::bill_detail(&bill);
    }
    if let Ok(Some(leg)) = decode::<Legislator>(body) {
        let _ = Pages::legislator_detail(&leg);
    }
    let _ = display_date(body);
    let _ = normalize_bill_id(body);
});
