// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::BTreeMap;
use std::sync::Mutex;

use influencetx::domain::{BillDetail, BillSummary, Legislator, Session, Vote};
use influencetx::error::Result;
use influencetx::services::openstates::OpenStatesApi;

/// Create a legislator with the required fields set
#[allow(dead_code)]
pub fn make_legislator(leg_id: &str, full_name: &str) -> Legislator {
    Legislator {
        leg_id: leg_id.to_string(),
        full_name: full_name.to_string(),
        district: "14".into(),
        party: "Democratic".into(),
        chamber: "upper".into(),
        active: true,
        url: None,
        photo_url: None,
    }
}

#[allow(dead_code)]
pub fn make_bill_summary(session: &str, bill_id: &str, title: &str) -> BillSummary {
    BillSummary {
        bill_id: bill_id.to_string(),
        title: title.to_string(),
        session: Session::from(session),
        subjects: vec!["Education".into()],
    }
}

/// Bill with one action date and one vote, timestamps in Open States' format
#[allow(dead_code)]
pub fn make_bill_detail(session: &str, bill_id: &str) -> BillDetail {
    let mut action_dates = BTreeMap::new();
    action_dates.insert("first".to_string(), Some("2017-01-10 14:32:07".to_string()));
    action_dates.insert("signed".to_string(), None);

    BillDetail {
        bill_id: bill_id.to_string(),
        title: "Relating to public school finance.".into(),
        session: Session::from(session),
        subjects: vec!["Education".into(), "Taxation".into()],
        action_dates,
        votes: vec![Vote {
            date: "2017-03-21 09:15:44".into(),
            yes_count: 118,
            no_count: 27,
            other_count: 0,
            chamber: "lower".into(),
            motion: Some("passage".into()),
            passed: Some(true),
        }],
    }
}

/// In-memory `OpenStatesApi` that records every call it receives
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeApi {
    pub api_key: bool,
    pub legislators: Vec<Legislator>,
    pub bills: Vec<BillSummary>,
    pub bill_details: Vec<BillDetail>,
    pub calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeApi {
    pub fn with_key() -> Self {
        Self {
            api_key: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl OpenStatesApi for FakeApi {
    fn has_api_key(&self) -> bool {
        self.api_key
    }

    async fn legislators(&self) -> Result<Vec<Legislator>> {
        self.record("legislators".into());
        Ok(self.legislators.clone())
    }

    async fn legislator(&self, leg_id: &str) -> Result<Option<Legislator>> {
        self.record(format!("legislator {leg_id}"));
        Ok(self.legislators.iter().find(|l| l.leg_id == leg_id).cloned())
    }

    async fn bills(&self) -> Result<Vec<BillSummary>> {
        self.record("bills".into());
        Ok(self.bills.clone())
    }

    async fn bill_detail(&self, session: &Session, bill_id: &str) -> Result<Option<BillDetail>> {
        self.record(format!("bill_detail {session} {bill_id}"));
        Ok(self
            .bill_details
            .iter()
            .find(|b| &b.session == session && b.bill_id == bill_id)
            .cloned())
    }
}
