// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::{BillDetail, BillSummary, Legislator, chamber_label, display_date};
use crate::services::openstates::REGISTER_URL;
use crate::services::views::Route;

/// Plain-text renderers for each route. Output carries no styling so it can be
/// piped and grepped.
pub struct Pages;

impl Pages {
    pub fn index() -> String {
        let mut output = String::from("Open States: Texas Legislature\n\n");
        output.push_str(&format!(
            "  Legislators  {}\n",
            Route::LegislatorList.command()
        ));
        output.push_str(&format!("  Bills        {}\n", Route::BillList.command()));
        output
    }

    pub fn api_key_required() -> String {
        format!(
            r#"An Open States API key is required.

Register for a free key at {REGISTER_URL}
then make it available in one of these ways:

  export OPENSTATES_API_KEY=<your key>
  influencetx set-key
  api_key = "<your key>" in the file created by `influencetx init`
"#
        )
    }

    pub fn legislator_list(legislators: &[Legislator]) -> String {
        if legislators.is_empty() {
            return "No legislators found.\n".into();
        }

        let mut output = format!("Legislators ({})\n\n", legislators.len());
        for leg in legislators {
            output.push_str(&format!("{}\n", leg.full_name));
            output.push_str(&format!(
                "  {} district {}, {}\n",
                leg.chamber_label(),
                leg.district,
                leg.party
            ));
            output.push_str(&format!("  id: {}\n", leg.leg_id));
            output.push_str(&format!(
                "  {}\n",
                Route::LegislatorDetail {
                    leg_id: leg.leg_id.clone()
                }
                .command()
            ));
        }
        output
    }

    pub fn legislator_detail(leg: &Legislator) -> String {
        let mut output = format!("{}\n\n", leg.full_name);
        output.push_str(&format!("  Chamber:  {}\n", leg.chamber_label()));
        output.push_str(&format!("  District: {}\n", leg.district));
        output.push_str(&format!("  Party:    {}\n", leg.party));
        if !leg.active {
            output.push_str("  Status:   inactive\n");
        }
        if let Some(ref url) = leg.url {
            output.push_str(&format!("  Website:  {url}\n"));
        }
        output
    }

    pub fn bill_list(bills: &[BillSummary]) -> String {
        if bills.is_empty() {
            return "No bills found.\n".into();
        }

        let mut output = format!("Bills ({})\n\n", bills.len());
        for bill in bills {
            output.push_str(&format!("{} (session {})\n", bill.bill_id, bill.session));
            output.push_str(&format!("  {}\n", bill.title));
            if !bill.subjects.is_empty() {
                output.push_str(&format!("  Subjects: {}\n", bill.subjects.join(", ")));
            }
            output.push_str(&format!(
                "  {}\n",
                Route::BillDetail {
                    session: bill.session.clone(),
                    bill_id: bill.bill_id.clone(),
                }
                .command()
            ));
        }
        output
    }

    pub fn bill_detail(bill: &BillDetail) -> String {
        let mut output = format!("{} (session {})\n\n", bill.bill_id, bill.session);
        output.push_str(&format!("{}\n", bill.title));

        if !bill.subjects.is_empty() {
            output.push_str("\nSubjects\n");
            for subject in &bill.subjects {
                output.push_str(&format!("  - {subject}\n"));
            }
        }

        // Chronological; same-timestamp actions keep their name order
        let mut actions: Vec<(&String, &str)> = bill
            .action_dates
            .iter()
            .filter_map(|(action, ts)| ts.as_deref().map(|ts| (action, ts.trim())))
            .collect();
        actions.sort_by_key(|&(_, ts)| ts);
        if !actions.is_empty() {
            output.push_str("\nActions\n");
            for (action, ts) in actions {
                output.push_str(&format!(
                    "  {}  {}\n",
                    display_date(ts),
                    action.replace('_', " ")
                ));
            }
        }

        if !bill.votes.is_empty() {
            output.push_str("\nVotes\n");
            for vote in &bill.votes {
                output.push_str(&format!(
                    "  {}  {}  yes {} / no {}",
                    display_date(&vote.date),
                    chamber_label(&vote.chamber),
                    vote.yes_count,
                    vote.no_count
                ));
                if vote.other_count > 0 {
                    output.push_str(&format!(" / other {}", vote.other_count));
                }
                match vote.passed {
                    Some(true) => output.push_str("  passed"),
                    Some(false) => output.push_str("  failed"),
                    None => {}
                }
                output.push('\n');
                if let Some(ref motion) = vote.motion {
                    output.push_str(&format!("    {motion}\n"));
                }
            }
        }

        output
    }
}
