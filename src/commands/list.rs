// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::dashboard::Dashboard;
use crate::models::Transaction;
use crate::policy::is_editable;
use crate::store::TransactionStore;
use crate::utils::{fmt_amount, maybe_print_json, parse_date, pretty_table};

/// Pushes the shared --division/--category/--from/--to args into the
/// dashboard criteria and triggers the fetch (range-filtered when both date
/// bounds are given).
pub fn apply_criteria<S: TransactionStore>(
    dash: &mut Dashboard<S>,
    sub: &clap::ArgMatches,
) -> Result<()> {
    if let Some(d) = sub.get_one::<String>("division") {
        dash.set_division(Some(d.parse()?));
    }
    if let Some(c) = sub.get_one::<String>("category") {
        dash.set_category(Some(c.parse()?));
    }
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    dash.set_date_range(from, to)?;
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub division: String,
    pub amount: String,
    pub accounts: String,
    pub description: String,
    pub editable: bool,
}

pub fn rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    let now = Utc::now().naive_utc();
    transactions
        .iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.created_at.date().to_string(),
            r#type: t.transaction_type().to_string(),
            category: t.category().to_string(),
            division: t
                .division()
                .map(|d| d.to_string())
                .unwrap_or_default(),
            amount: fmt_amount(&t.amount),
            accounts: t
                .details
                .accounts()
                .map(|(from, to)| format!("{} -> {}", from, to))
                .unwrap_or_default(),
            description: t.description.clone().unwrap_or_default(),
            editable: is_editable(t.created_at, now),
        })
        .collect()
}

pub fn handle<S: TransactionStore>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    apply_criteria(dash, sub)?;

    let data = rows(&dash.filtered());
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let table_rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.division.clone(),
                    r.amount.clone(),
                    r.accounts.clone(),
                    r.description.clone(),
                    if r.editable { "yes".into() } else { "locked".into() },
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "ID", "Date", "Type", "Category", "Division", "Amount", "Accounts",
                    "Description", "Editable"
                ],
                table_rows,
            )
        );
    }
    Ok(())
}
