// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use serde_json::json;

use crate::dashboard::Dashboard;
use crate::models::Transaction;
use crate::store::TransactionStore;
use crate::utils::parse_date;

pub fn handle<S: TransactionStore>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;

    dash.set_date_range(from, to)?;
    write_export(dash.transactions(), &fmt, out)?;
    println!("Exported {} transactions to {}", dash.transactions().len(), out);
    Ok(())
}

pub fn write_export(transactions: &[Transaction], fmt: &str, out: &str) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id",
                "date",
                "type",
                "category",
                "division",
                "amount",
                "fromAccount",
                "toAccount",
                "description",
            ])?;
            for t in transactions {
                let (from_acc, to_acc) = t
                    .details
                    .accounts()
                    .map(|(f, s)| (f.to_string(), s.to_string()))
                    .unwrap_or_default();
                wtr.write_record([
                    t.id.clone(),
                    t.created_at.date().to_string(),
                    t.transaction_type().to_string(),
                    t.category().to_string(),
                    t.division().map(|d| d.to_string()).unwrap_or_default(),
                    t.amount.to_string(),
                    from_acc,
                    to_acc,
                    t.description.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for t in transactions {
                let (from_acc, to_acc) = match t.details.accounts() {
                    Some((f, s)) => (Some(f.to_string()), Some(s.to_string())),
                    None => (None, None),
                };
                items.push(json!({
                    "id": t.id,
                    "date": t.created_at.date().to_string(),
                    "type": t.transaction_type().to_string(),
                    "category": t.category().to_string(),
                    "division": t.division().map(|d| d.to_string()),
                    "amount": t.amount.to_string(),
                    "fromAccount": from_acc,
                    "toAccount": to_acc,
                    "description": t.description,
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            bail!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    Ok(())
}
