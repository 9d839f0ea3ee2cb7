// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use crate::dashboard::Dashboard;
use crate::form::TransactionForm;
use crate::store::TransactionStore;
use crate::utils::{fmt_amount, parse_date};

pub fn handle<S: TransactionStore>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let mut form = TransactionForm::new(Utc::now().date_naive());

    if let Some(t) = sub.get_one::<String>("type") {
        form.set_type(t.parse()?);
    }
    if let Some(c) = sub.get_one::<String>("category") {
        form.set_category(c.parse()?)?;
    }
    if let Some(d) = sub.get_one::<String>("division") {
        form.set_division(d.parse()?);
    }
    if let Some(a) = sub.get_one::<String>("from-account") {
        form.set_from_account(a.parse()?);
    }
    if let Some(a) = sub.get_one::<String>("to-account") {
        form.set_to_account(a.parse()?);
    }
    if let Some(d) = sub.get_one::<String>("date") {
        form.set_date(parse_date(d)?);
    }
    if let Some(desc) = sub.get_one::<String>("description") {
        form.set_description(desc.clone());
    }
    form.set_amount(sub.get_one::<String>("amount").unwrap().clone());

    let tx = dash.submit(&form)?;
    println!(
        "Recorded {} {} on {} (id: {})",
        tx.transaction_type(),
        fmt_amount(&tx.amount),
        tx.created_at.date(),
        tx.id
    );
    Ok(())
}
