// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::dashboard::Dashboard;
use crate::store::TransactionStore;
use crate::utils::fmt_amount;

pub fn handle<S: TransactionStore>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    dash.refresh()?;
    let tx = dash
        .find(id)
        .cloned()
        .with_context(|| format!("Transaction '{}' not found", id))?;

    // Two-step confirmation: show the record, only act on --yes.
    if !sub.get_flag("yes") {
        println!(
            "Would delete {} {} ({}) from {}; re-run with --yes to confirm",
            tx.transaction_type(),
            fmt_amount(&tx.amount),
            tx.category(),
            tx.created_at.date()
        );
        return Ok(());
    }

    dash.remove(id)?;
    println!("Record deleted (id: {})", id);
    Ok(())
}
