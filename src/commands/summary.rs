// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::dashboard::Dashboard;
use crate::store::TransactionStore;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle<S: TransactionStore>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    dash.refresh()?;

    let s = dash.summary();
    if !maybe_print_json(json_flag, jsonl_flag, &s)? {
        let rows = vec![vec![
            fmt_amount(&s.income),
            fmt_amount(&s.expense),
            fmt_amount(&s.balance),
            format!("{:.1}%", s.spend_ratio.round_dp(1)),
        ]];
        println!(
            "{}",
            pretty_table(&["Income", "Expense", "Balance", "Spend Ratio"], rows)
        );
    }
    Ok(())
}
