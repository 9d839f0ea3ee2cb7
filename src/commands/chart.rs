// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::list::apply_criteria;
use crate::dashboard::Dashboard;
use crate::store::TransactionStore;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn handle<S: TransactionStore>(dash: &mut Dashboard<S>, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if let Some(tf) = sub.get_one::<String>("timeframe") {
        dash.set_timeframe(tf.parse()?);
    }
    apply_criteria(dash, sub)?;

    let mut buckets = dash.chart_data();
    if let Some(&top) = sub.get_one::<usize>("top") {
        buckets.truncate(top);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &buckets)? {
        if buckets.is_empty() {
            println!(
                "No analytical data for the {} timeframe.",
                dash.timeframe().as_str()
            );
            return Ok(());
        }
        let rows: Vec<Vec<String>> = buckets
            .iter()
            .map(|b| vec![b.label.clone(), fmt_amount(&b.amount)])
            .collect();
        println!("{}", pretty_table(&["Bucket", "Amount"], rows));
    }
    Ok(())
}
