// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;

use crate::models::{Transaction, TransactionType};

/// Analytics granularity selected on the dashboard. The timeframe changes
/// what a bucket *means*, not just its key: MONTHLY is an expense-by-category
/// breakdown, WEEKLY and YEARLY are inflow-vs-outflow trend views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Timeframe {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Weekly => "WEEKLY",
            Timeframe::Monthly => "MONTHLY",
            Timeframe::Yearly => "YEARLY",
        }
    }
}

impl FromStr for Timeframe {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_uppercase().as_str() {
            "WEEKLY" => Ok(Timeframe::Weekly),
            "MONTHLY" => Ok(Timeframe::Monthly),
            "YEARLY" => Ok(Timeframe::Yearly),
            other => Err(anyhow::anyhow!(
                "Invalid timeframe '{}', expected WEEKLY|MONTHLY|YEARLY",
                other
            )),
        }
    }
}

/// Derived (label, amount) pair for charting. Never persisted; rebuilt from
/// scratch on every recompute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub amount: Decimal,
}

/// Buckets a collection according to the timeframe.
///
/// - MONTHLY: one bucket per expense category; income and transfers are
///   excluded entirely.
/// - WEEKLY: one bucket per `(day-of-month, type)` pair, every type counted.
/// - YEARLY: one bucket per `(month, type)` pair, every type counted.
///
/// Buckets appear in the order their key is first encountered while
/// scanning the input, not sorted. Empty input yields an empty series.
pub fn aggregate(transactions: &[Transaction], timeframe: Timeframe) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for tx in transactions {
        let label = match timeframe {
            Timeframe::Monthly => {
                if tx.transaction_type() != TransactionType::Expense {
                    continue;
                }
                tx.category().to_string()
            }
            Timeframe::Weekly => {
                format!("Day {} ({})", tx.created_at.day(), tx.transaction_type())
            }
            Timeframe::Yearly => {
                format!(
                    "{} ({})",
                    tx.created_at.format("%b"),
                    tx.transaction_type()
                )
            }
        };

        match index.get(&label) {
            Some(&i) => buckets[i].amount += tx.amount,
            None => {
                index.insert(label.clone(), buckets.len());
                buckets.push(Bucket {
                    label,
                    amount: tx.amount,
                });
            }
        }
    }

    buckets
}

/// Scalar totals for the summary cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
    /// Spending as a percentage of income; zero when there is no income.
    pub spend_ratio: Decimal,
}

/// Income, expense, balance and spend ratio over the given collection.
/// Transfers are balance-neutral and contribute to neither side. The caller
/// chooses whether to pass the filtered or unfiltered set; the dashboard
/// always summarizes the unfiltered fetch.
pub fn summarize(transactions: &[Transaction]) -> Summary {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;

    for tx in transactions {
        match tx.transaction_type() {
            TransactionType::Income => income += tx.amount,
            TransactionType::Expense => expense += tx.amount,
            TransactionType::Transfer => {}
        }
    }

    let spend_ratio = if income > Decimal::ZERO {
        (expense / income) * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    Summary {
        income,
        expense,
        balance: income - expense,
        spend_ratio,
    }
}
