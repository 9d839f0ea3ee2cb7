// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneydash::analytics::Timeframe;
use moneydash::dashboard::Dashboard;
use moneydash::form::TransactionForm;
use moneydash::models::{Category, Division};
use moneydash::store::StoreError;

mod common;
use common::{MemoryStore, dec, dt, expense, income, transfer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded() -> Dashboard<MemoryStore> {
    let store = MemoryStore::with(vec![
        income("1", "5000", Category::Salary, dt(2024, 1, 5)),
        expense("2", "1200", Category::Food, Division::Personal, dt(2024, 1, 6)),
        expense("3", "300", Category::Fuel, Division::Office, dt(2024, 2, 7)),
        transfer("4", "900", dt(2024, 2, 8)),
    ]);
    Dashboard::new(store)
}

#[test]
fn refresh_replaces_collection_wholesale() {
    let mut dash = seeded();
    assert!(dash.transactions().is_empty());
    dash.refresh().unwrap();
    assert_eq!(dash.transactions().len(), 4);
}

#[test]
fn stale_fetch_response_never_overwrites_newer_state() {
    let mut dash = Dashboard::new(MemoryStore::new());

    // First fetch issued for January, then superseded by one for February.
    let january_token = dash.begin_fetch();
    let february_token = dash.begin_fetch();

    let february = vec![expense(
        "2",
        "80",
        Category::Food,
        Division::Personal,
        dt(2024, 2, 10),
    )];
    dash.apply_fetch(february_token, Ok(february.clone())).unwrap();
    assert_eq!(dash.transactions(), february.as_slice());

    // The stale January response arrives late and must be discarded.
    let january = vec![income("1", "999", Category::Salary, dt(2024, 1, 15))];
    dash.apply_fetch(january_token, Ok(january)).unwrap();
    assert_eq!(dash.transactions(), february.as_slice());
}

#[test]
fn stale_fetch_error_is_also_ignored() {
    let mut dash = seeded();
    let old_token = dash.begin_fetch();
    dash.refresh().unwrap();
    dash.apply_fetch(old_token, Err(StoreError::Transport("late failure".into())))
        .unwrap();
    assert_eq!(dash.transactions().len(), 4);
}

#[test]
fn fetch_failure_retains_previous_collection() {
    let mut dash = seeded();
    dash.refresh().unwrap();

    dash_store(&dash).fail_next(StoreError::Transport("store unreachable".into()));
    assert!(dash.refresh().is_err());
    assert_eq!(dash.transactions().len(), 4, "prior collection kept");
}

fn dash_store(dash: &Dashboard<MemoryStore>) -> &MemoryStore {
    dash.store()
}

#[test]
fn date_range_fetch_asks_store_for_prefiltered_collection() {
    let mut dash = seeded();
    dash.set_date_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)))
        .unwrap();
    let ids: Vec<&str> = dash.transactions().iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    // Dropping one bound falls back to the full fetch.
    dash.set_date_range(Some(date(2024, 1, 1)), None).unwrap();
    assert_eq!(dash.transactions().len(), 4);
}

#[test]
fn division_category_timeframe_changes_do_not_refetch() {
    let mut dash = seeded();
    dash.refresh().unwrap();

    // A store failure armed now would make any further fetch blow up.
    dash_store(&dash).fail_next(StoreError::Transport("no more fetches".into()));
    dash.set_division(Some(Division::Personal));
    dash.set_category(Some(Category::Food));
    dash.set_timeframe(Timeframe::Yearly);
    assert_eq!(dash.filtered().len(), 1);
    assert_eq!(dash.chart_data().len(), 1);
}

#[test]
fn summary_stays_unfiltered_while_chart_follows_filters() {
    let mut dash = seeded();
    dash.refresh().unwrap();
    dash.set_division(Some(Division::Office));

    // Chart reflects the filter: only the office fuel expense remains.
    let buckets = dash.chart_data();
    assert_eq!(buckets.len(), 1);
    assert_eq!(buckets[0].label, "FUEL");

    // Summary cards still show true totals.
    let s = dash.summary();
    assert_eq!(s.income, dec("5000"));
    assert_eq!(s.expense, dec("1500"));
}

#[test]
fn monthly_chart_excludes_income_and_transfers() {
    let mut dash = seeded();
    dash.refresh().unwrap();
    assert_eq!(dash.timeframe(), Timeframe::Monthly);
    let buckets = dash.chart_data();
    let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["FOOD", "FUEL"]);
}

#[test]
fn reset_filters_restores_identity_and_monthly() {
    let mut dash = seeded();
    dash.refresh().unwrap();
    dash.set_division(Some(Division::Office));
    dash.set_timeframe(Timeframe::Weekly);
    dash.reset_filters().unwrap();
    assert!(dash.criteria().is_identity());
    assert_eq!(dash.timeframe(), Timeframe::Monthly);
    assert_eq!(dash.filtered().len(), 4);
}

#[test]
fn reset_filters_refetches_when_a_date_range_was_active() {
    let mut dash = seeded();
    dash.set_date_range(Some(date(2024, 1, 1)), Some(date(2024, 1, 31)))
        .unwrap();
    assert_eq!(dash.transactions().len(), 2);
    dash.reset_filters().unwrap();
    assert_eq!(dash.transactions().len(), 4);
}

#[test]
fn successful_submit_triggers_full_refetch() {
    let mut dash = seeded();
    dash.refresh().unwrap();

    let mut form = TransactionForm::new(date(2024, 3, 1));
    form.set_amount("42");
    let tx = dash.submit(&form).unwrap();

    assert_eq!(dash.transactions().len(), 5);
    assert!(dash.find(&tx.id).is_some());
}

#[test]
fn failed_submit_leaves_collection_untouched() {
    let mut dash = seeded();
    dash.refresh().unwrap();

    dash_store(&dash).fail_next(StoreError::Validation("rejected".into()));
    let mut form = TransactionForm::new(date(2024, 3, 1));
    form.set_amount("42");
    assert!(dash.submit(&form).is_err());
    assert_eq!(dash.transactions().len(), 4);
}

#[test]
fn remove_refetches_and_missing_target_surfaces_not_found() {
    let mut dash = seeded();
    dash.refresh().unwrap();

    dash.remove("2").unwrap();
    assert_eq!(dash.transactions().len(), 3);
    assert!(dash.find("2").is_none());

    assert!(matches!(dash.remove("2"), Err(StoreError::NotFound)));
    assert_eq!(dash.transactions().len(), 3);
}
