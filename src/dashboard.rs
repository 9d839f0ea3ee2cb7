// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::analytics::{Bucket, Summary, Timeframe, aggregate, summarize};
use crate::filter::{FilterCriteria, apply_filters};
use crate::form::TransactionForm;
use crate::models::{Category, Division, Transaction};
use crate::store::{StoreError, TransactionStore};

/// Composes filtering, aggregation and summary over the latest fetched
/// collection and coordinates with the store.
///
/// Fetches are generation-guarded: `begin_fetch` hands out a token and
/// `apply_fetch` ignores any result whose token has been superseded, so an
/// out-of-date response can never overwrite newer state. Mutations go
/// through the store and then invalidate coarsely with a full refetch.
pub struct Dashboard<S> {
    store: S,
    transactions: Vec<Transaction>,
    criteria: FilterCriteria,
    timeframe: Timeframe,
    generation: u64,
}

impl<S: TransactionStore> Dashboard<S> {
    pub fn new(store: S) -> Self {
        Dashboard {
            store,
            transactions: Vec::new(),
            criteria: FilterCriteria::default(),
            timeframe: Timeframe::default(),
            generation: 0,
        }
    }

    /// Starts a fetch round, invalidating any round still in flight.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Applies a fetch result. A stale token is a no-op; a failure leaves
    /// the previously held collection untouched.
    pub fn apply_fetch(
        &mut self,
        token: u64,
        result: Result<Vec<Transaction>, StoreError>,
    ) -> Result<(), StoreError> {
        if token != self.generation {
            return Ok(());
        }
        self.transactions = result?;
        Ok(())
    }

    fn fetch(&self) -> Result<Vec<Transaction>, StoreError> {
        match self.criteria.date_range() {
            Some((start, end)) => self.store.list_by_date_range(start, end),
            None => self.store.list_all(),
        }
    }

    /// Replaces the held collection wholesale: date-range-filtered when both
    /// bounds are set, otherwise the full ledger.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        let token = self.begin_fetch();
        let result = self.fetch();
        self.apply_fetch(token, result)
    }

    /// Division/category/timeframe changes only recompute derived views;
    /// no round-trip.
    pub fn set_division(&mut self, division: Option<Division>) {
        self.criteria.division = division;
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.criteria.category = category;
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    /// Changing the date range changes what the store is asked for, so it
    /// refetches immediately.
    pub fn set_date_range(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<(), StoreError> {
        self.criteria.date_from = from;
        self.criteria.date_to = to;
        self.refresh()
    }

    /// Back to the all-inclusive criteria and the MONTHLY default. Only
    /// refetches when a date range was active, since dropping it widens the
    /// fetch.
    pub fn reset_filters(&mut self) -> Result<(), StoreError> {
        let had_range = self.criteria.date_range().is_some();
        self.criteria = FilterCriteria::default();
        self.timeframe = Timeframe::default();
        if had_range { self.refresh() } else { Ok(()) }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// The unfiltered held collection.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn filtered(&self) -> Vec<Transaction> {
        apply_filters(&self.transactions, &self.criteria)
    }

    pub fn find(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Summary cards always show true totals over the unfiltered fetch,
    /// regardless of active filters.
    pub fn summary(&self) -> Summary {
        summarize(&self.transactions)
    }

    /// Chart series over the filtered collection, per the active timeframe.
    pub fn chart_data(&self) -> Vec<Bucket> {
        aggregate(&self.filtered(), self.timeframe)
    }

    /// Submits a form draft (create or update per its seed) and refetches on
    /// success. On failure nothing local changes and the draft stays intact.
    pub fn submit(&mut self, form: &TransactionForm) -> Result<Transaction, StoreError> {
        let tx = form.submit(&self.store)?;
        self.refresh()?;
        Ok(tx)
    }

    /// Deletes a record and refetches. A failed delete leaves the record and
    /// the held collection intact.
    pub fn remove(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.remove(id)?;
        self.refresh()
    }
}
