// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::cell::RefCell;

use chrono::{NaiveDate, NaiveDateTime};
use moneydash::models::{
    Account, Category, Details, Division, Draft, Transaction, TransactionType,
};
use moneydash::store::{StoreError, TransactionStore};
use rust_decimal::Decimal;

pub fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn income(id: &str, amount: &str, category: Category, date: NaiveDateTime) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: dec(amount),
        details: Details::income(category, Division::Personal).unwrap(),
        description: None,
        created_at: date,
    }
}

pub fn expense(
    id: &str,
    amount: &str,
    category: Category,
    division: Division,
    date: NaiveDateTime,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: dec(amount),
        details: Details::expense(category, division).unwrap(),
        description: None,
        created_at: date,
    }
}

pub fn transfer(id: &str, amount: &str, date: NaiveDateTime) -> Transaction {
    Transaction {
        id: id.to_string(),
        amount: dec(amount),
        details: Details::transfer(Account::Bank, Account::Savings),
        description: None,
        created_at: date,
    }
}

struct Inner {
    transactions: Vec<Transaction>,
    next_id: u64,
    fail_next: Option<StoreError>,
}

/// Test double standing in for the remote store: the same contract, held in
/// memory, with injectable failures.
pub struct MemoryStore {
    inner: RefCell<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: RefCell::new(Inner {
                transactions: Vec::new(),
                next_id: 1,
                fail_next: None,
            }),
        }
    }

    pub fn with(transactions: Vec<Transaction>) -> Self {
        let store = MemoryStore::new();
        {
            let mut inner = store.inner.borrow_mut();
            inner.next_id = transactions.len() as u64 + 1;
            inner.transactions = transactions;
        }
        store
    }

    pub fn fail_next(&self, err: StoreError) {
        self.inner.borrow_mut().fail_next = Some(err);
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().transactions.len()
    }

    fn take_failure(&self) -> Option<StoreError> {
        self.inner.borrow_mut().fail_next.take()
    }

    fn materialize(&self, id: String, draft: &Draft) -> Result<Transaction, StoreError> {
        if draft.amount <= Decimal::ZERO {
            return Err(StoreError::Validation("amount must be positive".into()));
        }
        let details = match draft.kind {
            TransactionType::Income => Details::income(draft.category, draft.division)
                .map_err(|e| StoreError::Validation(e.to_string()))?,
            TransactionType::Expense => Details::expense(draft.category, draft.division)
                .map_err(|e| StoreError::Validation(e.to_string()))?,
            TransactionType::Transfer => {
                Details::transfer(draft.from_account, draft.to_account)
            }
        };
        Ok(Transaction {
            id,
            amount: draft.amount,
            details,
            description: if draft.description.is_empty() {
                None
            } else {
                Some(draft.description.clone())
            },
            created_at: draft.created_at.and_hms_opt(0, 0, 0).unwrap(),
        })
    }
}

impl TransactionStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<Transaction>, StoreError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self.inner.borrow().transactions.clone())
    }

    fn list_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, StoreError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        Ok(self
            .inner
            .borrow()
            .transactions
            .iter()
            .filter(|t| {
                let d = t.created_at.date();
                d >= start && d <= end
            })
            .cloned()
            .collect())
    }

    fn create(&self, draft: &Draft) -> Result<Transaction, StoreError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id.to_string();
            inner.next_id += 1;
            id
        };
        let tx = self.materialize(id, draft)?;
        self.inner.borrow_mut().transactions.push(tx.clone());
        Ok(tx)
    }

    fn update(&self, id: &str, draft: &Draft) -> Result<Transaction, StoreError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let tx = self.materialize(id.to_string(), draft)?;
        let mut inner = self.inner.borrow_mut();
        let slot = inner
            .transactions
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        *slot = tx.clone();
        Ok(tx)
    }

    fn remove(&self, id: &str) -> Result<(), StoreError> {
        if let Some(err) = self.take_failure() {
            return Err(err);
        }
        let mut inner = self.inner.borrow_mut();
        let pos = inner
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.transactions.remove(pos);
        Ok(())
    }
}
