// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Account, Category, Division, Draft, Transaction, TransactionType,
};
use crate::store::{StoreError, TransactionStore};

/// Which field pair the form currently presents. Transfers swap
/// category/division out for the two account pickers; the hidden pair stays
/// in the draft, just not user-editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSet {
    CategoryDivision,
    Accounts,
}

/// In-progress draft of a create or edit. Holds the raw field values the
/// way the user typed them (amount stays a string until submission) and
/// enforces the type/category transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionForm {
    kind: TransactionType,
    category: Category,
    amount: String,
    division: Division,
    description: String,
    from_account: Account,
    to_account: Account,
    created_at: NaiveDate,
    editing: Option<String>,
}

impl TransactionForm {
    /// Fresh draft: expense, FOOD, PERSONAL, BANK -> CASH, dated today,
    /// amount and description empty.
    pub fn new(today: NaiveDate) -> Self {
        TransactionForm {
            kind: TransactionType::Expense,
            category: Category::Food,
            amount: String::new(),
            division: Division::Personal,
            description: String::new(),
            from_account: Account::Bank,
            to_account: Account::Cash,
            created_at: today,
            editing: None,
        }
    }

    /// Draft seeded from an existing record; submission becomes an update.
    pub fn edit(seed: &Transaction) -> Self {
        let mut form = TransactionForm::new(seed.created_at.date());
        form.kind = seed.transaction_type();
        form.category = seed.category();
        form.amount = seed.amount.to_string();
        if let Some(division) = seed.division() {
            form.division = division;
        }
        if let Some((from, to)) = seed.details.accounts() {
            form.from_account = from;
            form.to_account = to;
        }
        form.description = seed.description.clone().unwrap_or_default();
        form.editing = Some(seed.id.clone());
        form
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> NaiveDate {
        self.created_at
    }

    pub fn accounts(&self) -> (Account, Account) {
        (self.from_account, self.to_account)
    }

    pub fn division(&self) -> Division {
        self.division
    }

    pub fn active_fields(&self) -> FieldSet {
        match self.kind {
            TransactionType::Transfer => FieldSet::Accounts,
            _ => FieldSet::CategoryDivision,
        }
    }

    /// Switching the type resets the category to that type's default and
    /// swaps the active field set. Everything else is preserved.
    pub fn set_type(&mut self, kind: TransactionType) {
        self.kind = kind;
        self.category = kind.default_category();
    }

    /// Category is only user-editable for income/expense and must come from
    /// the selected type's set.
    pub fn set_category(&mut self, category: Category) -> Result<(), StoreError> {
        if self.kind == TransactionType::Transfer {
            return Err(StoreError::Validation(
                "category is fixed while type is TRANSFER".into(),
            ));
        }
        if !category.is_allowed_for(self.kind) {
            return Err(StoreError::Validation(format!(
                "category '{}' is not valid for type {}",
                category, self.kind
            )));
        }
        self.category = category;
        Ok(())
    }

    pub fn set_division(&mut self, division: Division) {
        self.division = division;
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_from_account(&mut self, account: Account) {
        self.from_account = account;
    }

    pub fn set_to_account(&mut self, account: Account) {
        self.to_account = account;
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.created_at = date;
    }

    /// Back to the fresh-draft defaults. An edit seed is kept so the form
    /// still targets the same record.
    pub fn reset(&mut self, today: NaiveDate) {
        let editing = self.editing.take();
        *self = TransactionForm::new(today);
        self.editing = editing;
    }

    /// Client-side validation, then the complete wire payload. Rejects what
    /// the store would reject anyway: a non-positive or unparseable amount,
    /// or a category outside the type's set.
    pub fn payload(&self) -> Result<Draft, StoreError> {
        let amount = self
            .amount
            .trim()
            .parse::<Decimal>()
            .map_err(|_| StoreError::Validation(format!("invalid amount '{}'", self.amount)))?;
        if amount <= Decimal::ZERO {
            return Err(StoreError::Validation(
                "amount must be greater than zero".into(),
            ));
        }
        if !self.category.is_allowed_for(self.kind) {
            return Err(StoreError::Validation(format!(
                "category '{}' is not valid for type {}",
                self.category, self.kind
            )));
        }
        Ok(Draft {
            kind: self.kind,
            category: self.category,
            amount,
            division: self.division,
            description: self.description.clone(),
            from_account: self.from_account,
            to_account: self.to_account,
            created_at: self.created_at,
        })
    }

    /// Create-or-update depending on whether the draft was seeded. On
    /// failure the draft is left untouched for retry; the caller triggers
    /// the collection refetch on success.
    pub fn submit<S: TransactionStore>(&self, store: &S) -> Result<Transaction, StoreError> {
        let draft = self.payload()?;
        match &self.editing {
            Some(id) => store.update(id, &draft),
            None => store.create(&draft),
        }
    }
}
