// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Income,
    Expense,
    Transfer,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "INCOME",
            TransactionType::Expense => "EXPENSE",
            TransactionType::Transfer => "TRANSFER",
        }
    }

    /// Category a form draft falls back to when this type is selected.
    pub fn default_category(&self) -> Category {
        match self {
            TransactionType::Income => Category::Salary,
            TransactionType::Expense => Category::Food,
            TransactionType::Transfer => Category::Transfer,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "INCOME" => Ok(TransactionType::Income),
            "EXPENSE" => Ok(TransactionType::Expense),
            "TRANSFER" => Ok(TransactionType::Transfer),
            other => Err(anyhow!(
                "Invalid type '{}', expected INCOME|EXPENSE|TRANSFER",
                other
            )),
        }
    }
}

/// One namespace for every category the store knows about. Which subset is
/// legal depends on the transaction type; see `allowed_for`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Salary,
    Rent,
    Dividend,
    Investment,
    Food,
    Fuel,
    Movie,
    Medical,
    Loan,
    Other,
    Transfer,
}

pub const INCOME_CATEGORIES: [Category; 5] = [
    Category::Salary,
    Category::Rent,
    Category::Dividend,
    Category::Investment,
    Category::Other,
];

pub const EXPENSE_CATEGORIES: [Category; 6] = [
    Category::Food,
    Category::Fuel,
    Category::Movie,
    Category::Medical,
    Category::Loan,
    Category::Other,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "SALARY",
            Category::Rent => "RENT",
            Category::Dividend => "DIVIDEND",
            Category::Investment => "INVESTMENT",
            Category::Food => "FOOD",
            Category::Fuel => "FUEL",
            Category::Movie => "MOVIE",
            Category::Medical => "MEDICAL",
            Category::Loan => "LOAN",
            Category::Other => "OTHER",
            Category::Transfer => "TRANSFER",
        }
    }

    pub fn allowed_for(kind: TransactionType) -> &'static [Category] {
        match kind {
            TransactionType::Income => &INCOME_CATEGORIES,
            TransactionType::Expense => &EXPENSE_CATEGORIES,
            TransactionType::Transfer => &[Category::Transfer],
        }
    }

    pub fn is_allowed_for(&self, kind: TransactionType) -> bool {
        Category::allowed_for(kind).contains(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "SALARY" => Ok(Category::Salary),
            "RENT" => Ok(Category::Rent),
            "DIVIDEND" => Ok(Category::Dividend),
            "INVESTMENT" => Ok(Category::Investment),
            "FOOD" => Ok(Category::Food),
            "FUEL" => Ok(Category::Fuel),
            "MOVIE" => Ok(Category::Movie),
            "MEDICAL" => Ok(Category::Medical),
            "LOAN" => Ok(Category::Loan),
            "OTHER" => Ok(Category::Other),
            "TRANSFER" => Ok(Category::Transfer),
            other => Err(anyhow!("Invalid category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Division {
    Personal,
    Office,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Personal => "PERSONAL",
            Division::Office => "OFFICE",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Division {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "PERSONAL" => Ok(Division::Personal),
            "OFFICE" => Ok(Division::Office),
            other => Err(anyhow!(
                "Invalid division '{}', expected PERSONAL|OFFICE",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Account {
    Bank,
    Cash,
    Savings,
    CreditCard,
}

impl Account {
    pub fn as_str(&self) -> &'static str {
        match self {
            Account::Bank => "BANK",
            Account::Cash => "CASH",
            Account::Savings => "SAVINGS",
            Account::CreditCard => "CREDIT_CARD",
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Account {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().replace(' ', "_").as_str() {
            "BANK" => Ok(Account::Bank),
            "CASH" => Ok(Account::Cash),
            "SAVINGS" => Ok(Account::Savings),
            "CREDIT_CARD" => Ok(Account::CreditCard),
            other => Err(anyhow!(
                "Invalid account '{}', expected BANK|CASH|SAVINGS|CREDIT_CARD",
                other
            )),
        }
    }
}

/// Type-dependent half of a transaction. Income and expense carry a category
/// and a division; a transfer carries the two accounts instead, with its
/// category pinned to TRANSFER on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Details {
    Income {
        category: Category,
        division: Division,
    },
    Expense {
        category: Category,
        division: Division,
    },
    Transfer {
        from_account: Account,
        to_account: Account,
    },
}

impl Details {
    pub fn income(category: Category, division: Division) -> Result<Details> {
        if !category.is_allowed_for(TransactionType::Income) {
            return Err(anyhow!("Category '{}' is not an income category", category));
        }
        Ok(Details::Income { category, division })
    }

    pub fn expense(category: Category, division: Division) -> Result<Details> {
        if !category.is_allowed_for(TransactionType::Expense) {
            return Err(anyhow!(
                "Category '{}' is not an expense category",
                category
            ));
        }
        Ok(Details::Expense { category, division })
    }

    pub fn transfer(from_account: Account, to_account: Account) -> Details {
        Details::Transfer {
            from_account,
            to_account,
        }
    }

    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Details::Income { .. } => TransactionType::Income,
            Details::Expense { .. } => TransactionType::Expense,
            Details::Transfer { .. } => TransactionType::Transfer,
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Details::Income { category, .. } | Details::Expense { category, .. } => *category,
            Details::Transfer { .. } => Category::Transfer,
        }
    }

    /// Division, when the type has one. Transfers move money between
    /// accounts and do not take part in division filtering.
    pub fn division(&self) -> Option<Division> {
        match self {
            Details::Income { division, .. } | Details::Expense { division, .. } => Some(*division),
            Details::Transfer { .. } => None,
        }
    }

    pub fn accounts(&self) -> Option<(Account, Account)> {
        match self {
            Details::Transfer {
                from_account,
                to_account,
            } => Some((*from_account, *to_account)),
            _ => None,
        }
    }
}

/// A ledger record as held by the remote store. `id` is store-assigned and
/// immutable; the body stays mutable only while the edit window is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub amount: Decimal,
    pub details: Details,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    pub fn transaction_type(&self) -> TransactionType {
        self.details.transaction_type()
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }

    pub fn division(&self) -> Option<Division> {
        self.details.division()
    }
}

/// Complete create/update payload in the store's wire shape. Every field is
/// always present; the server ignores the ones the type does not use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    pub amount: Decimal,
    pub division: Division,
    pub description: String,
    pub from_account: Account,
    pub to_account: Account,
    pub created_at: NaiveDate,
}
