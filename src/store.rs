// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use reqwest::StatusCode;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{Account, Category, Details, Division, Draft, Transaction, TransactionType};
use crate::utils::http_client;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The payload was rejected, either locally before submission or by the
    /// store itself.
    #[error("validation rejected: {0}")]
    Validation(String),
    /// Update/delete target does not exist.
    #[error("transaction not found")]
    NotFound,
    /// Store unreachable or the response was unusable.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

/// Contract the dashboard needs from the remote transaction store.
pub trait TransactionStore {
    fn list_all(&self) -> Result<Vec<Transaction>, StoreError>;
    fn list_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, StoreError>;
    fn create(&self, draft: &Draft) -> Result<Transaction, StoreError>;
    fn update(&self, id: &str, draft: &Draft) -> Result<Transaction, StoreError>;
    fn remove(&self, id: &str) -> Result<(), StoreError>;
}

/// Raw wire shape of a stored transaction. Everything that legacy records
/// are known to get wrong stays loose here and is tightened in `decode`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(default, alias = "_id")]
    pub id: serde_json::Value,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub amount: serde_json::Value,
    #[serde(default)]
    pub division: Option<Division>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub from_account: Option<Account>,
    #[serde(default)]
    pub to_account: Option<Account>,
    pub created_at: String,
}

/// The store transmits amounts as a numeric string or a bare number, and
/// legacy records may miss the field altogether. Anything unparseable counts
/// as zero so one bad record cannot take the dashboard down.
pub fn normalize_amount(value: &serde_json::Value) -> Decimal {
    match value {
        serde_json::Value::String(s) => s.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
        serde_json::Value::Number(n) => n
            .to_string()
            .parse::<Decimal>()
            .unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Accepts an ISO datetime (with or without offset) or a bare ISO date,
/// which normalizes to midnight. The edit window needs real elapsed time,
/// so dates come out as `NaiveDateTime`.
pub fn parse_timestamp(s: &str) -> Result<NaiveDateTime, StoreError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt);
        }
    }
    Err(StoreError::Transport(format!(
        "unparseable createdAt '{}'",
        s
    )))
}

/// Wire record to domain record. This is the single normalization boundary:
/// after it, amounts are Decimal, timestamps are real, and the type/category
/// invariant holds structurally.
pub fn decode(record: TransactionRecord) -> Result<Transaction, StoreError> {
    let id = match &record.id {
        serde_json::Value::String(s) if !s.is_empty() => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => return Err(StoreError::Transport("record missing id".into())),
    };

    let details = match record.kind {
        TransactionType::Income => Details::income(
            record.category.unwrap_or(Category::Salary),
            record.division.unwrap_or(Division::Personal),
        )
        .map_err(|e| StoreError::Validation(e.to_string()))?,
        TransactionType::Expense => Details::expense(
            record.category.unwrap_or(Category::Food),
            record.division.unwrap_or(Division::Personal),
        )
        .map_err(|e| StoreError::Validation(e.to_string()))?,
        TransactionType::Transfer => Details::transfer(
            record.from_account.unwrap_or(Account::Bank),
            record.to_account.unwrap_or(Account::Cash),
        ),
    };

    Ok(Transaction {
        id,
        amount: normalize_amount(&record.amount),
        details,
        description: record.description.filter(|d| !d.is_empty()),
        created_at: parse_timestamp(&record.created_at)?,
    })
}

pub fn decode_list(records: Vec<TransactionRecord>) -> Result<Vec<Transaction>, StoreError> {
    records.into_iter().map(decode).collect()
}

/// Blocking HTTP client for the remote transaction store.
pub struct HttpStore {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        Ok(HttpStore {
            client: http_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config() -> anyhow::Result<Self> {
        HttpStore::new(crate::config::api_base_url()?)
    }

    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, StoreError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        match status {
            StatusCode::NOT_FOUND => Err(StoreError::NotFound),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let body = resp.text().unwrap_or_default();
                if body.is_empty() {
                    Err(StoreError::Validation(status.to_string()))
                } else {
                    Err(StoreError::Validation(body))
                }
            }
            _ => Err(StoreError::Transport(format!("store returned {}", status))),
        }
    }
}

impl TransactionStore for HttpStore {
    fn list_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let resp = Self::check(self.client.get(&self.base_url).send()?)?;
        decode_list(resp.json::<Vec<TransactionRecord>>()?)
    }

    fn list_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>, StoreError> {
        let url = format!("{}/filter", self.base_url);
        let resp = Self::check(
            self.client
                .get(url)
                .query(&[("start", start.to_string()), ("end", end.to_string())])
                .send()?,
        )?;
        decode_list(resp.json::<Vec<TransactionRecord>>()?)
    }

    fn create(&self, draft: &Draft) -> Result<Transaction, StoreError> {
        let resp = Self::check(self.client.post(&self.base_url).json(draft).send()?)?;
        decode(resp.json::<TransactionRecord>()?)
    }

    fn update(&self, id: &str, draft: &Draft) -> Result<Transaction, StoreError> {
        let url = format!("{}/{}", self.base_url, id);
        let resp = Self::check(self.client.put(url).json(draft).send()?)?;
        decode(resp.json::<TransactionRecord>()?)
    }

    fn remove(&self, id: &str) -> Result<(), StoreError> {
        let url = format!("{}/{}", self.base_url, id);
        Self::check(self.client.delete(url).send()?)?;
        Ok(())
    }
}
