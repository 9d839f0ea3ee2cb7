// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::models::{Category, Division, Transaction};

/// Client-held filter state. `None` on division/category means "All".
///
/// The date bounds are not applied locally: when both are present the
/// dashboard asks the store for a pre-filtered collection instead of
/// fetching everything (see `Dashboard::refresh`).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterCriteria {
    pub division: Option<Division>,
    pub category: Option<Category>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Inclusive fetch bounds, only when both ends are set.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) => Some((from, to)),
            _ => None,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.division.is_none() && self.category.is_none()
    }

    fn matches(&self, tx: &Transaction) -> bool {
        let match_div = match self.division {
            None => true,
            Some(d) => tx.division() == Some(d),
        };
        let match_cat = match self.category {
            None => true,
            Some(c) => tx.category() == c,
        };
        match_div && match_cat
    }
}

/// Narrows a collection by division and category. Order-preserving and
/// total: every record is either kept or dropped, never transformed. The
/// all-inclusive criteria returns the input unchanged.
pub fn apply_filters(transactions: &[Transaction], criteria: &FilterCriteria) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect()
}
