// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Duration, NaiveDateTime};

/// Records stay amendable for this many hours after creation.
pub const EDIT_WINDOW_HOURS: i64 = 12;

/// A record is editable iff no more than twelve hours of real elapsed time
/// have passed since it was created. The boundary is inclusive: exactly
/// twelve hours is still editable. `now` is always passed in so eligibility
/// can be checked deterministically; it decays, so never cache the answer.
pub fn is_editable(created_at: NaiveDateTime, now: NaiveDateTime) -> bool {
    now.signed_duration_since(created_at) <= Duration::hours(EDIT_WINDOW_HOURS)
}
