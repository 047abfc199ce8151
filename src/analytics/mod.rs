//! Report aggregation over record snapshots
//!
//! Every function here is pure: it takes typed records plus the reference
//! "now" and returns a freshly built report. Calendar comparisons (current
//! month, current year, today) are made in the UTC offset of `now`.
//!
//! Money sums saturate at `Decimal::MAX`/`Decimal::MIN` instead of
//! overflowing, so out-of-range amounts yield a clamped figure.

pub mod dashboard;
pub mod loans;
pub mod offers;
pub mod revenue;
pub mod transactions;
pub mod users;

use chrono::{DateTime, Datelike, FixedOffset, NaiveTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

pub use dashboard::compute_dashboard_analytics;
pub use loans::compute_loan_report;
pub use offers::compute_lender_dashboard;
pub use revenue::compute_revenue_report;
pub use transactions::compute_transaction_report;
pub use users::compute_user_report;

/// Round to 2 decimals, half-up: midpoints move toward positive infinity
pub fn round2(value: Decimal) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(2, strategy)
}

/// Overflow-free money sum
pub fn sum_saturating(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

/// `total / count` rounded with [`round2`], zero for an empty set
pub fn average(total: Decimal, count: i64) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        round2(total / Decimal::from(count))
    }
}

/// Calendar reference points derived from "now"
#[derive(Debug, Clone, Copy)]
pub struct CalendarWindow {
    now: DateTime<FixedOffset>,
    today_start: DateTime<Utc>,
}

impl CalendarWindow {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        let since_midnight = now.time().signed_duration_since(NaiveTime::MIN);
        let today_start = (now - since_midnight).with_timezone(&Utc);
        Self { now, today_start }
    }

    fn local(&self, ts: &DateTime<Utc>) -> DateTime<FixedOffset> {
        ts.with_timezone(self.now.offset())
    }

    pub fn is_current_month(&self, ts: &DateTime<Utc>) -> bool {
        let local = self.local(ts);
        local.year() == self.now.year() && local.month() == self.now.month()
    }

    pub fn is_current_year(&self, ts: &DateTime<Utc>) -> bool {
        self.local(ts).year() == self.now.year()
    }

    /// On or after local midnight of the current day
    pub fn is_today(&self, ts: &DateTime<Utc>) -> bool {
        *ts >= self.today_start
    }

    /// Month bucket key, `YYYY-MM`
    pub fn month_key(&self, ts: &DateTime<Utc>) -> String {
        let local = self.local(ts);
        format!("{:04}-{:02}", local.year(), local.month())
    }
}
