//! List Notices Use Case
//!
//! Public listing with optional date-range and importance filters.
//! Date bounds are whole calendar days: the start date expands to
//! 00:00:00.000 and the end date to 23:59:59.999, both inclusive, so a
//! single-day range still matches everything posted that day.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::entities::Notice;
use crate::domain::repository::{NoticeFilter, NoticeRepository};
use crate::error::NoticeResult;

/// List notices input
#[derive(Debug, Default)]
pub struct ListNoticesInput {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub important_only: bool,
}

/// Expand a calendar date to the first instant of that day (UTC)
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    let time = date
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid wall-clock time");
    Utc.from_utc_datetime(&time)
}

/// Expand a calendar date to the last stored instant of that day (UTC)
pub fn day_end(date: NaiveDate) -> DateTime<Utc> {
    let time = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is always a valid wall-clock time");
    Utc.from_utc_datetime(&time)
}

/// List notices use case
pub struct ListNoticesUseCase<N>
where
    N: NoticeRepository,
{
    notice_repo: Arc<N>,
}

impl<N> ListNoticesUseCase<N>
where
    N: NoticeRepository,
{
    pub fn new(notice_repo: Arc<N>) -> Self {
        Self { notice_repo }
    }

    pub async fn execute(&self, input: ListNoticesInput) -> NoticeResult<Vec<Notice>> {
        let filter = NoticeFilter {
            since: input.start_date.map(day_start),
            until: input.end_date.map(day_end),
            important_only: input.important_only,
        };

        self.notice_repo.list(&filter).await
    }
}
