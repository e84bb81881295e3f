use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Half-open reporting window [start, end) sent to the cost report API.
#[derive(Debug, PartialEq, Serialize)]
pub struct BillingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl From<NaiveDate> for BillingPeriod {
    fn from(today: NaiveDate) -> Self {
        let begin_of_month = NaiveDate::from_ymd(today.year(), today.month(), 1);
        if begin_of_month == today {
            // On the 1st the current month has no usage yet; report the prior
            // full month instead. The exclusive end bound stays at today.
            let end_of_prior_month = today.pred();
            let start = NaiveDate::from_ymd(
                end_of_prior_month.year(),
                end_of_prior_month.month(),
                1,
            );
            return BillingPeriod { start, end: today };
        }
        BillingPeriod {
            start: begin_of_month,
            end: today,
        }
    }
}

impl BillingPeriod {
    pub fn start_date(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }
}
