use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, TimeDelta, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const MONTH_FORMAT: &str = "%Y-%m";
}

/// Label of the weekly bucket containing `date`: the Sunday that closes its week.
/// A Sunday is its own label.
pub fn week_ending_sunday(date: NaiveDate) -> NaiveDate {
    let days_until_sunday = 6 - i64::from(date.weekday().num_days_from_monday());
    date + Duration::days(days_until_sunday)
}

/// First day of the calendar month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month after `month`.
pub fn next_month(month: NaiveDate) -> Option<NaiveDate> {
    month_start(month).checked_add_months(Months::new(1))
}

/// Every month start from `first` to `last` inclusive.
pub fn month_range(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let last = month_start(last);
    let mut months = Vec::new();
    let mut cursor = Some(month_start(first));
    while let Some(month) = cursor {
        if month > last {
            break;
        }
        months.push(month);
        cursor = next_month(month);
    }
    months
}

pub fn format_month(month: NaiveDate) -> String {
    month.format(TimeUtils::MONTH_FORMAT).to_string()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_TIME_FORMAT).to_string()
}

pub fn epoch_ms_to_utc(epoch_ms: i64) -> String {
    // Used for display purposes
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(TimeUtils::STANDARD_TIME_FORMAT).to_string(),
        None => String::new(),
    }
}

/// Days since the Unix epoch, used as the x coordinate of date axes.
pub fn date_to_plot_x(date: NaiveDate) -> f64 {
    (date - NaiveDate::default()).num_days() as f64
}

/// Inverse of `date_to_plot_x`. `None` for coordinates outside chrono's date range.
pub fn plot_x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() {
        return None;
    }
    NaiveDate::default().checked_add_signed(TimeDelta::try_days(x.round() as i64)?)
}

pub fn utc_now() -> DateTime<Utc> {
    Utc::now()
}
