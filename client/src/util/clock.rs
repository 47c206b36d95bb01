//! Calendar-day helpers for form validation.
//!
//! In the browser "today" is the user's local date; elsewhere (SSR, tests)
//! it falls back to the UTC date.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The current calendar day.
pub fn today() -> Date {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok();
        let month = u8::try_from(now.get_month() + 1)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok());
        let day = u8::try_from(now.get_date()).ok();
        if let (Some(year), Some(month), Some(day)) = (year, month, day) {
            if let Ok(date) = Date::from_calendar_date(year, month, day) {
                return date;
            }
        }
    }
    OffsetDateTime::now_utc().date()
}

/// Parse an ISO `YYYY-MM-DD` date as produced by `<input type="date">`.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), ISO_DATE).ok()
}

/// Format a date as ISO `YYYY-MM-DD`.
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_default()
}
