use chrono::{Datelike, Local, NaiveDate};

/// Format a date as `{year}-{month}-{day}` with no zero padding.
///
/// The server parses this form directly, so `2024-03-05` must come out as
/// `"2024-3-5"`, not `"2024-03-05"`.
pub fn date_cursor_for(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Today's date cursor in local time.
pub fn today_date_cursor() -> String {
    date_cursor_for(Local::now().date_naive())
}
