use chrono::{Local, NaiveDate};

/// Today's date in the process-local timezone.
///
/// Birth-date validation takes the reference date as a parameter so tests
/// can pin it; production callers pass this value.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
