use crate::error::ValidationReason;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").unwrap());

/// Birth-date rule: `DD-MM-YYYY` shape, a real Gregorian calendar date
/// (leap-year aware), not after `today`. `today` itself is accepted.
pub fn check_birth_date(value: &str, today: NaiveDate) -> Result<(), ValidationReason> {
    if !DATE_RE.is_match(value) {
        return Err(ValidationReason::Format);
    }

    let day: u32 = value[0..2].parse().map_err(|_| ValidationReason::Format)?;
    let month: u32 = value[3..5].parse().map_err(|_| ValidationReason::Format)?;
    let year: i32 = value[6..10].parse().map_err(|_| ValidationReason::Format)?;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationReason::Range)?;
    if date > today {
        return Err(ValidationReason::FutureDate);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::check_birth_date;
    use crate::error::ValidationReason;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn rejects_malformed_shapes() {
        for value in ["", "1-1-2020", "2020-01-01", "01/01/2020", "aa-bb-cccc", "01-01-20"] {
            assert_eq!(check_birth_date(value, today()), Err(ValidationReason::Format));
        }
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        for value in ["00-01-2020", "32-01-2020", "31-04-2020", "01-13-2020", "01-00-2020"] {
            assert_eq!(check_birth_date(value, today()), Err(ValidationReason::Range));
        }
    }

    #[test]
    fn leap_years_follow_the_gregorian_rule() {
        assert!(check_birth_date("29-02-2024", today()).is_ok());
        assert_eq!(
            check_birth_date("29-02-2023", today()),
            Err(ValidationReason::Range)
        );
        // Century years are leap only when divisible by 400.
        assert_eq!(
            check_birth_date("29-02-1900", today()),
            Err(ValidationReason::Range)
        );
        assert!(check_birth_date("29-02-2000", today()).is_ok());
    }

    #[test]
    fn today_is_accepted_tomorrow_is_not() {
        assert!(check_birth_date("06-08-2026", today()).is_ok());
        assert_eq!(
            check_birth_date("07-08-2026", today()),
            Err(ValidationReason::FutureDate)
        );
        assert_eq!(
            check_birth_date("01-01-2027", today()),
            Err(ValidationReason::FutureDate)
        );
    }

    #[test]
    fn past_dates_are_accepted() {
        assert!(check_birth_date("01-01-1900", today()).is_ok());
        assert!(check_birth_date("31-12-2025", today()).is_ok());
    }
}
