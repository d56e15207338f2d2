use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

/// Source of "now". Every same-day comparison goes through the local calendar date it returns.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }
}

/// Index of the day's word: `(day_of_month - 1) mod list_len`.
///
/// Repeats every month; year and month are ignored.
pub fn day_index(list_len: usize, day_of_month: u32) -> usize {
    if list_len == 0 {
        return 0;
    }
    (day_of_month.saturating_sub(1) as usize) % list_len
}

pub fn index_for(list_len: usize, now: DateTime<Local>) -> usize {
    day_index(list_len, now.day())
}

/// Calendar date of a stored instant in device-local time.
pub fn local_day(instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&Local).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_index() {
        assert_eq!(day_index(30, 1), 0);
        assert_eq!(day_index(30, 31), 0);
        assert_eq!(day_index(7, 10), 2);
        assert_eq!(day_index(31, 31), 30);
    }

    #[test]
    fn test_day_index_empty_list() {
        assert_eq!(day_index(0, 15), 0);
    }

    #[test]
    fn test_index_ignores_month_and_year() {
        let jan = Local.with_ymd_and_hms(2025, 1, 12, 9, 0, 0).unwrap();
        let aug = Local.with_ymd_and_hms(2026, 8, 12, 22, 30, 0).unwrap();
        assert_eq!(index_for(20, jan), index_for(20, aug));
    }

    #[test]
    fn test_local_day_round_trip() {
        let evening = Local.with_ymd_and_hms(2026, 3, 4, 23, 30, 0).unwrap();
        assert_eq!(
            local_day(evening.with_timezone(&Utc)),
            NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
        );
    }
}
