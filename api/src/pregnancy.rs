//! Pregnancy week derived from the estimated due date.

use jiff::Span;
use jiff::civil::Date;

pub const DEFAULT_TOTAL_WEEKS: i64 = 40;

const MAX_WEEK: i32 = 42;

/// Current pregnancy week for a due date as of `now`, assuming a
/// `total_weeks`-week pregnancy (40 by default, i.e. 280 days).
///
/// The pregnancy start is the due date minus `total_weeks` weeks; whole
/// elapsed days from the start, divided by seven, plus one, clamped into
/// [1, 42]. Date arithmetic that fails falls back to week 1.
pub fn week(edd: Date, now: Date, total_weeks: i64) -> i32 {
    let Ok(start) = edd.checked_sub(Span::new().days(total_weeks * 7)) else {
        return 1;
    };
    let Ok(elapsed) = start.until(now) else {
        return 1;
    };
    (elapsed.get_days() / 7 + 1).clamp(1, MAX_WEEK) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn today() -> Date {
        date(2026, 8, 5)
    }

    fn days_from_today(days: i64) -> Date {
        today().checked_add(Span::new().days(days)).unwrap()
    }

    #[test]
    fn due_in_280_days_is_week_one() {
        assert_eq!(
            week(days_from_today(280), today(), DEFAULT_TOTAL_WEEKS),
            1
        );
    }

    #[test]
    fn due_today_is_week_41() {
        assert_eq!(week(today(), today(), DEFAULT_TOTAL_WEEKS), 41);
    }

    #[test]
    fn overdue_clamps_to_42() {
        assert_eq!(
            week(days_from_today(-60), today(), DEFAULT_TOTAL_WEEKS),
            42
        );
    }

    #[test]
    fn far_future_due_date_clamps_to_one() {
        assert_eq!(
            week(days_from_today(400), today(), DEFAULT_TOTAL_WEEKS),
            1
        );
    }

    #[test]
    fn mid_pregnancy_weeks() {
        // 45 days out: 235 elapsed days -> week 34
        assert_eq!(
            week(days_from_today(45), today(), DEFAULT_TOTAL_WEEKS),
            34
        );
        // exactly one week in
        assert_eq!(
            week(days_from_today(273), today(), DEFAULT_TOTAL_WEEKS),
            2
        );
    }
}
