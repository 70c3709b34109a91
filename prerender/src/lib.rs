//! Static HTML page builders for the public pages.
//!
//! Both builders are pure: they turn entities into one complete,
//! self-contained HTML5 document (inline styles, no external resources,
//! `noindex,nofollow,noarchive`). Uploading the result is the repository
//! layer's job.

pub mod cabinet;
pub mod profile;

pub(crate) const BRAND: &str = "BirthPrep Pro";

/// Display form used for due dates on public pages, e.g. `Sep 19, 2026`.
pub(crate) fn format_date(date: jiff::civil::Date) -> String {
    date.strftime("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formatting() {
        let date = jiff::civil::date(2026, 9, 19);
        assert_eq!(format_date(date), "Sep 19, 2026");
        let single_digit = jiff::civil::date(2026, 3, 4);
        assert_eq!(format_date(single_digit), "Mar 4, 2026");
    }
}
