use chrono::NaiveDate;

/// `January 05, 2024`
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// `Jan 2024`, used on project cards.
#[must_use]
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
