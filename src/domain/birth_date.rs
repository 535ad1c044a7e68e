//! Birth date formatting between the canonical `YYYY-MM-DD` form and display forms.
//!
//! Both transforms keep only the first two characters of the day segment, so a
//! timestamp such as `2000-01-05T00:00:00` collapses to its date. Input that does
//! not split into `year-month-day` with a day of at least two characters is
//! returned unchanged.

/// Split a canonical date into `(year, month, day)`, with the day cut to two characters.
fn split_canonical(canonical: &str) -> Option<(&str, &str, &str)> {
    let mut parts = canonical.splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;

    let cut = day
        .char_indices()
        .nth(2)
        .map(|(idx, _)| idx)
        .unwrap_or(day.len());
    let day = &day[..cut];
    if day.chars().count() < 2 {
        return None;
    }

    Some((year, month, day))
}

/// Value for a date-typed input control (`YYYY-MM-DD`).
///
/// ```
/// use contatos_mcp_server::domain::birth_date::to_display_date;
///
/// assert_eq!(to_display_date("2000-01-05"), "2000-01-05");
/// assert_eq!(to_display_date("2000-01-05T00:00:00"), "2000-01-05");
/// ```
pub fn to_display_date(canonical: &str) -> String {
    match split_canonical(canonical) {
        Some((year, month, day)) => format!("{}-{}-{}", year, month, day),
        None => canonical.to_string(),
    }
}

/// Read-only table form, `DD/MM/YYYY`.
pub fn to_human_date(canonical: &str) -> String {
    match split_canonical(canonical) {
        Some((year, month, day)) => format!("{}/{}/{}", day, month, year),
        None => canonical.to_string(),
    }
}
