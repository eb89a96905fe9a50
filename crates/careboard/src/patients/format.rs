use chrono::NaiveDate;

/// Long US-style date, e.g. "August 23, 1996".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Parses an ISO date string and renders it long-form; `None` when unparseable.
pub fn format_birth_date(raw: &str) -> Option<String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .map(format_long_date)
}

/// Chart axis label: three-letter month and the year, e.g. "Mar, 2024".
pub fn month_label(month: &str, year: i32) -> String {
    let short: String = month.chars().take(3).collect();
    format!("{short}, {year}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_long_dates_without_padding() {
        let date = NaiveDate::from_ymd_opt(1996, 8, 3).expect("valid date");
        assert_eq!(format_long_date(date), "August 3, 1996");
    }

    #[test]
    fn birth_dates_fall_back_to_none() {
        assert_eq!(
            format_birth_date("1996-08-23").as_deref(),
            Some("August 23, 1996")
        );
        assert!(format_birth_date("23/08/1996").is_none());
    }

    #[test]
    fn month_labels_truncate_names() {
        assert_eq!(month_label("March", 2024), "Mar, 2024");
        assert_eq!(month_label("May", 2023), "May, 2023");
    }
}
