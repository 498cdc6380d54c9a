#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sheetdash::libs::task::{classify, Frequency, Status};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completion_wins_over_dates() {
        let today = date(2024, 1, 15);
        assert_eq!(classify(true, Some(date(2023, 1, 1)), today), Status::Completed);
        assert_eq!(classify(true, Some(date(2025, 1, 1)), today), Status::Completed);
        assert_eq!(classify(true, None, today), Status::Completed);
    }

    #[test]
    fn test_start_before_today_is_overdue() {
        let today = date(2024, 1, 15);
        assert_eq!(classify(false, Some(date(2024, 1, 10)), today), Status::Overdue);
        assert_eq!(classify(false, Some(date(2024, 1, 14)), today), Status::Overdue);
    }

    #[test]
    fn test_today_and_later_are_pending() {
        let today = date(2024, 1, 15);
        assert_eq!(classify(false, Some(today), today), Status::Pending);
        assert_eq!(classify(false, Some(date(2024, 3, 1)), today), Status::Pending);
        assert_eq!(classify(false, None, today), Status::Pending);
    }

    #[test]
    fn test_frequency_parsing() {
        assert_eq!(Frequency::parse(Some("Daily")), Frequency::Daily);
        assert_eq!(Frequency::parse(Some(" WEEKLY ")), Frequency::Weekly);
        assert_eq!(Frequency::parse(Some("Bi-Weekly")), Frequency::Fortnightly);
        assert_eq!(Frequency::parse(Some("Annually")), Frequency::Yearly);
        assert_eq!(Frequency::parse(Some("sometimes")), Frequency::OneTime);
        assert_eq!(Frequency::parse(None), Frequency::OneTime);
        assert_eq!(Frequency::Quarterly.to_string(), "quarterly");
    }
}
