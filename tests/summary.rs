#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sheetdash::libs::mode::Mode;
    use sheetdash::libs::summary::{completion_rate, progress, range_stats, staff_slug, RangeError, Summary, Tier};
    use sheetdash::libs::task::{classify, Completion, Frequency, Task};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2024, 5, 15)
    }

    fn task(id: &str, assignee: &str, start: Option<NaiveDate>, completed_on: Option<NaiveDate>) -> Task {
        let completion = completed_on.map(Completion::Dated);
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            assigned_to: assignee.to_string(),
            start_date: start,
            status: classify(completion.is_some(), start, today()),
            completion,
            frequency: Frequency::OneTime,
            rating_code: None,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("1", "Alice", Some(date(2024, 5, 10)), Some(date(2024, 3, 2))),
            task("2", "Alice", Some(date(2024, 5, 10)), None),
            task("3", "Bob", Some(date(2024, 5, 15)), None),
            task("4", "Bob", Some(date(2024, 5, 1)), Some(date(2024, 5, 3))),
            task("5", "Bob", Some(date(2024, 5, 16)), None),
            task("6", "Carol", Some(date(2024, 4, 20)), None),
        ]
    }

    #[test]
    fn test_counter_invariants() {
        for mode in [Mode::Checklist, Mode::Delegation] {
            let summary = Summary::build(&sample(), mode.rules(), today());
            assert_eq!(summary.completed + summary.pending, summary.total);
            assert!(summary.pending >= summary.overdue);
            assert_eq!(summary.staff.iter().map(|staff| staff.total).sum::<usize>(), summary.total);
        }
    }

    #[test]
    fn test_checklist_counts_only_started_tasks() {
        let summary = Summary::build(&sample(), Mode::Checklist.rules(), today());

        assert_eq!(summary.total, 5);
        assert_eq!(summary.completed, 2);
        assert_eq!(summary.pending, 3);
        assert_eq!(summary.overdue, 2);
        assert_eq!(summary.completion_rate, 40.0);
    }

    #[test]
    fn test_delegation_counts_every_task() {
        let summary = Summary::build(&sample(), Mode::Delegation.rules(), today());

        assert_eq!(summary.total, 6);
        assert_eq!(summary.pending, 4);
        assert_eq!(summary.overdue, 2);
        assert_eq!(summary.completion_rate, 33.3);
    }

    #[test]
    fn test_tomorrow_task_excluded_from_checklist_counters() {
        let tasks = vec![task("T3", "Alice", Some(date(2024, 5, 16)), None)];

        let checklist = Summary::build(&tasks, Mode::Checklist.rules(), today());
        assert_eq!(checklist.total, 0);
        assert!(checklist.staff.is_empty());

        let delegation = Summary::build(&tasks, Mode::Delegation.rules(), today());
        assert_eq!(delegation.total, 1);
        assert_eq!(delegation.pending, 1);
    }

    #[test]
    fn test_empty_list() {
        let summary = Summary::build(&[], Mode::Checklist.rules(), today());

        assert_eq!(summary.total, 0);
        assert_eq!(summary.completion_rate, 0.0);
        assert_eq!(summary.monthly.len(), 12);
        assert_eq!(summary.statuses.len(), 3);
        assert!(summary.statuses.iter().all(|slice| slice.value == 0));
    }

    #[test]
    fn test_monthly_series() {
        let summary = Summary::build(&sample(), Mode::Checklist.rules(), today());

        assert_eq!(summary.monthly[0].name, "Jan");
        assert_eq!(summary.monthly[2].completed, 1);
        assert_eq!(summary.monthly[4].completed, 1);
        assert_eq!(summary.monthly[4].pending, 3);
        assert_eq!(summary.monthly.iter().map(|month| month.pending).sum::<usize>(), summary.pending);
    }

    #[test]
    fn test_status_series_colors() {
        let summary = Summary::build(&sample(), Mode::Checklist.rules(), today());
        let slices: Vec<(&str, usize, &str)> = summary.statuses.iter().map(|s| (s.name, s.value, s.color)).collect();

        assert_eq!(
            slices,
            vec![("Completed", 2, "#22c55e"), ("Pending", 3, "#facc15"), ("Overdue", 2, "#ef4444")]
        );
    }

    #[test]
    fn test_undated_completion_is_counted_without_month() {
        let mut done = task("1", "Alice", Some(date(2024, 5, 10)), None);
        done.completion = Some(Completion::Undated("yes".to_string()));
        done.status = classify(true, done.start_date, today());

        let summary = Summary::build(&[done], Mode::Checklist.rules(), today());
        assert_eq!(summary.completed, 1);
        assert_eq!(summary.monthly.iter().map(|month| month.completed).sum::<usize>(), 0);
    }

    #[test]
    fn test_rating_buckets_only_in_delegation() {
        let mut tasks = Vec::new();
        for (id, code, completed) in [("1", 1, true), ("2", 2, true), ("3", 3, true), ("4", 5, true), ("5", 1, false)] {
            let mut t = task(id, "Alice", Some(date(2024, 5, 1)), completed.then(|| date(2024, 5, 2)));
            t.rating_code = Some(code);
            tasks.push(t);
        }

        let delegation = Summary::build(&tasks, Mode::Delegation.rules(), today());
        assert_eq!(delegation.ratings.once, 1);
        assert_eq!(delegation.ratings.twice, 1);
        assert_eq!(delegation.ratings.three_plus, 2);

        let checklist = Summary::build(&tasks, Mode::Checklist.rules(), today());
        assert_eq!(checklist.ratings.once + checklist.ratings.twice + checklist.ratings.three_plus, 0);
    }

    #[test]
    fn test_staff_progress_and_tiers() {
        let summary = Summary::build(&sample(), Mode::Delegation.rules(), today());
        let names: Vec<&str> = summary.staff.iter().map(|staff| staff.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

        let alice = &summary.staff[0];
        assert_eq!((alice.total, alice.completed, alice.pending, alice.progress), (2, 1, 1, 50));
        assert_eq!(alice.tier, Tier::Moderate);
        assert_eq!(summary.staff[1].progress, 33);
        assert_eq!(summary.staff[1].tier, Tier::Low);

        assert_eq!(summary.staff_in_tier(Tier::Low).count(), 2);
        assert_eq!(summary.staff_in_tier(Tier::High).count(), 0);
    }

    #[test]
    fn test_rates() {
        assert_eq!(completion_rate(0, 0), 0.0);
        assert_eq!(completion_rate(1, 3), 33.3);
        assert_eq!(completion_rate(2, 3), 66.7);
        assert_eq!(progress(0, 0), 0);
        assert_eq!(progress(2, 3), 67);
        assert_eq!(Tier::from_progress(70), Tier::High);
        assert_eq!(Tier::from_progress(69), Tier::Moderate);
        assert_eq!(Tier::from_progress(40), Tier::Moderate);
        assert_eq!(Tier::from_progress(39), Tier::Low);
        assert_eq!(staff_slug("Mary  Ann Lee"), "mary-ann-lee");
    }

    #[test]
    fn test_range_stats() {
        let stats = range_stats(&sample(), date(2024, 5, 1), date(2024, 5, 15)).unwrap();

        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_rate, 50.0);
    }

    #[test]
    fn test_range_stats_rejects_inverted_window() {
        let from = date(2024, 5, 15);
        let to = date(2024, 5, 1);
        assert_eq!(range_stats(&sample(), from, to), Err(RangeError::Inverted { from, to }));
    }
}
