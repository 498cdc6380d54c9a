#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sheetdash::api::{RowSource, SheetsError};
    use sheetdash::libs::cell::{CellValue, Row};
    use sheetdash::libs::dashboard::{Applied, Dashboard, DashboardState};
    use sheetdash::libs::filter::{TaskFilter, View};
    use sheetdash::libs::mode::Mode;
    use sheetdash::libs::session::Viewer;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn row(id: &str, assignee: &str, start: &str) -> Row {
        let mut cells: Vec<Option<CellValue>> = vec![None; 18];
        cells[1] = Some(id.into());
        cells[4] = Some(assignee.into());
        cells[6] = Some(start.into());
        Row::new(cells)
    }

    fn sheet(rows: &[(&str, &str, &str)]) -> Vec<Row> {
        let mut sheet = vec![Row::new(vec![Some("header".into())])];
        sheet.extend(rows.iter().map(|(id, assignee, start)| row(id, assignee, start)));
        sheet
    }

    /// Serves fixed rows per mode, or fails when a mode has none.
    struct FixedSheets {
        checklist: Option<Vec<Row>>,
        delegation: Option<Vec<Row>>,
    }

    impl RowSource for FixedSheets {
        async fn fetch_rows(&self, mode: Mode) -> Result<Vec<Row>, SheetsError> {
            let rows = match mode {
                Mode::Checklist => &self.checklist,
                Mode::Delegation => &self.delegation,
            };
            rows.clone().ok_or(SheetsError::Malformed)
        }
    }

    #[test]
    fn test_build_dashboard() {
        let rows = sheet(&[("T1", "Alice", "10/01/2024"), ("T2", "Bob", "15/01/2024"), ("T3", "Alice", "16/01/2024")]);
        let ctx = sheetdash::libs::normalizer::Context::new(Mode::Checklist, today(), Viewer::admin("admin"));
        let dashboard = Dashboard::build(&rows, &ctx);

        assert_eq!(dashboard.tasks.len(), 3);
        assert_eq!(dashboard.summary.total, 2);
        assert_eq!(dashboard.summary.overdue, 1);
        assert_eq!(dashboard.staff_names(), vec!["Alice", "Bob"]);
        assert!(dashboard.has_staff("Bob"));
        assert!(!dashboard.has_staff("bob"));
        assert!(!dashboard.has_staff("Carol"));

        let upcoming = dashboard.visible(&TaskFilter::default(), View::Upcoming);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].id, "T3");
    }

    #[test]
    fn test_stale_response_after_mode_switch_is_discarded() {
        let viewer = Viewer::admin("admin");
        let mut state = DashboardState::new(Mode::Checklist, today());

        let checklist_ticket = state.begin_fetch();
        state.set_mode(Mode::Delegation);
        let delegation_ticket = state.begin_fetch();

        let delegation_rows = sheet(&[("D1", "Bob", "01/02/2024")]);
        assert_eq!(state.apply(delegation_ticket, Ok(delegation_rows), &viewer, today()), Applied::Updated);

        let checklist_rows = sheet(&[("T1", "Alice", "15/01/2024"), ("T2", "Alice", "15/01/2024")]);
        assert_eq!(state.apply(checklist_ticket, Ok(checklist_rows), &viewer, today()), Applied::Stale);

        assert_eq!(state.mode(), Mode::Delegation);
        assert_eq!(state.snapshot().mode, Mode::Delegation);
        assert_eq!(state.snapshot().tasks.len(), 1);
        assert_eq!(state.snapshot().tasks[0].id, "D1");
    }

    #[test]
    fn test_superseded_fetch_of_same_mode_is_discarded() {
        let viewer = Viewer::admin("admin");
        let mut state = DashboardState::new(Mode::Checklist, today());

        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert_eq!(state.apply(second, Ok(sheet(&[("T2", "Bob", "15/01/2024")])), &viewer, today()), Applied::Updated);
        assert_eq!(state.apply(first, Ok(sheet(&[])), &viewer, today()), Applied::Stale);
        assert_eq!(state.snapshot().tasks.len(), 1);
    }

    #[test]
    fn test_failed_fetch_keeps_last_snapshot() {
        let viewer = Viewer::admin("admin");
        let mut state = DashboardState::new(Mode::Checklist, today());

        let ticket = state.begin_fetch();
        state.apply(ticket, Ok(sheet(&[("T1", "Alice", "15/01/2024")])), &viewer, today());

        let ticket = state.begin_fetch();
        assert_eq!(state.apply(ticket, Err(SheetsError::Malformed), &viewer, today()), Applied::Failed);
        assert_eq!(state.snapshot().tasks.len(), 1);
        assert!(state.last_error().is_some());

        let ticket = state.begin_fetch();
        state.apply(ticket, Ok(sheet(&[])), &viewer, today());
        assert!(state.last_error().is_none());
        assert!(state.snapshot().tasks.is_empty());
    }

    #[test]
    fn test_setting_same_mode_keeps_pending_fetch_current() {
        let viewer = Viewer::admin("admin");
        let mut state = DashboardState::new(Mode::Checklist, today());

        let ticket = state.begin_fetch();
        state.set_mode(Mode::Checklist);
        assert_eq!(state.apply(ticket, Ok(sheet(&[])), &viewer, today()), Applied::Updated);
    }

    #[tokio::test]
    async fn test_refresh_from_source() {
        let source = FixedSheets {
            checklist: Some(sheet(&[("T1", "Alice", "10/01/2024"), ("T2", "Bob", "15/01/2024")])),
            delegation: None,
        };
        let mut state = DashboardState::new(Mode::Checklist, today());

        let applied = state.refresh(&source, &Viewer::user("bob"), today()).await;
        assert_eq!(applied, Applied::Updated);
        assert_eq!(state.snapshot().tasks.len(), 1);
        assert_eq!(state.snapshot().tasks[0].assigned_to, "Bob");

        state.set_mode(Mode::Delegation);
        let applied = state.refresh(&source, &Viewer::user("bob"), today()).await;
        assert_eq!(applied, Applied::Failed);
        assert_eq!(state.into_snapshot().mode, Mode::Checklist);
    }

    #[test]
    fn test_empty_dashboard() {
        let dashboard = Dashboard::empty(Mode::Delegation, today());
        assert!(dashboard.tasks.is_empty());
        assert_eq!(dashboard.summary.completion_rate, 0.0);
        assert!(dashboard.visible(&TaskFilter::default(), View::Recent).is_empty());
    }
}
