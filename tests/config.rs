#[cfg(test)]
mod tests {
    use sheetdash::api::sheets::SheetsConfig;
    use sheetdash::libs::config::{Config, DashboardConfig, BASE_URL_ENV, SPREADSHEET_ID_ENV};
    use sheetdash::libs::mode::Mode;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a temporary home and clears overrides.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(SPREADSHEET_ID_ENV);
            std::env::remove_var(BASE_URL_ENV);
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }

        fn teardown(self) {
            std::env::remove_var(SPREADSHEET_ID_ENV);
            std::env::remove_var(BASE_URL_ENV);
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.sheets.is_none());
        assert_eq!(config.dashboard(), DashboardConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let mut sheets = SheetsConfig::new("sheet-1");
        sheets.directory_url = Some("https://directory.example.com/exec".to_string());
        let config = Config {
            sheets: Some(sheets),
            dashboard: Some(DashboardConfig {
                default_mode: Mode::Delegation,
                session_timeout: 45,
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        assert_eq!(read_config.dashboard().session_timeout(), chrono::Duration::minutes(45));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides(_ctx: &mut ConfigTestContext) {
        std::env::set_var(SPREADSHEET_ID_ENV, "from-env");
        std::env::set_var(BASE_URL_ENV, "http://localhost:9000");

        let config = Config::default().with_env();
        let sheets = config.sheets.unwrap();
        assert_eq!(sheets.spreadsheet_id, "from-env");
        assert_eq!(sheets.base_url, "http://localhost:9000");
        assert_eq!(sheets.checklist_sheet, "Checklist");

        let file_config = Config {
            sheets: Some(SheetsConfig::new("from-file")),
            dashboard: None,
        };
        assert_eq!(file_config.with_env().sheets.unwrap().spreadsheet_id, "from-env");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_blank_env_is_ignored(_ctx: &mut ConfigTestContext) {
        std::env::set_var(SPREADSHEET_ID_ENV, "  ");
        assert!(Config::default().with_env().sheets.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_dashboard_section_uses_defaults(_ctx: &mut ConfigTestContext) {
        let config: Config = serde_json::from_str(r#"{"sheets":{"spreadsheet_id":"x"}}"#).unwrap();
        assert_eq!(config.dashboard().default_mode, Mode::Checklist);
        assert_eq!(config.dashboard().session_timeout, 30);
    }
}
