//! Display text for application messages.
//!
//! All user-facing text lives here, in one `match`, so wording stays
//! consistent across commands.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleSheets => "Spreadsheet settings".to_string(),
            Message::ConfigModuleDashboard => "Dashboard settings".to_string(),
            Message::SheetsNotConfigured => "Spreadsheet is not configured. Run 'sheetdash init' or set SHEETDASH_SPREADSHEET_ID".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptSpreadsheetId => "Spreadsheet id".to_string(),
            Message::PromptBaseUrl => "Spreadsheet base URL".to_string(),
            Message::PromptChecklistSheet => "Checklist sheet name".to_string(),
            Message::PromptDelegationSheet => "Delegation sheet name".to_string(),
            Message::PromptDirectoryUrl => "User directory URL (leave empty to skip)".to_string(),
            Message::PromptDefaultMode => "Default dashboard mode".to_string(),
            Message::PromptSessionTimeout => "Session length (in minutes)".to_string(),

            // === SESSION MESSAGES ===
            Message::SignedIn(name, role) => format!("Signed in as {} ({})", name, role),
            Message::SignedOut => "Signed out".to_string(),
            Message::AlreadySignedOut => "Nobody is signed in".to_string(),
            Message::NotSignedIn => "No active session. Sign in with 'sheetdash login <name>'".to_string(),
            Message::GreetingMorning(name) => format!("Good morning, {}!", name),
            Message::GreetingAfternoon(name) => format!("Good afternoon, {}!", name),
            Message::GreetingEvening(name) => format!("Good evening, {}!", name),

            // === FETCH MESSAGES ===
            Message::FetchFailed(mode, error) => format!("Failed to fetch {} sheet data: {}", mode, error),
            Message::DashboardUnavailable(error) => format!("Sheet data is unavailable ({}). Showing the last known data", error),

            // === DASHBOARD MESSAGES ===
            Message::SummaryHeader(mode, date) => format!("📊 {} dashboard for {}", capitalize(mode), date),
            Message::MonthlyHeader => "Tasks by month".to_string(),
            Message::StatusHeader => "Tasks by status".to_string(),
            Message::RatingsHeader => "Completed tasks by completion count".to_string(),
            Message::StaffHeader(mode) => format!("👥 Staff progress ({} sheet)", mode),
            Message::StaffTierHigh => "Top performers (70% and above)".to_string(),
            Message::StaffTierModerate => "Average performers (40% to 69%)".to_string(),
            Message::StaffTierLow => "Needs attention (below 40%)".to_string(),
            Message::NoStaffInTier => "  none".to_string(),
            Message::NoStaff => "No staff data found".to_string(),
            Message::TasksHeader(view, mode) => format!("📋 {} tasks ({} sheet)", capitalize(view), mode),
            Message::NoTasksInView(view) => format!("No {} tasks found", view),
            Message::UnknownStaff(name, known) => format!("No tasks are assigned to '{}'. Staff on this sheet: {}", name, known),
            Message::TasksShown(count) => format!("{} task(s) shown", count),

            // === RANGE MESSAGES ===
            Message::RangeHeader(from, to) => format!("📅 Tasks starting between {} and {}", from, to),
            Message::InvalidDate(value) => format!("Invalid date '{}'. Use DD/MM/YYYY or YYYY-MM-DD", value),
            Message::InvalidRange(error) => format!("Invalid date range: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportingData(data, format) => format!("Exporting {} as {}...", data, format),
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
        };
        write!(f, "{}", s)
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
