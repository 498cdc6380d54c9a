#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigModuleSheets,
    ConfigModuleDashboard,
    SheetsNotConfigured,

    // === PROMPTS ===
    PromptSelectModules,
    PromptSpreadsheetId,
    PromptBaseUrl,
    PromptChecklistSheet,
    PromptDelegationSheet,
    PromptDirectoryUrl,
    PromptDefaultMode,
    PromptSessionTimeout,

    // === SESSION MESSAGES ===
    SignedIn(String, String), // username, role
    SignedOut,
    AlreadySignedOut,
    NotSignedIn,
    GreetingMorning(String),
    GreetingAfternoon(String),
    GreetingEvening(String),

    // === FETCH MESSAGES ===
    FetchFailed(String, String), // mode, error
    DashboardUnavailable(String),

    // === DASHBOARD MESSAGES ===
    SummaryHeader(String, String), // mode, date
    MonthlyHeader,
    StatusHeader,
    RatingsHeader,
    StaffHeader(String), // mode
    StaffTierHigh,
    StaffTierModerate,
    StaffTierLow,
    NoStaffInTier,
    NoStaff,
    TasksHeader(String, String), // view, mode
    NoTasksInView(String),
    UnknownStaff(String, String), // name, known names
    TasksShown(usize),

    // === RANGE MESSAGES ===
    RangeHeader(String, String), // from, to
    InvalidDate(String),
    InvalidRange(String),

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data, format
    ExportCompleted(String),
}
