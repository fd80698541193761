//! Every user-facing message shiftdesk can print.
//!
//! Variants carry the values they interpolate; the text itself lives in the
//! `Display` implementation in [`super::display`].

#[derive(Debug, Clone)]
pub enum Message {
    // === WORK LOG MESSAGES ===
    WorkLogCreated(i64),
    WorkLogDeleted(i64),
    WorkLogNotFound(i64),
    WorkLogRejected(String),
    WorkLogStatusChanged(i64, String),
    WorkLogsHeader(String),
    NoWorkLogs(String),
    PendingHeader(String),
    NoPendingWork,
    ConfirmDeleteWorkLog(i64),
    PhotoUploadFailed(String),

    // === HANDOVER MESSAGES ===
    HandoverSent(String, usize),
    HandoverRejected(String),
    HandoverItemsIgnored(usize),
    HandoverHistoryHeader,
    NoHandovers,

    // === SCHEDULE MESSAGES ===
    ScheduleHeader(String),
    InvalidDay(u32, String),
    SchedulesSeeded(usize, String),
    SchedulesAlreadySeeded,

    // === ATTENDANCE MESSAGES ===
    AttendanceReportHeader(String, usize),
    MonthlyHoursHeader(String),
    NoAttendanceRecords,
    AttendanceImported(usize),
    AttendanceImportFailed(String, String),

    // === EMPLOYEE MESSAGES ===
    EmployeeCreated(String, i64),
    EmployeeUpdated(String),
    EmployeeDeleted(String),
    EmployeeNotFound(i64),
    EmployeeIdMissing,
    EmployeeInvalid(String),
    EmployeeListHeader,
    EditingEmployee(String),
    ConfirmDeleteEmployee(String),
    NoEmployees,
    DutyBoardHeader,
    EmployeesSeeded(usize),
    EmployeesAlreadySeeded,

    // === NOTIFICATION MESSAGES ===
    NotificationSent(i64),
    NotificationRead(i64),
    NotificationsReadAll(usize),
    NotificationDeleted(i64),
    NotificationNotFound(i64),
    NotificationsHeader(usize),
    NoNotifications,

    // === ACTIVITY MESSAGES ===
    ActivityRecorded(String, String),
    ActivityHeader(usize),
    NoActivity,
    ActivitySeeded(usize),
    ActivityAlreadySeeded,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReset,
    ConfigModuleShift,
    ConfigModuleFacility,
    ConfigModulePhotos,

    // === DATABASE MESSAGES ===
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
    StoreWriteFailed(String),

    // === GENERAL ===
    OperationCancelled,
    InvalidDateFormat,

    // === PROMPTS ===
    PromptSelectModules,
    PromptStandardShiftMinutes,
    PromptTeamWorker(String),
    PromptBasementLevels,
    PromptAboveGroundLevels,
    PromptCategories,
    PromptPhotoDirectory,
    PromptTaskKind,
    PromptLocation,
    PromptCategory,
    PromptPriority,
    PromptTime,
    PromptDetails,
    PromptHandoverItems,
    PromptHandoverNote,
    PromptEmployeeName,
    PromptEmployeeRole,
    PromptEmployeeTeam,
    PromptEmployeeEmail,
    PromptEmployeePhone,
    PromptEmployeeDepartment,
    PromptDutyStatus,
    PromptJoinDate,
}
