//! Text for every [`Message`] variant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === WORK LOG MESSAGES ===
            Message::WorkLogCreated(id) => format!("Work log #{} recorded as Pending.", id),
            Message::WorkLogDeleted(id) => format!("Work log #{} deleted.", id),
            Message::WorkLogNotFound(id) => format!("Work log #{} not found.", id),
            Message::WorkLogRejected(reason) => format!("Work log not saved: {}", reason),
            Message::WorkLogStatusChanged(id, status) => format!("Work log #{} is now {}.", id, status),
            Message::WorkLogsHeader(date) => format!("Work logs for {}", date),
            Message::NoWorkLogs(date) => format!("No work logs for {}.", date),
            Message::PendingHeader(date) => format!("Pending work for {}", date),
            Message::NoPendingWork => "No pending work to hand over.".to_string(),
            Message::ConfirmDeleteWorkLog(id) => format!("Delete work log #{}?", id),
            Message::PhotoUploadFailed(error) => format!("Photo upload failed, work log not saved: {}", error),

            // === HANDOVER MESSAGES ===
            Message::HandoverSent(recipient, count) => format!("Handover with {} item(s) sent to {}.", count, recipient),
            Message::HandoverRejected(reason) => format!("Handover not sent: {}", reason),
            Message::HandoverItemsIgnored(count) => format!("{} item(s) are not pending for that day and were left out.", count),
            Message::HandoverHistoryHeader => "Sent handovers".to_string(),
            Message::NoHandovers => "No handovers have been sent yet.".to_string(),

            // === SCHEDULE MESSAGES ===
            Message::ScheduleHeader(month) => format!("Duty schedule for {}", month),
            Message::InvalidDay(day, month) => format!("{} has no day {}.", month, day),
            Message::SchedulesSeeded(count, month) => format!("Seeded {} schedule day(s) for {}.", count, month),
            Message::SchedulesAlreadySeeded => "Schedules already exist, nothing seeded.".to_string(),

            // === ATTENDANCE MESSAGES ===
            Message::AttendanceReportHeader(period, count) => format!("Attendance report ({}, {} record(s))", period, count),
            Message::MonthlyHoursHeader(month) => format!("Hours per employee for {}", month),
            Message::NoAttendanceRecords => "No attendance records found.".to_string(),
            Message::AttendanceImported(count) => format!("Imported {} attendance record(s).", count),
            Message::AttendanceImportFailed(file, error) => format!("Could not import {}: {}", file, error),

            // === EMPLOYEE MESSAGES ===
            Message::EmployeeCreated(name, id) => format!("Employee '{}' added with ID {}.", name, id),
            Message::EmployeeUpdated(name) => format!("Employee '{}' updated.", name),
            Message::EmployeeDeleted(name) => format!("Employee '{}' deleted.", name),
            Message::EmployeeNotFound(id) => format!("Employee with ID {} not found.", id),
            Message::EmployeeIdMissing => "Employee has no ID; save it before updating.".to_string(),
            Message::EmployeeInvalid(problems) => format!("Employee not saved: {}", problems),
            Message::EmployeeListHeader => "Employees".to_string(),
            Message::EditingEmployee(name) => format!("Editing employee: {}", name),
            Message::ConfirmDeleteEmployee(name) => format!("Delete employee '{}'?", name),
            Message::NoEmployees => "No employees on the roster.".to_string(),
            Message::DutyBoardHeader => "Duty board".to_string(),
            Message::EmployeesSeeded(count) => format!("Added {} starter employee(s).", count),
            Message::EmployeesAlreadySeeded => "Roster already has employees, nothing seeded.".to_string(),

            // === NOTIFICATION MESSAGES ===
            Message::NotificationSent(id) => format!("Notification #{} posted.", id),
            Message::NotificationRead(id) => format!("Notification #{} marked as read.", id),
            Message::NotificationsReadAll(count) => format!("Marked {} notification(s) as read.", count),
            Message::NotificationDeleted(id) => format!("Notification #{} deleted.", id),
            Message::NotificationNotFound(id) => format!("Notification #{} not found.", id),
            Message::NotificationsHeader(unread) => format!("Notifications ({} unread)", unread),
            Message::NoNotifications => "No notifications.".to_string(),

            // === ACTIVITY MESSAGES ===
            Message::ActivityRecorded(user, action) => format!("{}: {}", user, action),
            Message::ActivityHeader(count) => format!("Recent activity (last {})", count),
            Message::NoActivity => "No activity recorded yet.".to_string(),
            Message::ActivitySeeded(count) => format!("Started the activity trail ({} entries).", count),
            Message::ActivityAlreadySeeded => "Activity trail already has entries, nothing seeded.".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportFailed(error) => format!("Export failed: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReset => "Configuration reset to defaults".to_string(),
            Message::ConfigModuleShift => "Shift settings".to_string(),
            Message::ConfigModuleFacility => "Facility settings".to_string(),
            Message::ConfigModulePhotos => "Photo storage".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::StoreWriteFailed(error) => format!("Could not save, please try again: {}", error),

            // === GENERAL ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::InvalidDateFormat => "Expected a date as YYYY-MM-DD".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptStandardShiftMinutes => "Standard shift length in minutes".to_string(),
            Message::PromptTeamWorker(team) => format!("Default worker for team {}", team),
            Message::PromptBasementLevels => "Basement levels".to_string(),
            Message::PromptAboveGroundLevels => "Floors above ground".to_string(),
            Message::PromptCategories => "Work categories (comma separated)".to_string(),
            Message::PromptPhotoDirectory => "Photo directory (empty for the data directory)".to_string(),
            Message::PromptTaskKind => "Type of work".to_string(),
            Message::PromptLocation => "Location".to_string(),
            Message::PromptCategory => "Category".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptTime => "Time (HH:MM)".to_string(),
            Message::PromptDetails => "Work details".to_string(),
            Message::PromptHandoverItems => "Items to hand over (space to select, enter to confirm)".to_string(),
            Message::PromptHandoverNote => "Note for the next shift".to_string(),
            Message::PromptEmployeeName => "Name".to_string(),
            Message::PromptEmployeeRole => "Role".to_string(),
            Message::PromptEmployeeTeam => "Team".to_string(),
            Message::PromptEmployeeEmail => "Email".to_string(),
            Message::PromptEmployeePhone => "Phone (010-1234-5678)".to_string(),
            Message::PromptEmployeeDepartment => "Department".to_string(),
            Message::PromptDutyStatus => "Duty status".to_string(),
            Message::PromptJoinDate => "Join date (YYYY-MM-DD)".to_string(),
        };
        write!(f, "{}", text)
    }
}
