use super::activity::ActivityLog;
use super::attendance::{AttendanceRecord, AttendanceReport};
use super::employee::{DutyBoard, Employee};
use super::handover::HandoverReceipt;
use super::notification::Notification;
use super::schedule::{CalendarGrid, Shift};
use super::worklog::{DailyLogStats, WorkLogEntry};
use anyhow::Result;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn work_logs(entries: &[WorkLogEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TIME", "KIND", "CATEGORY", "LOCATION", "DETAILS", "PRIORITY", "STATUS", "PHOTO"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.time,
                entry.kind,
                entry.category,
                entry.location,
                entry.details,
                entry.priority,
                entry.status,
                if entry.has_photo() { "yes" } else { "" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn daily_stats(stats: &DailyLogStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "PENDING", "COMPLETED", "URGENT"]);
        table.add_row(row![stats.total, stats.pending, stats.completed, stats.urgent]);
        table.printstd();

        Ok(())
    }

    /// Month grid, Sunday first. Each in-month cell shows the day and the
    /// team on duty; today is starred, days outside the month are dimmed
    /// to their number only.
    pub fn calendar(grid: &CalendarGrid, today: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"]);
        for week in &grid.weeks {
            let cells: Vec<String> = week
                .iter()
                .map(|cell| match &cell.shift {
                    Some(shift) => {
                        let marker = if cell.date == today { "*" } else { "" };
                        format!("{:>2}{} {}", cell.day(), marker, shift.team)
                    }
                    None => format!("({})", cell.day()),
                })
                .collect();
            table.add_row(row![cells[0], cells[1], cells[2], cells[3], cells[4], cells[5], cells[6]]);
        }
        table.printstd();

        Ok(())
    }

    pub fn shift(shift: &Shift, today: NaiveDate) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TEAM", "WORKER", "WHEN", "SOURCE"]);
        table.add_row(row![
            shift.date,
            shift.team,
            shift.worker,
            shift.timing(today),
            format!("{:?}", shift.source).to_lowercase()
        ]);
        table.printstd();

        Ok(())
    }

    pub fn attendance_report(report: &AttendanceReport) -> Result<()> {
        let mut table = Table::new();
        table.add_row(row!["TOTAL HOURS", "LATE", "OVERTIME HOURS", "LEAVE"]);
        table.add_row(row![
            report.stats.total_hours,
            report.stats.late_count,
            report.stats.overtime_hours,
            report.stats.leave_count
        ]);
        table.printstd();

        let mut weekly = Table::new();
        weekly.add_row(row!["WEEKDAY", "HOURS"]);
        for day in &report.weekly {
            weekly.add_row(row![day.day, day.hours]);
        }
        weekly.printstd();

        let mut departments = Table::new();
        departments.add_row(row!["DEPARTMENT", "RATIO"]);
        for department in &report.departments {
            departments.add_row(row![department.name, format!("{}%", department.ratio)]);
        }
        departments.printstd();

        Ok(())
    }

    pub fn attendance_records(records: &[AttendanceRecord]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "EMPLOYEE", "DEPARTMENT", "IN", "OUT", "TOTAL", "STATUS"]);
        for record in records {
            table.add_row(row![
                record.date,
                record.employee_name,
                record.department,
                record.check_in,
                record.check_out,
                record.total_hours,
                record.status
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn monthly_hours(hours: &[(String, u64)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["EMPLOYEE", "HOURS"]);
        for (name, total) in hours {
            table.add_row(row![name, total]);
        }
        table.printstd();

        Ok(())
    }

    pub fn employees(employees: &[Employee]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "ROLE", "TEAM", "STATUS", "MONTH H", "TOTAL H", "EMAIL", "PHONE", "JOINED"]);
        for employee in employees {
            table.add_row(row![
                employee.id.unwrap_or(0),
                employee.name,
                employee.role,
                employee.team,
                employee.status,
                employee.monthly_hours,
                employee.total_hours,
                employee.email,
                employee.phone,
                employee.join_date.map(|d| d.to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn duty_board(board: &DutyBoard) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SHIFT", "NAME", "ROLE", "TEAM", "PHONE"]);
        for (label, group) in [("current", &board.current), ("next", &board.next)] {
            for employee in group {
                table.add_row(row![label, employee.name, employee.role, employee.team, employee.phone]);
            }
        }
        table.printstd();

        Ok(())
    }

    pub fn notifications(notifications: &[Notification]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "", "KIND", "TITLE", "MESSAGE", "TO", "CREATED"]);
        for notification in notifications {
            table.add_row(row![
                notification.id.unwrap_or(0),
                if notification.is_read { "" } else { "•" },
                notification.kind,
                notification.title,
                notification.message,
                notification.recipient.clone().unwrap_or_default(),
                notification
                    .created_at
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn handovers(receipts: &[HandoverReceipt]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SENT", "TO", "ITEMS", "NOTE"]);
        for receipt in receipts {
            let items: Vec<String> = receipt.items.iter().map(|id| format!("#{id}")).collect();
            table.add_row(row![
                receipt.sent_at.format("%Y-%m-%d %H:%M"),
                receipt.recipient,
                items.join(", "),
                receipt.note
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn activity(entries: &[ActivityLog]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TIME", "USER", "TYPE", "ACTION"]);
        for entry in entries {
            table.add_row(row![entry.timestamp.format("%m-%d %I:%M %p"), entry.user, entry.kind, entry.action]);
        }
        table.printstd();

        Ok(())
    }
}
