//! Export of work logs and the attendance report to CSV, JSON or Excel.
//!
//! The [`Exporter`] only formats data it is handed; gathering rows from the
//! stores is the command layer's job. Without an explicit output path a
//! timestamped file name in the current directory is used.
//!
//! ```rust,no_run
//! use shiftdesk::libs::export::{ExportData, ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, ExportData::Logs, None);
//! exporter.export_logs(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::attendance::AttendanceReport;
use crate::libs::worklog::WorkLogEntry;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    /// `.xlsx` workbook with a bold header row
    Excel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Work-log entries
    Logs,
    /// Attendance report: counters, weekday hours, department shares
    Report,
}

const LOG_HEADERS: [&str; 10] = ["ID", "Date", "Time", "Kind", "Category", "Details", "Location", "Priority", "Status", "Photo"];

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, data: ExportData, output_path: Option<PathBuf>) -> Self {
        let stem = match data {
            ExportData::Logs => "logs",
            ExportData::Report => "report",
        };
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "shiftdesk_{}_{}.{}",
                stem,
                Local::now().format("%Y%m%d_%H%M%S"),
                extension
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_logs(&self, entries: &[WorkLogEntry]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_logs_csv(entries),
            ExportFormat::Json => self.write_json(entries),
            ExportFormat::Excel => self.export_logs_excel(entries),
        }
    }

    pub fn export_report(&self, report: &AttendanceReport) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_report_csv(report),
            ExportFormat::Json => self.write_json(report),
            ExportFormat::Excel => self.export_report_excel(report),
        }
    }

    fn write_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_logs_csv(&self, entries: &[WorkLogEntry]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(LOG_HEADERS)?;
        for entry in entries {
            wtr.write_record(log_row(entry))?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_report_csv(&self, report: &AttendanceReport) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["SUMMARY", ""])?;
        for (label, value) in summary_rows(report) {
            wtr.write_record([label.to_string(), value.to_string()])?;
        }

        wtr.write_record(["", ""])?;
        wtr.write_record(["WEEKDAY", "Hours"])?;
        for day in &report.weekly {
            wtr.write_record([day.day.clone(), day.hours.to_string()])?;
        }

        wtr.write_record(["", ""])?;
        wtr.write_record(["DEPARTMENT", "Ratio"])?;
        for department in &report.departments {
            wtr.write_record([department.name.clone(), format!("{}%", department.ratio)])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_logs_excel(&self, entries: &[WorkLogEntry]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = header_format();

        for (col, header) in LOG_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        for (i, entry) in entries.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_number(row, 0, entry.id as f64)?;
            for (col, value) in log_row(entry).iter().enumerate().skip(1) {
                worksheet.write_string(row, col as u16, value)?;
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_report_excel(&self, report: &AttendanceReport) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = header_format();

        let mut row = 0;
        worksheet.write_string_with_format(row, 0, "SUMMARY", &header_format)?;
        for (label, value) in summary_rows(report) {
            row += 1;
            worksheet.write_string(row, 0, label)?;
            worksheet.write_number(row, 1, value as f64)?;
        }

        row += 2;
        write_section_header(worksheet, row, "Weekday", "Hours", &header_format)?;
        for day in &report.weekly {
            row += 1;
            worksheet.write_string(row, 0, &day.day)?;
            worksheet.write_number(row, 1, day.hours as f64)?;
        }

        row += 2;
        write_section_header(worksheet, row, "Department", "Ratio (%)", &header_format)?;
        for department in &report.departments {
            row += 1;
            worksheet.write_string(row, 0, &department.name)?;
            worksheet.write_number(row, 1, department.ratio as f64)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn header_format() -> Format {
    Format::new().set_bold().set_background_color(Color::Gray)
}

fn write_section_header(worksheet: &mut Worksheet, row: u32, left: &str, right: &str, format: &Format) -> Result<()> {
    worksheet.write_string_with_format(row, 0, left, format)?;
    worksheet.write_string_with_format(row, 1, right, format)?;
    Ok(())
}

fn summary_rows(report: &AttendanceReport) -> [(&'static str, u64); 4] {
    [
        ("Total Hours", report.stats.total_hours),
        ("Late", report.stats.late_count as u64),
        ("Overtime Hours", report.stats.overtime_hours),
        ("Leave", report.stats.leave_count as u64),
    ]
}

fn log_row(entry: &WorkLogEntry) -> [String; 10] {
    [
        entry.id.to_string(),
        entry.date.to_string(),
        entry.time.clone(),
        entry.kind.to_string(),
        entry.category.clone(),
        entry.details.clone(),
        entry.location.clone(),
        entry.priority.to_string(),
        entry.status.to_string(),
        entry.photo_url.clone().unwrap_or_default(),
    ]
}
