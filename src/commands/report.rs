use crate::{
    db::{attendance::AttendanceRecords, db::Db, employees::Employees},
    libs::{
        attendance::{self, AttendanceAggregator},
        config::Config,
        messages::Message,
        report::LiveReport,
        schedule::YearMonth,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    command: Option<ReportCommand>,
    /// Narrow the report to one month, YYYY-MM
    #[arg(short, long)]
    month: Option<YearMonth>,
    /// Also list the individual attendance records
    #[arg(short, long)]
    records: bool,
}

#[derive(Debug, Subcommand)]
enum ReportCommand {
    /// Append attendance records from a CSV file
    Import { file: PathBuf },
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    match args.command {
        Some(ReportCommand::Import { file }) => handle_import(file),
        None => handle_report(args.month, args.records),
    }
}

fn handle_report(month: Option<YearMonth>, show_records: bool) -> Result<()> {
    let config = Config::read()?;
    let store = AttendanceRecords::new(Db::new()?);
    let aggregator = AttendanceAggregator::new(config.shift().standard_shift_minutes);

    let live = LiveReport::attach(&store, aggregator, month)?;
    if live.record_count() == 0 {
        msg_info!(Message::NoAttendanceRecords);
        live.detach();
        return Ok(());
    }

    let title = month.map(|m| m.to_string()).unwrap_or_else(|| "all time".to_string());
    msg_print!(Message::AttendanceReportHeader(title, live.record_count()), true);
    View::attendance_report(&live.report())?;
    live.detach();

    if let Some(month) = month {
        let records = store.fetch_month(month.year, month.month)?;
        let hours = attendance::monthly_hours_by_employee(&records, month.year, month.month);

        let mut employees = Employees::new(Db::new()?);
        for (name, total) in &hours {
            employees.set_monthly_hours(name, u32::try_from(*total).unwrap_or(u32::MAX))?;
        }

        msg_print!(Message::MonthlyHoursHeader(month.to_string()), true);
        View::monthly_hours(&hours)?;

        if show_records {
            View::attendance_records(&records)?;
        }
    } else if show_records {
        View::attendance_records(&store.fetch_all()?)?;
    }

    Ok(())
}

fn handle_import(file: PathBuf) -> Result<()> {
    let records = match File::open(&file).map_err(anyhow::Error::from).and_then(attendance::read_csv) {
        Ok(records) => records,
        Err(e) => {
            msg_error!(Message::AttendanceImportFailed(file.display().to_string(), e.to_string()));
            return Ok(());
        }
    };

    let count = AttendanceRecords::new(Db::new()?).import(&records)?;
    msg_success!(Message::AttendanceImported(count));
    Ok(())
}
