use crate::{
    db::{attendance::AttendanceRecords, db::Db, work_logs::WorkLogs},
    libs::{
        attendance::AttendanceAggregator,
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        schedule::YearMonth,
        worklog::WorkLogFilter,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum)]
    data: ExportData,
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Only work logs of this day
    #[arg(short, long)]
    date: Option<NaiveDate>,
    /// Only attendance of this month, YYYY-MM
    #[arg(short, long)]
    month: Option<YearMonth>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let exporter = Exporter::new(args.format, args.data, args.output);

    let result = match args.data {
        ExportData::Logs => {
            let filter = args.date.map(WorkLogFilter::Date).unwrap_or(WorkLogFilter::All);
            let entries = WorkLogs::new(Db::new()?).fetch(filter)?;
            exporter.export_logs(&entries)
        }
        ExportData::Report => {
            let store = AttendanceRecords::new(Db::new()?);
            let records = match args.month {
                Some(month) => store.fetch_month(month.year, month.month)?,
                None => store.fetch_all()?,
            };
            let aggregator = AttendanceAggregator::new(Config::read()?.shift().standard_shift_minutes);
            exporter.export_report(&aggregator.aggregate(&records))
        }
    };

    match result {
        Ok(()) => msg_success!(Message::ExportCompleted(exporter.output_path().display().to_string())),
        Err(e) => {
            tracing::warn!(error = %e, "export failed");
            msg_error!(Message::ExportFailed(e.to_string()));
        }
    }
    Ok(())
}
