use crate::{
    db::{db::Db, schedules::WorkSchedules},
    libs::{
        config::Config,
        messages::Message,
        schedule::{self, CalendarGrid, YearMonth},
        view::View,
    },
    msg_error, msg_print,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Month to show as YYYY-MM; defaults to the current month
    #[arg(short, long)]
    month: Option<YearMonth>,
    /// Show who is on duty on this day of the month
    #[arg(short, long)]
    day: Option<u32>,
}

pub fn cmd(args: ScheduleArgs) -> Result<()> {
    let today = Local::now().date_naive();
    let month = args.month.unwrap_or_else(|| YearMonth::of(today));
    let roster = Config::read()?.shift().roster();
    let schedules = WorkSchedules::new(Db::new()?).fetch_month(month.year, month.month)?;

    let grid = CalendarGrid::build(month.year, month.month, &schedules, &roster)?;
    msg_print!(Message::ScheduleHeader(month.to_string()), true);
    View::calendar(&grid, today)?;

    if let Some(day) = args.day {
        match NaiveDate::from_ymd_opt(month.year, month.month, day) {
            Some(date) => {
                let shift = schedule::shift_for_day(date, &schedules, &roster);
                View::shift(&shift, today)?;
            }
            None => msg_error!(Message::InvalidDay(day, month.to_string())),
        }
    }

    Ok(())
}
