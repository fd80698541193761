use crate::{
    db::{activity_logs::ActivityLogs, db::Db, employees::Employees, schedules::WorkSchedules},
    libs::{
        activity,
        config::Config,
        employee,
        messages::Message,
        schedule::{self, YearMonth},
    },
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Month to plan as YYYY-MM; defaults to the current month
    #[arg(short, long)]
    month: Option<YearMonth>,
}

pub fn cmd(args: SeedArgs) -> Result<()> {
    let now = Local::now().naive_local();
    let today = now.date();
    let month = args.month.unwrap_or_else(|| YearMonth::of(today));
    let roster = Config::read()?.shift().roster();

    let plan = schedule::plan_month(month.year, month.month, &roster, today)?;
    match WorkSchedules::new(Db::new()?).seed_if_empty(&plan)? {
        0 => msg_info!(Message::SchedulesAlreadySeeded),
        count => msg_success!(Message::SchedulesSeeded(count, month.to_string())),
    }

    match Employees::new(Db::new()?).seed_if_empty(&employee::starter_roster(&roster, today))? {
        0 => msg_info!(Message::EmployeesAlreadySeeded),
        count => msg_success!(Message::EmployeesSeeded(count)),
    }

    match ActivityLogs::new(Db::new()?).seed_if_empty(&activity::starter_activity(&roster, now))? {
        0 => msg_info!(Message::ActivityAlreadySeeded),
        count => msg_success!(Message::ActivitySeeded(count)),
    }

    Ok(())
}
