//! Command-line interface for shiftdesk.
//!
//! Each subcommand lives in its own module with a `clap` argument struct and
//! a `cmd` entry point. Commands open the stores they need, call into
//! `libs` for the rules and print through the message macros and table
//! views. Failures of a single operation are reported to the user and the
//! command still returns normally; only setup failures (database, config)
//! propagate out of `menu`.

pub mod activity;
pub mod employee;
pub mod export;
pub mod handover;
pub mod init;
pub mod log;
pub mod notify;
pub mod report;
pub mod schedule;
pub mod seed;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Record and track daily work logs")]
    Log(log::LogArgs),
    #[command(about = "Hand pending work over to the next shift")]
    Handover(handover::HandoverArgs),
    #[command(about = "Show the monthly duty calendar")]
    Schedule(schedule::ScheduleArgs),
    #[command(about = "Seed a month of schedules, a starter roster and the activity trail")]
    Seed(seed::SeedArgs),
    #[command(about = "Attendance report and import")]
    Report(report::ReportArgs),
    #[command(about = "Manage the employee roster")]
    Employee(employee::EmployeeArgs),
    #[command(about = "Read and manage notifications")]
    Notify(notify::NotifyArgs),
    #[command(about = "Export work logs or the attendance report")]
    Export(export::ExportArgs),
    #[command(about = "Recent activity, clock-in and clock-out")]
    Activity(activity::ActivityArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Log(args) => log::cmd(args),
            Commands::Handover(args) => handover::cmd(args),
            Commands::Schedule(args) => schedule::cmd(args),
            Commands::Seed(args) => seed::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Employee(args) => employee::cmd(args),
            Commands::Notify(args) => notify::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Activity(args) => activity::cmd(args),
        }
    }
}
