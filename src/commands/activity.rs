use crate::{
    db::{activity_logs::ActivityLogs, db::Db},
    libs::{
        activity::{self, ActivityKind, ActivityLog, RECENT_ACTIVITY_LIMIT},
        messages::Message,
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ActivityArgs {
    #[command(subcommand)]
    command: Option<ActivityCommand>,
    /// How many recent entries to show
    #[arg(short, long, default_value_t = RECENT_ACTIVITY_LIMIT)]
    limit: usize,
}

#[derive(Debug, Subcommand)]
enum ActivityCommand {
    /// Clock in; defaults to the worker on duty today
    In {
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Clock out; defaults to the worker on duty today
    Out {
        #[arg(short, long)]
        user: Option<String>,
    },
}

pub fn cmd(args: ActivityArgs) -> Result<()> {
    match args.command {
        Some(ActivityCommand::In { user }) => handle_clock(user, "Clocked in", ActivityKind::Login),
        Some(ActivityCommand::Out { user }) => handle_clock(user, "Clocked out", ActivityKind::Logout),
        None => handle_recent(args.limit),
    }
}

fn handle_recent(limit: usize) -> Result<()> {
    let entries = ActivityLogs::new(Db::new()?).recent(limit)?;

    if entries.is_empty() {
        msg_info!(Message::NoActivity);
        return Ok(());
    }

    msg_print!(Message::ActivityHeader(entries.len()), true);
    View::activity(&entries)?;
    Ok(())
}

fn handle_clock(user: Option<String>, action: &str, kind: ActivityKind) -> Result<()> {
    let user = match user {
        Some(user) => user,
        None => activity::current_actor()?,
    };

    ActivityLogs::new(Db::new()?).record(&ActivityLog::new(&user, action, kind, Local::now().naive_local()))?;
    msg_success!(Message::ActivityRecorded(user, action.to_string()));
    Ok(())
}
