use crate::{
    db::{db::Db, work_logs::WorkLogs},
    libs::{
        activity,
        config::Config,
        daily_log::{DailyLog, DailyLogError},
        messages::Message,
        photos::{self, LocalPhotoStore},
        view::View,
        worklog::{self, LogStatus, Priority, TaskKind, WorkLogForm},
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LogArgs {
    #[command(subcommand)]
    command: Option<LogCommand>,
}

#[derive(Debug, Subcommand)]
enum LogCommand {
    /// Record new work; prompts for anything not given
    Add {
        #[arg(short, long)]
        kind: Option<TaskKind>,
        #[arg(short, long)]
        time: Option<String>,
        #[arg(short, long)]
        location: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        priority: Option<Priority>,
        #[arg(short = 'm', long)]
        details: Option<String>,
        /// Photo file to attach
        #[arg(long)]
        photo: Option<PathBuf>,
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    List {
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Mark work as in progress
    Start { id: i64 },
    Complete { id: i64 },
    Status { id: i64, status: LogStatus },
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Entries still needing attention: unfinished or urgent
    Pending {
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
}

pub fn cmd(args: LogArgs) -> Result<()> {
    match args.command {
        Some(LogCommand::Add {
            kind,
            time,
            location,
            category,
            priority,
            details,
            photo,
            date,
        }) => {
            let form = WorkLogForm {
                kind: kind.unwrap_or(TaskKind::Pest),
                time: time.unwrap_or_else(|| Local::now().format("%H:%M").to_string()),
                location: location.unwrap_or_default(),
                category: category.unwrap_or_default(),
                priority: priority.unwrap_or(Priority::Normal),
                details: details.unwrap_or_default(),
                photo_url: None,
            };
            handle_add(form, photo, date.unwrap_or_else(today))
        }
        Some(LogCommand::List { date }) => handle_list(date.unwrap_or_else(today)),
        Some(LogCommand::Start { id }) => handle_status(id, LogStatus::InProgress),
        Some(LogCommand::Complete { id }) => handle_status(id, LogStatus::Completed),
        Some(LogCommand::Status { id, status }) => handle_status(id, status),
        Some(LogCommand::Delete { id, yes }) => handle_delete(id, yes),
        Some(LogCommand::Pending { date }) => handle_pending(date.unwrap_or_else(today)),
        None => handle_list(today()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn open_log(date: NaiveDate) -> Result<DailyLog<WorkLogs>> {
    DailyLog::open(WorkLogs::new(Db::new()?).with_actor(&activity::current_actor()?), date)
}

/// Prints a failed workflow operation; the command itself still succeeds.
fn report_failure(err: DailyLogError) {
    match err {
        DailyLogError::Rejected(e) => msg_error!(Message::WorkLogRejected(e.to_string())),
        DailyLogError::Store(e) => {
            tracing::warn!(error = %e, "work log store write failed");
            msg_error!(Message::StoreWriteFailed(e.to_string()));
        }
    }
}

fn handle_add(mut form: WorkLogForm, photo: Option<PathBuf>, date: NaiveDate) -> Result<()> {
    let config = Config::read()?;
    let facility = config.facility();

    if form.location.is_empty() || form.details.is_empty() {
        let theme = ColorfulTheme::default();

        let kind = Select::with_theme(&theme)
            .with_prompt(Message::PromptTaskKind.to_string())
            .items(TaskKind::ALL)
            .default(TaskKind::ALL.iter().position(|k| *k == form.kind).unwrap_or(0))
            .interact()?;
        form.kind = TaskKind::ALL[kind];

        if form.location.is_empty() {
            let locations = worklog::location_options(&facility);
            let location = Select::with_theme(&theme)
                .with_prompt(Message::PromptLocation.to_string())
                .items(&locations)
                .default(0)
                .interact()?;
            form.location = locations[location].clone();
        }

        if form.category.is_empty() {
            let category = Select::with_theme(&theme)
                .with_prompt(Message::PromptCategory.to_string())
                .items(&facility.categories)
                .default(0)
                .interact()?;
            form.category = facility.categories[category].clone();
        }

        let priority = Select::with_theme(&theme)
            .with_prompt(Message::PromptPriority.to_string())
            .items(Priority::ALL)
            .default(Priority::ALL.iter().position(|p| *p == form.priority).unwrap_or(0))
            .interact()?;
        form.priority = Priority::ALL[priority];

        form.time = Input::with_theme(&theme)
            .with_prompt(Message::PromptTime.to_string())
            .default(form.time.clone())
            .interact_text()?;

        form.details = Input::with_theme(&theme)
            .with_prompt(Message::PromptDetails.to_string())
            .default(form.details.clone())
            .allow_empty(true)
            .interact_text()?;
    }

    if form.category.is_empty() {
        form.category = facility.categories.first().cloned().unwrap_or_default();
    }

    // Nothing is uploaded for an entry that would be rejected.
    if let Err(e) = form.validate(date) {
        msg_error!(Message::WorkLogRejected(e.to_string()));
        return Ok(());
    }

    if let Some(path) = photo {
        let store = match config.photo_directory() {
            Some(dir) => LocalPhotoStore::new(dir),
            None => LocalPhotoStore::in_data_dir()?,
        };
        match photos::upload_file(&store, &path) {
            Ok(url) => form.photo_url = Some(url),
            Err(e) => {
                tracing::warn!(error = ?e, path = %path.display(), "photo upload failed");
                msg_error!(Message::PhotoUploadFailed(e.to_string()));
                return Ok(());
            }
        }
    }

    let mut log = open_log(date)?;
    match log.create(&mut form) {
        Ok(id) => msg_success!(Message::WorkLogCreated(id)),
        Err(e) => report_failure(e),
    }
    log.close();

    Ok(())
}

fn handle_list(date: NaiveDate) -> Result<()> {
    let log = open_log(date)?;
    let entries = log.entries();

    if entries.is_empty() {
        msg_info!(Message::NoWorkLogs(date.to_string()));
    } else {
        msg_print!(Message::WorkLogsHeader(date.to_string()), true);
        View::work_logs(&entries)?;
        View::daily_stats(&log.stats())?;
    }
    log.close();

    Ok(())
}

fn handle_status(id: i64, status: LogStatus) -> Result<()> {
    let mut log = open_log(today())?;
    match log.change_status(id, status) {
        Ok(()) => msg_success!(Message::WorkLogStatusChanged(id, status.to_string())),
        Err(e) => report_failure(e),
    }
    log.close();

    Ok(())
}

fn handle_delete(id: i64, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteWorkLog(id).to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let mut log = open_log(today())?;
    match log.delete(id) {
        Ok(()) => msg_success!(Message::WorkLogDeleted(id)),
        Err(e) => report_failure(e),
    }
    log.close();

    Ok(())
}

fn handle_pending(date: NaiveDate) -> Result<()> {
    let log = open_log(date)?;
    let pending = log.pending();

    if pending.is_empty() {
        msg_info!(Message::NoPendingWork);
    } else {
        msg_print!(Message::PendingHeader(date.to_string()), true);
        View::work_logs(&pending)?;
    }
    log.close();

    Ok(())
}
