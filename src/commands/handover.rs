use crate::{
    db::{activity_logs::ActivityLogs, db::Db, handovers::Handovers, notifications::Notifications, schedules::WorkSchedules, work_logs::WorkLogs},
    libs::{
        activity::{ActivityKind, ActivityLog},
        config::Config,
        daily_log::DailyLog,
        handover::HandoverDraft,
        messages::Message,
        schedule::{self, YearMonth},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};

#[derive(Debug, Args)]
pub struct HandoverArgs {
    #[command(subcommand)]
    command: Option<HandoverCommand>,
    /// Note for the receiving shift
    #[arg(short, long)]
    note: Option<String>,
    /// Work-log ids to hand over, comma separated
    #[arg(short, long, value_delimiter = ',')]
    items: Vec<i64>,
    /// Day whose pending work is handed over
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
enum HandoverCommand {
    /// Previously sent handovers
    History,
}

pub fn cmd(args: HandoverArgs) -> Result<()> {
    match args.command {
        Some(HandoverCommand::History) => handle_history(),
        None => handle_send(args.items, args.note, args.date.unwrap_or_else(|| Local::now().date_naive())),
    }
}

fn handle_send(items: Vec<i64>, note: Option<String>, date: NaiveDate) -> Result<()> {
    let log = DailyLog::open(WorkLogs::new(Db::new()?), date)?;
    let entries = log.entries();
    let pending = log.pending();
    log.close();

    let mut draft = HandoverDraft::new();

    if items.is_empty() && note.is_none() {
        if pending.is_empty() {
            msg_info!(Message::NoPendingWork);
        } else {
            let labels: Vec<String> = pending
                .iter()
                .map(|e| format!("#{} {} [{}] {} - {}", e.id, e.time, e.priority, e.location, e.details))
                .collect();
            let selected = MultiSelect::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptHandoverItems.to_string())
                .items(&labels)
                .interact()?;
            for index in selected {
                draft.toggle(pending[index].id);
            }
        }

        let note: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHandoverNote.to_string())
            .allow_empty(true)
            .interact_text()?;
        draft.set_note(note.trim());
    } else {
        for id in &items {
            if !draft.is_selected(*id) {
                draft.toggle(*id);
            }
        }
        let requested = draft.selected().len();
        draft.retain_pending(&pending);
        let dropped = requested - draft.selected().len();
        if dropped > 0 {
            msg_warning!(Message::HandoverItemsIgnored(dropped));
        }
        if let Some(note) = note {
            draft.set_note(note.trim());
        }
    }

    let roster = Config::read()?.shift().roster();
    let next_day = date.succ_opt().unwrap_or(date);
    let next_month = YearMonth::of(next_day);
    let schedule_store = WorkSchedules::new(Db::new()?);
    let schedules = schedule_store.fetch_month(next_month.year, next_month.month)?;
    let receiving = schedule::receiving_shift(date, &schedules, &roster);
    let this_month = YearMonth::of(date);
    let outgoing = if this_month == next_month {
        schedule::shift_for_day(date, &schedules, &roster)
    } else {
        schedule::shift_for_day(date, &schedule_store.fetch_month(this_month.year, this_month.month)?, &roster)
    };

    let receipt = match draft.submit(&receiving.worker, Local::now().naive_local()) {
        Ok(receipt) => receipt,
        Err(e) => {
            msg_error!(Message::HandoverRejected(e.to_string()));
            return Ok(());
        }
    };

    if let Err(e) = Handovers::new(Db::new()?).record(&receipt) {
        tracing::warn!(error = %e, "handover could not be recorded");
        msg_error!(Message::StoreWriteFailed(e.to_string()));
        return Ok(());
    }
    if let Err(e) = Notifications::new(Db::new()?).create(&receipt.to_notification(&entries)) {
        tracing::warn!(error = %e, "handover notification could not be delivered");
        msg_error!(Message::StoreWriteFailed(e.to_string()));
        return Ok(());
    }

    let clock_out = ActivityLog::new(
        &outgoing.worker,
        &format!("Handed over to {}", receipt.recipient),
        ActivityKind::Logout,
        receipt.sent_at,
    );
    if let Err(e) = ActivityLogs::new(Db::new()?).record(&clock_out) {
        tracing::warn!(error = %e, "handover clock-out could not be recorded");
    }

    tracing::debug!(recipient = %receipt.recipient, items = receipt.items.len(), "handover sent");
    msg_success!(Message::HandoverSent(receipt.recipient.clone(), receipt.items.len()));

    Ok(())
}

fn handle_history() -> Result<()> {
    let receipts = Handovers::new(Db::new()?).fetch_all()?;

    if receipts.is_empty() {
        msg_info!(Message::NoHandovers);
        return Ok(());
    }

    msg_print!(Message::HandoverHistoryHeader, true);
    View::handovers(&receipts)?;
    Ok(())
}
