use crate::{
    db::{db::Db, notifications::Notifications},
    libs::{
        messages::Message,
        notification::{Notification, NotificationFilter, NotificationKind},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct NotifyArgs {
    #[command(subcommand)]
    command: Option<NotifyCommand>,
}

#[derive(Debug, Subcommand)]
enum NotifyCommand {
    List {
        #[arg(short, long)]
        unread: bool,
    },
    /// Post a notification
    Send {
        title: String,
        message: String,
        #[arg(short, long, default_value = "info")]
        kind: NotificationKind,
        #[arg(short, long, default_value = "")]
        category: String,
        /// Addressee; facility-wide when omitted
        #[arg(short, long)]
        to: Option<String>,
    },
    Read {
        id: i64,
    },
    ReadAll,
    Delete {
        id: i64,
    },
}

pub fn cmd(args: NotifyArgs) -> Result<()> {
    let mut notifications = Notifications::new(Db::new()?);

    match args.command {
        Some(NotifyCommand::List { unread }) => handle_list(&notifications, unread),
        None => handle_list(&notifications, false),
        Some(NotifyCommand::Send {
            title,
            message,
            kind,
            category,
            to,
        }) => {
            let mut notification = Notification::new(&title, &message, kind, &category);
            if let Some(recipient) = to {
                notification = notification.to(&recipient);
            }
            let id = notifications.create(&notification)?;
            msg_success!(Message::NotificationSent(id));
            Ok(())
        }
        Some(NotifyCommand::Read { id }) => {
            notifications.mark_read(id)?;
            msg_success!(Message::NotificationRead(id));
            Ok(())
        }
        Some(NotifyCommand::ReadAll) => {
            let count = notifications.mark_all_read()?;
            msg_success!(Message::NotificationsReadAll(count));
            Ok(())
        }
        Some(NotifyCommand::Delete { id }) => {
            notifications.delete(id)?;
            msg_success!(Message::NotificationDeleted(id));
            Ok(())
        }
    }
}

fn handle_list(notifications: &Notifications, unread_only: bool) -> Result<()> {
    let filter = if unread_only {
        NotificationFilter::Unread
    } else {
        NotificationFilter::All
    };
    let items = notifications.fetch(filter)?;

    if items.is_empty() {
        msg_info!(Message::NoNotifications);
        return Ok(());
    }

    msg_print!(Message::NotificationsHeader(notifications.unread_count()?), true);
    View::notifications(&items)?;
    Ok(())
}
