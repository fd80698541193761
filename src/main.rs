use shiftdesk::{commands::Cli, libs::messages::macros::is_debug_mode, msg_error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "shiftdesk=debug".into()))
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init();
    }

    if let Err(e) = Cli::menu().await {
        msg_error!(e);
        std::process::exit(1);
    }
}
