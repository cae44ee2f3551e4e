use clockfill::commands::Cli;
use clockfill::libs::messages::macros::is_debug_mode;
use clockfill::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clockfill=debug"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    if let Err(e) = Cli::menu().await {
        msg_error!(e);
        std::process::exit(1);
    }
}
