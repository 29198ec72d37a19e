use anyhow::Result;
use clap::Parser;
use tokio::runtime;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use uprofile_cli::{
    fetch::{self, ctx::Args},
    utils::extract_info,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch a user profile off the calling thread")]
struct Cli {
    /// Profile page url, e.g. https://profiles.example.com/user/u1
    url: String,
    /// Worker threads reserved for network calls
    #[arg(long, short = 'p', default_value_t = 4)]
    io_threads: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_writer(std::io::stderr)
                .with_filter(
                    EnvFilter::builder()
                        .with_default_directive(LevelFilter::INFO.into())
                        .from_env_lossy(),
                ),
        )
        .init();

    let cli = Cli::parse();
    info!("Started with arguments: {cli:?}");
    let Cli { url, io_threads } = cli;

    let target = match extract_info(&url) {
        Ok(target) => target,
        Err(e) => {
            error!("URL Error: {e}");
            return Ok(());
        }
    };

    let args = Args::builder()
        .user_id(target.user_id)
        .api_base_url(target.base_url)
        .build()?;

    // network calls run on this pool, never on the caller runtime
    let io = runtime::Builder::new_multi_thread()
        .worker_threads(io_threads)
        .thread_name("uprofile-io")
        .enable_all()
        .build()?;
    let caller = runtime::Builder::new_current_thread().build()?;

    let (cancel_tx, cancel_rx) = tokio::sync::oneshot::channel();
    let mut cancel_tx = Some(cancel_tx);
    ctrlc::set_handler(move || {
        info!("Signal handler called");
        if let Some(tx) = cancel_tx.take() {
            let _ = tx.send(());
        }
    })?;

    let io_handle = io.handle().clone();
    caller.block_on(async move {
        tokio::select! {
            res = fetch::fetch_once(&args, io_handle) => {
                let profile = res?;
                if let Some(display_name) = &profile.display_name {
                    info!("user ({}): {display_name}", profile.id);
                }
                println!("{}", uprofile_api::serde_json::to_string_pretty(&profile)?);
            }
            _ = cancel_rx => {
                info!("Fetch cancelled, dropping in-flight request");
            }
        }
        anyhow::Ok(())
    })?;

    info!("Task Exit");

    Ok(())
}
