use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use promptbox::StoreError;
use promptbox::cli::Args;
use promptbox::commands::{self, Context, response};
use promptbox::config::AppPaths;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let paths = AppPaths::resolve(args.data_dir.as_deref());
    info!("Using data directory {}", paths.data_dir.display());

    let ctx = Context::new(paths, args.json);

    let Err(e) = commands::dispatch(args.command, &ctx).await else {
        return Ok(());
    };

    let cancelled = e
        .downcast_ref::<StoreError>()
        .is_some_and(StoreError::is_cancelled);

    if ctx.json {
        response::print(&response::failure(&e))?;
    } else if cancelled {
        println!("{}", e);
    } else {
        eprintln!("Error: {:#}", e);
    }

    if cancelled {
        info!("{}", e);
        return Ok(());
    }

    error!("{:#}", e);
    std::process::exit(1);
}
