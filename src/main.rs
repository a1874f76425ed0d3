use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use yt_web::config::{self, load_env, validate_config, youtube_base_url};
use yt_web::database;
use yt_web::error::Result;
use yt_web::server::{AppState, run_server};
use yt_web::views::Views;
use yt_web::youtube::YouTubeConfig;

#[derive(Parser)]
#[command(name = "yt-web")]
#[command(about = "Search YouTube and embed videos from a small web front-end")]
#[command(version)]
struct Cli {
    /// Address to listen on
    #[arg(short, long, env = "YT_WEB_BIND", default_value = config::DEFAULT_BIND)]
    bind: String,

    /// SQLite database path (default: ~/.yt-web/comments.db)
    #[arg(short, long, env = "YT_WEB_DATABASE")]
    database: Option<PathBuf>,
}

async fn run(cli: Cli) -> Result<()> {
    let api_key = validate_config()?;
    let youtube = YouTubeConfig::new(api_key).with_base_url(youtube_base_url());

    let db_path = cli.database.unwrap_or_else(config::database_path);
    let conn = database::open(&db_path)?;
    info!("Database ready at {}", db_path.display());

    let views = Views::new()?;

    run_server(&cli.bind, AppState::new(youtube, views, conn)).await
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables before clap reads its env-backed flags
    load_env();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!(error = %e, "yt-web exited with error");
        std::process::exit(1);
    }
}
