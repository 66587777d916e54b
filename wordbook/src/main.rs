use std::path::PathBuf;

use app::App;
use audio::AudioPlayer;
use clap::Parser;
use config::Config;
use dictionary::Dictionary;
use theme::Theme;
use tracing_subscriber::EnvFilter;

mod app;
mod audio;
mod config;
mod render;
mod search;
mod status;
mod theme;
mod utilities;

/// Look up English words from the terminal
#[derive(Parser, Debug)]
#[command(name = "wordbook")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word to look up right away
    #[arg(value_name = "WORD")]
    word: Option<String>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start with the dark theme
    #[arg(short, long)]
    dark: bool,

    /// Verbose logging to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (config, config_error) = match Config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(error) => (Config::default(), Some(error)),
    };

    init_tracing(args.verbose, &config.log.level);
    if let Some(error) = config_error {
        tracing::warn!(%error, "could not load config, using defaults");
    }
    tracing::info!("Starting wordbook v{}", env!("CARGO_PKG_VERSION"));

    let theme = Theme::from_dark(args.dark || config.ui.dark);
    let mut app = App::new(Dictionary::new(), AudioPlayer::new(&config.audio), theme);
    if let Some(word) = args.word {
        app.handle_line(&word);
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    app.run(stdin).await?;
    Ok(())
}

fn init_tracing(verbose: u8, configured: &str) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(configured))
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
