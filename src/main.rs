use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use festlist::{
    cli, config, error,
    lineup::SampleSize,
    logging, utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Log level for diagnostic output (RUST_LOG takes precedence)
    #[clap(long, global = true, default_value = "info")]
    log_level: String,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve the lineup and sample top tracks, optionally filling the playlist
    Run(RunArgs),

    /// Print the festival lineup
    Performers(SourceArgs),

    /// Resolve a single performer name against Spotify
    Resolve(ResolveArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SourceArgs {
    /// Read the lineup from a local JSON file instead of the festival feed
    #[clap(long = "config")]
    pub config_file: Option<PathBuf>,

    /// Festival page-data URL (overrides FEST_PAGE_DATA_URL)
    #[clap(long, conflicts_with = "config_file")]
    pub feed_url: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct RunArgs {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Tracks sampled per artist (default 3, or the value in the lineup file)
    #[clap(long, value_parser = utils::parse_sample_size, allow_negative_numbers = true)]
    pub sample_size: Option<SampleSize>,

    /// Insert the sampled tracks into the configured playlist
    #[clap(long)]
    pub update_playlist: bool,

    /// Seed for reproducible sampling
    #[clap(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct ResolveArgs {
    /// Performer name as listed by the festival
    pub name: String,

    /// Tracks to sample from the resolved artist
    #[clap(long, value_parser = utils::parse_sample_size, allow_negative_numbers = true)]
    pub sample_size: Option<SampleSize>,

    /// Seed for reproducible sampling
    #[clap(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn load_config() -> config::Config {
    match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    match cli.command {
        Command::Run(args) => {
            let config = load_config();
            let opts = cli::RunOptions {
                config_file: args.source.config_file,
                feed_url: args.source.feed_url,
                sample_size: args.sample_size,
                update_playlist: args.update_playlist,
                seed: args.seed,
            };
            cli::run(&config, opts).await
        }
        Command::Performers(args) => cli::performers(args.config_file, args.feed_url).await,
        Command::Resolve(args) => {
            let config = load_config();
            cli::resolve(&config, args.name, args.sample_size, args.seed).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        }
    }
}
