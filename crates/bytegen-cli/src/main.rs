// crates/bytegen-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::LevelFilter, fmt};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "bytegen")]
#[command(about = "Deterministic text sanitizer / byte generator", long_about = None)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Transform one text value (--text or stdin)
    Text(cmd::text::TextArgs),

    /// Transform a multi-cell CSV row
    Row(cmd::row::RowArgs),

    /// Print the resolved options and their config id
    Config(cmd::show_config::ShowConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Text(args) => cmd::text::run(args),
        Commands::Row(args) => cmd::row::run(args),
        Commands::Config(args) => cmd::show_config::run(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("tracing subscriber already set; skipping re-initialization");
    }
}
