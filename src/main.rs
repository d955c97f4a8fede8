#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use startup_bust::{init_logging, make_rng, run_cli, GameSession, StdConsole};

#[derive(Parser)]
#[command(author, version, about = "Sink three startups on a 7x7 grid", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(
        long,
        help = "Log level (off, error, warn, info, debug, trace); overrides STARTUP_BUST_LOG"
    )]
    log_level: Option<LevelFilter>,
    #[arg(long, help = "Print where the startups are before play starts")]
    reveal: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = make_rng(cli.seed);
    let mut session = GameSession::new();
    session.set_up(&mut rng)?;

    let mut console = StdConsole::stdio();
    if run_cli(&mut session, &mut console, cli.reveal)?.is_none() {
        eprintln!("Input closed; game abandoned.");
    }
    Ok(())
}
