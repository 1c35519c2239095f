//! Interactive drinks-round tracker.
//!
//! Loads people, drinks and favourites from the data directory, runs the
//! numbered main menu, and saves everything when the operator exits.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use rounds::app::App;
use rounds::exit_codes;
use rounds::io::config::load_config;
use rounds::io::console::StdConsole;
use rounds::logging;
use rounds::menu::run_menu;

#[derive(Parser)]
#[command(
    name = "rounds",
    version,
    about = "Track people, favourite drinks and drink rounds"
)]
struct Cli {
    /// TOML config file; defaults apply when it does not exist.
    #[arg(long, default_value = "rounds.toml")]
    config: PathBuf,

    /// Directory for people/drinks/favourites files (overrides config).
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        process::exit(exit_codes::FAILED);
    }
    process::exit(exit_codes::OK);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = load_config(&cli.config)?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let console = StdConsole::new(config.clear_screen);
    let mut app = App::open(config, console)?;
    run_menu(&mut app)
}
