use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use animal_farm::demo::{self, Section};
use animal_farm::{output, Farm};

mod browser;

/// Animal Farm - animals with swappable actions and duties
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Demo section to run
    #[arg(short, long, value_enum, default_value_t = Section::All)]
    section: Section,

    /// Do not wait for Enter between sections
    #[arg(long)]
    no_pause: bool,

    /// Print the farm roster status as JSON
    #[arg(short = 'j', long, conflicts_with = "interactive")]
    json: bool,

    /// Print the farm roster status as text
    #[arg(short = 'r', long, conflicts_with_all = ["json", "interactive"])]
    roster: bool,

    /// Start the interactive farm console
    #[arg(short = 'i', long, conflicts_with = "json")]
    interactive: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(section = ?cli.section, json = cli.json, interactive = cli.interactive, "starting");

    if cli.json {
        return output::output_json(&Farm::sunny_meadows().statuses());
    }

    if cli.roster {
        return output::output_text(&Farm::sunny_meadows().statuses());
    }

    if cli.interactive {
        return browser::run_browser(Farm::sunny_meadows());
    }

    let stdin = io::stdin();
    let pausing = !cli.no_pause && stdin.is_terminal();
    let mut stdout = io::stdout().lock();

    if pausing {
        let mut reader = stdin.lock();
        demo::run(cli.section, &mut stdout, Some(&mut reader))
    } else {
        demo::run(cli.section, &mut stdout, None)
    }
}
