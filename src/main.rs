//! spotkit - brand scouting, campaign briefing, and storyboarding CLI

use clap::Parser;

use spotkit::cli::{Cli, Commands};
use spotkit::error::Result;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scout {
            url,
            notes,
            out,
            offline,
        } => commands::cmd_scout(&url, notes.as_deref(), offline, out.as_deref()),

        Commands::Brief { input, out } => commands::cmd_brief(&input, out.as_deref()),
        Commands::Story { input, out } => commands::cmd_story(&input, out.as_deref()),

        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}
