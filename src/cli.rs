use clap::{Parser, Subcommand, ValueEnum};

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "spotkit")]
#[command(author, version, about = "Turn a brand's web page into a creative brief and a five-scene storyboard", long_about = None)]
#[command(after_help = r#"Examples:
  spotkit scout --url https://example.com --out snapshot.json    Extract brand facts
  spotkit brief --input snapshot.json --out brief.json           Derive campaign brief
  spotkit story --input brief.json --out story.json              Expand to storyboard
  spotkit scout --url https://example.com --offline              Demo data, no request

Pipeline:
  scout -> brief -> story. Each stage reads the previous stage's JSON,
  so any file can be inspected or hand-edited between steps.
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scout a brand's website into a structured snapshot
    #[command(after_help = r#"Examples:
  spotkit scout --url https://example.com                  Print snapshot to stdout
  spotkit scout --url https://example.com --out snap.json  Write snapshot to a file
  spotkit scout --url https://example.com --notes "VIP client, launch in May"
  spotkit scout --url https://example.com --offline        Fixed demo data, no request
"#)]
    Scout {
        /// Website URL of the brand
        #[arg(long)]
        url: String,

        /// Client notes to carry into the snapshot's offers
        #[arg(long)]
        notes: Option<String>,

        /// Output JSON file (prints to stdout if omitted)
        #[arg(long)]
        out: Option<String>,

        /// Skip the HTTP request and emit fixed demo data
        #[arg(long)]
        offline: bool,
    },

    /// Turn a snapshot into a campaign brief
    #[command(after_help = r#"Examples:
  spotkit brief --input snapshot.json                      Print brief to stdout
  spotkit brief --input snapshot.json --out brief.json     Write brief to a file
"#)]
    Brief {
        /// Snapshot JSON file from the scout stage
        #[arg(long)]
        input: String,

        /// Output JSON file (prints to stdout if omitted)
        #[arg(long)]
        out: Option<String>,
    },

    /// Turn a brief into a five-scene video storyboard
    #[command(after_help = r#"Examples:
  spotkit story --input brief.json                         Print storyboard to stdout
  spotkit story --input brief.json --out story.json        Write storyboard to a file
"#)]
    Story {
        /// Brief JSON file from the brief stage
        #[arg(long)]
        input: String,

        /// Output JSON file (prints to stdout if omitted)
        #[arg(long)]
        out: Option<String>,
    },

    /// Generate shell completions
    #[command(after_help = r#"Examples:
  spotkit completions bash >> ~/.bashrc           Add bash completions
  spotkit completions zsh >> ~/.zshrc             Add zsh completions
  spotkit completions fish > ~/.config/fish/completions/spotkit.fish
  spotkit completions powershell >> $PROFILE      Add PowerShell completions
"#)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}
