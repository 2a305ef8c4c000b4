use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stardeck")]
#[command(author, version, about)]
#[command(long_about = "A slide-based pitch deck presenter.\n\n\
    Present the built-in deck, or point stardeck at a JSON slide catalog.\n\n\
    Examples:\n  \
    stardeck                       Present the built-in deck (fullscreen)\n  \
    stardeck deck.json             Present a deck from a catalog file\n  \
    stardeck --windowed            Launch in a window\n  \
    stardeck export-kit -o kit.zip Write the investor kit archive\n  \
    stardeck ai init               Configure the AI hook generator")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// JSON deck file to present (defaults to the built-in deck)
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long, global = false)]
    pub slide: Option<usize>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure the AI provider for the hook-generator slide
    Ai {
        #[command(subcommand)]
        command: AiCommands,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Write the investor kit archive to disk
    ExportKit {
        /// JSON deck file to bundle (defaults to the built-in deck)
        file: Option<PathBuf>,

        /// Output path for the ZIP archive
        #[arg(short, long, default_value = crate::export::DEFAULT_KIT_NAME)]
        output: PathBuf,
    },

    /// Print the slide catalog as JSON
    Dump {
        /// JSON deck file to dump (defaults to the built-in deck)
        file: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum AiCommands {
    /// Store the generation API key and model
    Init,

    /// Show current AI configuration
    Status,

    /// Remove AI configuration
    Remove,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.windowed, ai.model)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Ai { command }) => crate::commands::ai::run(command),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::ExportKit { file, output }) => {
                crate::commands::export_kit::run(file.as_deref(), &output)
            }
            Some(Commands::Dump { file }) => crate::commands::dump::run(file.as_deref()),
            Some(Commands::Version) => {
                println!("stardeck {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                if let Some(file) = &self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                }
                crate::app::run(self.file, self.windowed, self.slide)
            }
        }
    }
}
