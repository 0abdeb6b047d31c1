//! Command-line definitions for `dox-server`.

use clap::{Args, Parser, Subcommand};

/// Folder and document drive API server
#[derive(Debug, Parser)]
#[command(name = "dox-server", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load from `config/<env>.toml`
    #[arg(long, env = "DOX_ENV", default_value = "development")]
    pub env: String,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Apply pending database migrations and exit
    Migrate,
}

/// Arguments for the serve command
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Apply database migrations before serving
    #[arg(long)]
    pub migrate: bool,
}

impl Cli {
    /// The command to run, `serve` when none was given.
    pub fn command(self) -> Commands {
        self.command
            .unwrap_or_else(|| Commands::Serve(ServeArgs::default()))
    }
}
