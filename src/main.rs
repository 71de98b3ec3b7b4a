use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxpair::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fxpair::AppCommand {
    fn from(cmd: Commands) -> fxpair::AppCommand {
        match cmd {
            Commands::Convert {
                amount,
                from,
                to,
                json,
            } => fxpair::AppCommand::Convert {
                amount,
                from,
                to,
                json,
            },
            Commands::Session => fxpair::AppCommand::Session,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount from one currency to another
    Convert {
        /// Amount to convert; non-numeric input converts as zero
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Source currency (defaults to currency_a from the config)
        #[arg(short, long)]
        from: Option<String>,
        /// Target currency (defaults to currency_b from the config)
        #[arg(short, long)]
        to: Option<String>,
        /// Print the resulting fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Start an interactive two-field converter
    Session,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxpair::cli::setup::setup(),
        Some(cmd) => fxpair::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
