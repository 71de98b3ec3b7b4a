pub mod cli;
pub mod core;

use anyhow::Result;
use tracing::{debug, info};

pub use crate::core::config;

pub enum AppCommand {
    Convert {
        amount: String,
        from: Option<String>,
        to: Option<String>,
        json: bool,
    },
    Session,
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxpair starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Convert {
            amount,
            from,
            to,
            json,
        } => {
            let output = cli::convert::run(&config, &amount, from.as_deref(), to.as_deref(), json)?;
            println!("{output}");
            Ok(())
        }
        AppCommand::Session => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            cli::session::run(&config, stdin.lock(), &mut stdout)
        }
    }
}
