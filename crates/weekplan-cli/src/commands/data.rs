use std::path::PathBuf;

use clap::Subcommand;
use tracing::info;
use weekplan_core::{Config, Fixtures};

use super::{CmdResult, Context};

#[derive(Subcommand)]
pub enum DataAction {
    /// Show where this run's fixtures come from
    Path,
    /// Write the built-in fixtures to a file, as a starting point for editing
    Export {
        /// Destination JSON file
        file: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(action: DataAction) -> CmdResult {
    match action {
        DataAction::Path => {
            let ctx = Context::load()?;
            println!("fixtures: {}", ctx.source);
            println!("default:  {}", Fixtures::default_path()?.display());
            println!("config:   {}", Config::path()?.display());
        }
        DataAction::Export { file, force } => {
            if file.exists() && !force {
                return Err(format!("{} already exists (use --force)", file.display()).into());
            }
            let json = Fixtures::builtin()?.to_json_pretty()?;
            std::fs::write(&file, json)?;
            info!(path = %file.display(), "exported fixtures");
            println!("exported built-in fixtures to {}", file.display());
        }
    }
    Ok(())
}
