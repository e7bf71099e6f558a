//! The `config show` command: display the effective configuration.

use crate::cli::ConfigShowArgs;
use crate::config;
use crate::error::Result;
use crate::exit_codes;

/// Print the effective configuration as pretty JSON.
pub fn cmd_show(args: ConfigShowArgs) -> Result<i32> {
    let config = config::load_config(args.config.as_deref())?;
    println!("{}", config.to_json()?);
    Ok(exit_codes::SUCCESS)
}
