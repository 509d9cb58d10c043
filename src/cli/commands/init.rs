use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty data file at the configured path (if missing)
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rosterview…");

    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    println!("🎉 rosterview initialization completed!");
    Ok(())
}
