use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        path,
    } = cmd
    {
        let cfg_path = Config::config_file();

        if *path {
            println!("{}", cfg_path.display());
        }

        if *print_config {
            println!("📄 Current configuration:\n");
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("cannot serialize configuration: {e}")))?;
            println!("{yaml}");
        }

        if *check {
            let missing = Config::missing_fields()?;
            if missing.is_empty() {
                messages::success("Configuration file is complete.");
            } else {
                for key in missing {
                    messages::warning(format!("Missing configuration key: {key}"));
                }
            }
        }
    }

    Ok(())
}
