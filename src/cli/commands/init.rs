use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes the default
/// configuration file. An existing file is kept unless `--force` is given.
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::resolve_path(cli.config.as_deref());

        info(format!("Initializing eldgraph configuration at {}", path.display()));

        if Config::init(&path, *force)? {
            success(format!("Config file: {}", path.display()));
        } else {
            warning(format!(
                "Config file already exists: {} (use --force to overwrite)",
                path.display()
            ));
        }
    }
    Ok(())
}
