use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::input::load_logs;
use tracing::debug;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        force,
    } = cmd
    {
        let logs = load_logs(input)?;
        debug!(format = format.as_str(), days = logs.len(), "exporting remarks");
        ExportLogic::export(&logs, *format, file, *force)?;
    }
    Ok(())
}
