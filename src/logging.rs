//! Diagnostic logging setup (`tracing` + `tracing-subscriber`).
//!
//! Filter precedence: `ELDGRAPH_LOG` env var, then `-v` count, then the
//! `log_level` of the config file. Output goes to stderr so it never mixes
//! with rendered tables on stdout.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "ELDGRAPH_LOG";

pub fn level_for(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

pub fn init(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("eldgraph={}", level_for(verbose, configured))));

    // A second init (tests calling run twice) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
