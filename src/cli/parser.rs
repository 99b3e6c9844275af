use crate::export::{ChartFormat, ExportFormat};
use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for eldgraph
/// Render ELD daily logs as duty-status charts
#[derive(Parser)]
#[command(
    name = "eldgraph",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render ELD daily duty-status logs as stepped timeline charts, with hour totals and remarks",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path (useful for tests)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Selects one day of a multi-day input.
#[derive(Args, Debug, Clone, Default)]
pub struct DayArgs {
    #[arg(long = "day", help = "1-based position of the day in the input")]
    pub day: Option<usize>,

    #[arg(
        long = "date",
        conflicts_with = "day",
        help = "Date of the log to use (YYYY-MM-DD)"
    )]
    pub date: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", requires = "edit_config", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Render the duty-status chart of one day
    Render {
        /// Daily log JSON file ('-' for stdin)
        input: String,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, value_enum, help = "Chart format (default from config)")]
        format: Option<ChartFormat>,

        #[command(flatten)]
        day: DayArgs,

        #[arg(long, help = "Chart width in pixels (overrides config)")]
        width: Option<f64>,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },

    /// Print hours per duty status (one day, or every day with trip totals)
    Summary {
        /// Daily log JSON file ('-' for stdin)
        input: String,

        #[command(flatten)]
        day: DayArgs,
    },

    /// Print the activity log & remarks table of one day
    Remarks {
        /// Daily log JSON file ('-' for stdin)
        input: String,

        #[command(flatten)]
        day: DayArgs,
    },

    /// Export the remarks rows of every day
    Export {
        /// Daily log JSON file ('-' for stdin)
        input: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (absolute path)")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file without asking")]
        force: bool,
    },
}
