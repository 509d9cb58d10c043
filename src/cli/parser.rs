use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rosterview
/// CLI dashboard for personnel schedule rosters stored as JSON
#[derive(Parser)]
#[command(
    name = "rosterview",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple roster dashboard CLI: search, paginate, and render JSON schedule data",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or custom data)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data files
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Render the dashboard view (table + pagination)
    View {
        /// Case-insensitive substring matched against every field
        #[arg(long, short, help = "Filter records by a free-text search term")]
        search: Option<String>,

        /// Page number; invalid or out-of-range values fall back into range
        #[arg(
            long,
            short,
            allow_hyphen_values = true,
            help = "Page to display (defaults to 1)"
        )]
        page: Option<String>,

        #[arg(long = "page-size", help = "Rows per page (overrides the config)")]
        page_size: Option<usize>,

        /// Also write the view as an HTML fragment to FILE
        #[arg(long = "html", value_name = "FILE")]
        html: Option<String>,
    },

    /// Export the (optionally filtered) record set
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Export only records matching a search term")]
        search: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
