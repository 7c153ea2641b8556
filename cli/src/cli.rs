use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "outcome")]
#[command(
    author,
    version,
    about = "Call an API and report the classified outcome of the request"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a request and print its outcome
    Fetch {
        /// Request path, joined onto the configured base_url (absolute URLs are used as-is)
        path: String,

        /// HTTP method
        #[clap(short = 'X', long, default_value = "GET")]
        method: String,

        /// Request body
        #[clap(short = 'd', long)]
        data: Option<String>,

        /// Extra header in "Name: value" form (repeatable)
        #[clap(short = 'H', long = "header")]
        headers: Vec<String>,

        /// Query parameter in key=value form (repeatable)
        #[clap(short, long)]
        query: Vec<String>,

        /// Configuration file path (defaults to outcome.toml)
        #[clap(short, long, default_value = "outcome.toml")]
        config: String,

        /// Do not show a spinner while the request runs
        #[clap(long, default_value_t = false)]
        no_progress: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Write a default configuration file
    Init {
        /// Configuration file path (defaults to outcome.toml)
        #[clap(short, long, default_value = "outcome.toml")]
        config: String,

        /// Overwrite an existing file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}
