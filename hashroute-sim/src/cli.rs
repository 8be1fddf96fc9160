use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hashroute-sim")]
#[command(version)]
#[command(about = "Drive a hash-fragment router from a script")]
pub struct Cli {
    /// JSON route manifest ({"settings": {...}, "routes": [...]})
    #[arg(short, long)]
    pub manifest: Option<String>,

    /// Page URL the router runs under
    #[arg(short, long, default_value = "http://localhost/")]
    pub base: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute script lines (reads stdin when none are given)
    Run {
        /// Script lines, e.g. "register docs Docs" "navigate docs"
        lines: Vec<String>,
    },

    /// Print the resolved settings and registered routes
    Routes,
}
