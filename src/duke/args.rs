use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "duke", version)]
#[command(about = "Track to-dos, deadlines and events from the terminal", long_about = None)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
