use clap::Parser;
use directories::ProjectDirs;
use duke::api::DukeApi;
use duke::config::{DukeConfig, HOME_ENV};
use duke::error::{DukeError, Result};
use duke::store::fs::FileStorage;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod print;
mod repl;
use args::Cli;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let data_dir = data_dir()?;
    let config = DukeConfig::load(&data_dir)?;
    let path = cli.file.unwrap_or_else(|| config.data_path(&data_dir));
    tracing::debug!(path = %path.display(), "using task file");

    let mut api = DukeApi::new(FileStorage::new(path));
    let loaded = api.load()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print::write_greeting(&mut out, loaded)?;

    let mut lines = io::stdin().lock().lines();
    let mut err = io::stderr().lock();
    Ok(repl::run(&mut api, &mut lines, &mut out, &mut err)?)
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "duke", "duke")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            DukeError::Io(io::Error::other(format!(
                "could not determine a data directory; set {}",
                HOME_ENV
            )))
        })
}
