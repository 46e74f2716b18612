//! CLI definitions and entry point

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

use roster::config::Config;
use roster::input::LinePolicy;
use roster::shell::{SessionEnd, Shell};

/// Exit code when the session cannot be set up
const EXIT_STARTUP_FAILURE: u8 = 2;

/// roster - Keep a sorted roster of students and their exercise points
#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Keep a sorted roster of students and their exercise points",
    long_about = "Reads one command per line from standard input:\n\n\
                  A <id> <last> <first>   add a student\n\
                  U <id> <round> <points> set one round's points\n\
                  L                       list the roster\n\
                  W <file>                save the roster\n\
                  O <file>                replace the roster from a file\n\
                  Q                       quit"
)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Color SUCCESS and ERROR
    #[arg(long)]
    pub color: bool,

    /// Config file (default: ~/.roster/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory roster files are read from and written to
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Treat a stored total that disagrees with the rounds as file corruption
    #[arg(long)]
    pub strict_totals: bool,

    /// Maximum input line length in bytes, terminator included
    #[arg(long, value_name = "BYTES", value_parser = clap::value_parser!(u16).range(2..))]
    pub max_line_length: Option<u16>,

    /// What to do with longer lines: reject, truncate
    #[arg(long, value_name = "POLICY")]
    pub overlong_lines: Option<LinePolicy>,
}

impl Cli {
    /// Resolve the config file and apply command-line overrides
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };

        if self.json {
            config.output.json = true;
        }
        if self.color {
            config.output.color = true;
        }
        if let Some(dir) = &self.data_dir {
            config.storage.data_dir = Some(dir.clone());
        }
        if self.strict_totals {
            config.storage.strict_totals = true;
        }
        if let Some(max) = self.max_line_length {
            config.input.max_line_length = usize::from(max);
        }
        if let Some(policy) = self.overlong_lines {
            config.input.overlong_lines = policy;
        }

        Ok(config)
    }
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{err:#}");
            eprintln!("Error: {err:#}");
            return ExitCode::from(EXIT_STARTUP_FAILURE);
        },
    };
    debug!("Effective config: {config:?}");

    if config.output.color {
        colored::control::set_override(true);
    }

    let mut shell = Shell::new(config.file_store(), config.renderer(), config.input);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match shell.run(stdin, &mut stdout) {
        Ok(SessionEnd::Quit | SessionEnd::EndOfInput) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        },
    }
}
