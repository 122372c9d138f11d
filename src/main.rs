// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{info, log, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use chat2ass::{Controller, LogLevel};
use chat2ass::file_utils::FileManager;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert transcript txt files to ass subtitle files
    #[command(alias = "c")]
    Convert(ConvertArgs),

    /// Write a starter style configuration
    InitConfig {
        /// Where to write the configuration
        #[arg(short, long, default_value = "config.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for chat2ass
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// List of transcript files
    #[arg(short, long, num_args = 1.., required = true)]
    input: Vec<PathBuf>,

    /// List of output subtitle files (defaults to <input>.ass)
    #[arg(short, long, num_args = 1..)]
    output: Vec<PathBuf>,

    /// Style configuration file path
    #[arg(short, long, default_value = "config.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// chat2ass - chat transcripts to ASS subtitles
///
/// Renders each chat message of a transcript as a styled bubble in an
/// Advanced SubStation Alpha subtitle file.
#[derive(Parser, Debug)]
#[command(name = "chat2ass")]
#[command(version)]
#[command(about = "Convert chat transcripts into styled ASS subtitles")]
#[command(long_about = "chat2ass renders timestamped chat transcripts as ASS subtitle files.

EXAMPLES:
    chat2ass convert -i chat.txt                          # Writes chat.txt.ass
    chat2ass c -i a.txt b.txt -o a.ass b.ass              # Explicit output paths
    chat2ass convert -i chat.txt -c styles/config.json    # Use another style config
    chat2ass init-config                                  # Write a starter config.json
    chat2ass completions bash > chat2ass.bash             # Generate bash completions

TRANSCRIPT FORMAT:
    0:00:01.500,0:00:04.200
    username: comment text

CONFIGURATION:
    Styles are read from config.json in the working directory by default.
    It holds \"Script Info\", \"V4+ Styles\" and an optional \"Layout\" object.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Marker and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("✖", "\x1B[1;31m"),
            Level::Warn => ("!", "\x1B[1;33m"),
            Level::Info => ("•", "\x1B[1;32m"),
            Level::Debug => ("›", "\x1B[1;36m"),
            Level::Trace => ("·", "\x1B[1;35m"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (marker, color) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                color, now, marker, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Trace is the ceiling; log::set_max_level narrows it below
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Convert(args) => run_convert(args),
        Commands::InitConfig { path, force } => run_init_config(path, force),
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "chat2ass", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn run_convert(args: ConvertArgs) -> Result<()> {
    if let Some(level) = args.log_level {
        log::set_max_level(LogLevel::from(level).to_level_filter());
    }

    let controller = Controller::new(args.config_path).with_console(true);
    let report = controller
        .run(&args.input, &args.output)
        .context("No files were converted")?;

    if report.failed() > 0 {
        log!(report.summary_level(), "{} of {} file(s) failed", report.failed(), report.outcomes.len());
    }
    Ok(())
}

fn run_init_config(path: PathBuf, force: bool) -> Result<()> {
    FileManager::write_default_config(&path, force)
        .with_context(|| format!("Failed to write default config to file: {:?}", path))?;

    info!("Default style configuration written to {:?}", path);
    Ok(())
}
