// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod footnotes;
mod language_utils;
mod links;
mod typography;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Groom documents: fix links, typography and footnotes (default command)
    #[command(alias = "fix")]
    Groom(GroomArgs),

    /// Generate shell completions for textgroom
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct GroomArgs {
    /// Input document file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Document language code (e.g., 'en', 'ru', 'es')
    #[arg(short, long)]
    language: Option<String>,

    /// Output directory (default: next to each input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Rewrite input files in place
    #[arg(short, long)]
    in_place: bool,

    /// Keep a timestamped backup when rewriting in place
    #[arg(short, long, requires = "in_place")]
    backup: bool,

    /// Validate footnote consistency only; write nothing
    #[arg(long)]
    check: bool,

    /// Skip the bare-URL link fixer
    #[arg(long)]
    no_links: bool,

    /// Skip the typography fixer
    #[arg(long)]
    no_typography: bool,

    /// Skip the footnote fixer
    #[arg(long)]
    no_footnotes: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// textgroom - plain-text document grooming
///
/// Normalizes typography per language, rewrites bare URLs into markup
/// links, and renumbers footnotes while refusing to write anything when
/// references and definitions disagree.
#[derive(Parser, Debug)]
#[command(name = "textgroom")]
#[command(version = "0.1.0")]
#[command(about = "Typography, link and footnote fixer for plain-text documents")]
#[command(long_about = "textgroom prepares plain-text documents for publication: language-aware
typography, bare-URL linkification, and footnote renumbering with hard
consistency checking.

EXAMPLES:
    textgroom book.txt                      # Groom using default config
    textgroom -l ru book.txt                # Russian typography profile
    textgroom -f book.txt                   # Force overwrite existing output
    textgroom -i -b book.txt                # In place, with a backup
    textgroom --check book.txt              # Validate footnotes, write nothing
    textgroom --no-typography book.txt      # Skip a fixer
    textgroom /documents/                   # Process a whole directory
    textgroom completions bash > textgroom.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input document file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Document language code (e.g., 'en', 'ru', 'es')
    #[arg(short, long)]
    language: Option<String>,

    /// Output directory (default: next to each input file)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Rewrite input files in place
    #[arg(short, long)]
    in_place: bool,

    /// Keep a timestamped backup when rewriting in place
    #[arg(short, long, requires = "in_place")]
    backup: bool,

    /// Validate footnote consistency only; write nothing
    #[arg(long)]
    check: bool,

    /// Skip the bare-URL link fixer
    #[arg(long)]
    no_links: bool,

    /// Skip the typography fixer
    #[arg(long)]
    no_typography: bool,

    /// Skip the footnote fixer
    #[arg(long)]
    no_footnotes: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "textgroom", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Groom(args)) => run_groom(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("INPUT_PATH is required when no subcommand is specified"))?;

            let groom_args = GroomArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                language: cli.language,
                output_dir: cli.output_dir,
                in_place: cli.in_place,
                backup: cli.backup,
                check: cli.check,
                no_links: cli.no_links,
                no_typography: cli.no_typography,
                no_footnotes: cli.no_footnotes,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_groom(groom_args).await
        }
    }
}

async fn run_groom(options: GroomArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;
        config
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(language) = &options.language {
        config.language = language.clone();
    }
    if options.in_place {
        config.in_place = true;
    }
    if options.backup {
        config.backup = true;
    }
    if options.no_links {
        config.fixes.links = false;
    }
    if options.no_typography {
        config.fixes.typography = false;
    }
    if options.no_footnotes {
        config.fixes.footnotes = false;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    // Create controller
    let controller = Controller::with_config(config.clone())?;

    // Check-only mode validates footnotes and writes nothing
    if options.check {
        let consistent = if options.input_path.is_file() {
            controller.check(options.input_path.clone()).await?
        } else if options.input_path.is_dir() {
            controller.check_folder(options.input_path.clone()).await?
        } else {
            return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
        };

        if !consistent {
            return Err(anyhow!("Footnote consistency check failed"));
        }
        return Ok(());
    }

    // Run the controller with the input file(s) and output directory
    if options.input_path.is_file() {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options
                .input_path
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf()
        });
        controller
            .run(options.input_path.clone(), output_dir, options.force_overwrite)
            .await
    } else if options.input_path.is_dir() {
        controller
            .run_folder(options.input_path.clone(), options.force_overwrite)
            .await
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}
