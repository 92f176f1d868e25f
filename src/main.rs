// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use clap::{Parser, ValueEnum};
use log::{debug, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use sitelingo::app_config::{self, Config, TranslationProvider};
use sitelingo::language_utils;
use sitelingo::{Controller, LanguagePair};

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    #[value(name = "openai")]
    OpenAI,
    Anthropic,
    Ollama,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::OpenAI => TranslationProvider::OpenAI,
            CliTranslationProvider::Anthropic => TranslationProvider::Anthropic,
            CliTranslationProvider::Ollama => TranslationProvider::Ollama,
        }
    }
}

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

/// sitelingo - translate a static site's content tree with AI
///
/// Translates the Markdown files under `pages`, `_posts` and `blog` and
/// writes them to `<SOURCE_DIR>/<TARGET_CODE>/`, keeping the same layout.
#[derive(Parser, Debug)]
#[command(name = "sitelingo")]
#[command(version)]
#[command(about = "AI-powered static site content translation")]
#[command(long_about = "sitelingo translates front matter and Markdown bodies of a static site into another language.

EXAMPLES:
    sitelingo ./site English French fr               # Translate into ./site/fr/
    sitelingo -p anthropic ./site English German de  # Use a specific provider
    sitelingo --delay-ms 0 -p ollama ./site English Spanish es

Files whose translation already exists are skipped, so an interrupted run
can be started again with the same arguments.

CREDENTIALS:
    openai    - OPENAI_API_KEY, or --api-key / SITELINGO_API_KEY
    anthropic - ANTHROPIC_API_KEY, or --api-key / SITELINGO_API_KEY
    ollama    - none (local server)")]
struct CommandLineOptions {
    /// Root of the site containing the content directories
    #[arg(value_name = "SOURCE_DIR")]
    source_dir: PathBuf,

    /// Name of the source language (e.g. 'English')
    #[arg(value_name = "SOURCE_LANGUAGE")]
    source_language: String,

    /// Name of the destination language (e.g. 'French')
    #[arg(value_name = "TARGET_LANGUAGE")]
    target_language: String,

    /// Short code of the destination language (e.g. 'fr')
    #[arg(value_name = "TARGET_CODE")]
    target_code: String,

    /// Configuration file path
    #[arg(short, long, default_value = "sitelingo.json")]
    config_path: PathBuf,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// API key for the provider
    #[arg(long, env = "SITELINGO_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Pause between files in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Do not draw a progress bar
    #[arg(long)]
    no_progress: bool,
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
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Color escape and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌"),
            Level::Warn => ("\x1B[1;33m", "🚧"),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "🔍"),
            Level::Trace => ("\x1B[1;35m", "📋"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Wrong argument counts print usage and exit non-zero here
    let options = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let mut config = Config::load_or_default(&options.config_path)?;

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.translation.provider = provider.clone().into();
    }

    if let Some(model) = &options.model {
        config.translation.active_provider_config_mut().model = model.clone();
    }

    if let Some(api_key) = &options.api_key {
        config.translation.active_provider_config_mut().api_key = api_key.clone();
    }

    if let Some(delay_ms) = options.delay_ms {
        config.translation.common.request_delay_ms = delay_ms;
    }

    match &options.log_level {
        Some(log_level) => config.log_level = log_level.clone().into(),
        None => log::set_max_level(level_filter(&config.log_level)),
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;
    app_config::validate_target_code(&options.target_code)?;

    if !options.source_dir.is_dir() {
        return Err(anyhow!("Source directory does not exist: {:?}", options.source_dir));
    }

    if let Ok(name) = language_utils::get_language_name(&options.target_code) {
        debug!("Destination code '{}' is {}", options.target_code, name);
    }

    info!(
        "Using {} with model {}",
        config.translation.provider.display_name(),
        config.translation.get_model()
    );

    let languages = LanguagePair::new(
        options.source_language.clone(),
        options.target_language.clone(),
        options.target_code.clone(),
    );

    let controller = Controller::with_config(config)?
        .show_progress(!options.no_progress);

    controller.run(&options.source_dir, &languages).await?;

    Ok(())
}
