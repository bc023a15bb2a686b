use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::Commands;
use cli::form;
use translatr::config::{self, Config};
use translatr::translate::{LanguagePolicy, TranslationRequest, Translator, preview};

fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("translatr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("translatr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => run_interactive(config),
        Some(Commands::Translate {
            text,
            language,
            dry_run,
        }) => handle_translate_command(text.as_deref(), language.as_deref(), *dry_run, config),
        Some(Commands::Languages) => {
            form::print_languages(&config.translation.default_language, &mut io::stdout())
        }
    }
}

fn run_interactive(config: &Config) -> Result<()> {
    info!("Launching interactive form");
    let translator = Translator::from_config(config).context("Failed to create translator")?;
    let stdin = io::stdin();
    let count = form::run_form(
        &translator,
        &config.translation.default_language,
        stdin.lock(),
        io::stdout(),
    )?;
    info!("Interactive form closed after {} translations", count);
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}

fn handle_translate_command(
    text: Option<&str>,
    language: Option<&str>,
    dry_run: bool,
    config: &Config,
) -> Result<()> {
    let text = match text {
        Some(t) => t.to_string(),
        None => read_stdin()?,
    };
    let language = language.unwrap_or(&config.translation.default_language);
    let request = TranslationRequest::new(text, language);
    info!("Translating into {}", language);

    if dry_run {
        let policy = LanguagePolicy::from_strict(config.translation.strict_languages);
        for message in preview(&request, policy)? {
            println!("{} {}", format!("[{}]", message.role).cyan(), message.content);
        }
        return Ok(());
    }

    let translator = Translator::from_config(config).context("Failed to create translator")?;
    let translation = translator.translate(&request).context("Translation failed")?;
    form::print_translation(&translation, &mut io::stdout())?;
    Ok(())
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging first
    setup_logging(cli.is_verbose()).context("Failed to setup logging")?;

    // Load configuration
    let mut config = config::load_config(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    config.validate().context("Invalid configuration")?;

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
