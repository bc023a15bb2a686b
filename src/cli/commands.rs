//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - translate: translate text once
//! - languages: list supported languages
//! - (none): interactive form

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// translatr - Translate text with a hosted language model
#[derive(Parser, Debug)]
#[command(name = "translatr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the configured model
    #[arg(short, long, global = true)]
    pub model: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate text into a target language
    Translate {
        /// Text to translate (read from stdin when omitted)
        text: Option<String>,

        /// Target language (defaults to translation.default-language)
        #[arg(short = 't', long = "to")]
        language: Option<String>,

        /// Print the rendered prompt instead of calling the model
        #[arg(long)]
        dry_run: bool,
    },

    /// List supported target languages
    Languages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translate() {
        let cli = Cli::parse_from(["translatr", "translate", "Hello", "--to", "French"]);
        match cli.command {
            Some(Commands::Translate { text, language, dry_run }) => {
                assert_eq!(text.as_deref(), Some("Hello"));
                assert_eq!(language.as_deref(), Some("French"));
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_translate_stdin_dry_run() {
        let cli = Cli::parse_from(["translatr", "translate", "-t", "German", "--dry-run"]);
        match cli.command {
            Some(Commands::Translate { text, dry_run, .. }) => {
                assert!(text.is_none());
                assert!(dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from([
            "translatr",
            "--verbose",
            "--model",
            "llama-3.1-8b-instant",
            "--config",
            "/tmp/t.yml",
            "languages",
        ]);
        assert!(cli.is_verbose());
        assert_eq!(cli.model.as_deref(), Some("llama-3.1-8b-instant"));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.yml")));
        assert!(matches!(cli.command, Some(Commands::Languages)));
    }

    #[test]
    fn test_parse_no_subcommand() {
        let cli = Cli::parse_from(["translatr"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
