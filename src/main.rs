//! genpick - terminal picker for question-generation settings

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use genpick::config::{Action, Config};
use genpick::{App, CATALOG, paths, suggestion, tui};
use std::path::{Path, PathBuf};

/// Pick the AI model and suggestion mode used to generate questions
#[derive(Debug, Parser)]
#[command(name = "genpick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in intelligent suggestion mode
    #[arg(long)]
    intelligent: bool,

    /// Preselect a model by id (see `genpick models`)
    #[arg(long, value_name = "ID")]
    model: Option<String>,

    /// Source text file used for the suggested question count
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the available models
    Models {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the configured keybindings
    Keys,
    /// Print the traditional suggested question count for a text file
    Suggest {
        /// Source text file
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let log_path = paths::log_path();

    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        if let Err(e) = std::fs::write(&log_path, "") {
            eprintln!("Warning: Failed to clear log file: {e}");
        }

        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let directory = log_path
            .parent()
            .map_or_else(std::env::temp_dir, PathBuf::from);
        let file_appender = tracing_appender::rolling::never(directory, "genpick.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Models { json }) => cmd_models(json),
        Some(Commands::Keys) => {
            cmd_keys(&config);
            Ok(())
        }
        Some(Commands::Suggest { path }) => {
            let text = read_source_text(&path)?;
            println!("{}", cmd_suggest(&config, &text));
            Ok(())
        }
        None => {
            let mut app = App::new(config);
            if let Some(path) = &cli.input {
                app.set_source_text(&read_source_text(path)?);
            }
            tui::run(app)
        }
    }
}

/// Load the config file and apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.intelligent {
        config.start_mode = genpick::ui::SuggestionMode::Intelligent;
    }
    if let Some(model) = &cli.model {
        config.default_model = Some(model.clone());
    }
    config
        .validate()
        .context("Invalid command-line options")?;

    Ok(config)
}

fn cmd_models(json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(CATALOG).context("Failed to serialize catalog")?;
        println!("{out}");
        return Ok(());
    }

    for option in CATALOG {
        println!("{:<10} {:<20} {}", option.id, option.name, option.description);
    }
    Ok(())
}

fn read_source_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read source text from {}", path.display()))
}

fn cmd_suggest(config: &Config, text: &str) -> u32 {
    suggestion::suggested_questions(suggestion::word_count(text), &config.suggestion)
}

fn cmd_keys(config: &Config) {
    for action in Action::ALL {
        println!("{}", config.keys.help_line(*action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genpick::ui::SuggestionMode;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_cli_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["genpick"])?;
        assert!(cli.config.is_none());
        assert!(!cli.intelligent);
        assert!(cli.model.is_none());
        assert!(cli.input.is_none());
        assert!(cli.command.is_none());
        Ok(())
    }

    #[test]
    fn test_cli_models_json() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["genpick", "models", "--json"])?;
        assert!(matches!(cli.command, Some(Commands::Models { json: true })));
        Ok(())
    }

    #[test]
    fn test_cli_keys() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["genpick", "keys"])?;
        assert!(matches!(cli.command, Some(Commands::Keys)));
        Ok(())
    }

    #[test]
    fn test_cli_suggest_and_input() -> Result<(), Box<dyn std::error::Error>> {
        let cli = Cli::try_parse_from(["genpick", "--input", "tema.txt"])?;
        assert_eq!(cli.input, Some(PathBuf::from("tema.txt")));

        let cli = Cli::try_parse_from(["genpick", "suggest", "tema.txt"])?;
        assert!(matches!(cli.command, Some(Commands::Suggest { path }) if path == Path::new("tema.txt")));
        Ok(())
    }

    #[test]
    fn test_cmd_suggest_uses_config() {
        let text = vec!["palabra"; 120].join(" ");
        assert_eq!(cmd_suggest(&Config::default(), &text), 1);

        let mut config = Config::default();
        config.suggestion.words_per_question = 50;
        assert_eq!(cmd_suggest(&config, &text), 2);
        assert_eq!(cmd_suggest(&config, "   "), 1);
    }

    #[test]
    fn test_read_source_text_missing_file() {
        let err = read_source_text(Path::new("/nonexistent/genpick/tema.txt"));
        assert!(err.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["genpick", "--bogus"]).is_err());
    }

    #[test]
    fn test_load_config_applies_overrides() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, serde_json::to_string(&Config::default())?)?;

        let cli = Cli::try_parse_from([
            "genpick",
            "--config",
            path.to_str().ok_or("non-utf8 temp path")?,
            "--intelligent",
            "--model",
            "xai",
        ])?;
        let config = load_config(&cli)?;

        assert_eq!(config.start_mode, SuggestionMode::Intelligent);
        assert_eq!(config.default_model.as_deref(), Some("xai"));
        Ok(())
    }

    #[test]
    fn test_load_config_rejects_unknown_model() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{}")?;

        let cli = Cli::try_parse_from([
            "genpick",
            "--config",
            path.to_str().ok_or("non-utf8 temp path")?,
            "--model",
            "mistral",
        ])?;
        assert!(load_config(&cli).is_err());
        Ok(())
    }

    #[test]
    fn test_models_listing_matches_catalog() {
        assert!(cmd_models(false).is_ok());
        assert!(cmd_models(true).is_ok());
        assert!(genpick::catalog::find("alibaba").is_some());
    }
}
