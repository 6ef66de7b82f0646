//! PromptMatrix - style-preset prompt composer
//!
//! CLI entry point.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use promptmatrix::cli::{Cli, Command, ComposeArgs, OutputFormat};
use promptmatrix::config::Config;
use promptmatrix::host::{CommandClipboard, DirectoryDownloader, FilePreferences};
use promptmatrix::{ComposerInput, ComposerSession, Field, PromptError, PromptSection, StyleCatalog, ThemeController};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("promptmatrix")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::File::create(log_dir.join("promptmatrix.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let catalog = load_catalog(&config)?;

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::Styles => cmd_styles(&config, &catalog),
        Command::Show { style } => cmd_show(&catalog, &style),
        Command::Compose(args) => cmd_compose(&config, catalog, args).await,
        Command::Theme { name } => cmd_theme(&config, name.as_deref()),
    }
}

fn load_catalog(config: &Config) -> Result<StyleCatalog> {
    let catalog = StyleCatalog::builtin();
    match &config.presets_file {
        Some(path) => catalog
            .with_presets_file(path)
            .context(format!("Failed to load presets from {}", path.display())),
        None => Ok(catalog),
    }
}

fn cmd_styles(config: &Config, catalog: &StyleCatalog) -> Result<()> {
    for preset in catalog.iter() {
        let marker = if preset.id == config.default_style { "*" } else { " " };
        println!("{} {:<10} {}", marker, preset.id.cyan(), preset.label);
    }
    Ok(())
}

fn cmd_show(catalog: &StyleCatalog, style: &str) -> Result<()> {
    let preset = catalog
        .get(style)
        .ok_or_else(|| PromptError::UnknownStyle { id: style.to_string() })?;

    println!("{} ({})", preset.label.bold(), preset.id.cyan());
    println!();
    println!("{}", "System".yellow());
    println!("{}", preset.system_instruction);
    print_numbered("Constraints", &preset.constraints);
    print_numbered("Output format", &preset.output_format_hints);
    Ok(())
}

fn print_numbered(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!();
    println!("{}", title.yellow());
    for (idx, item) in items.iter().enumerate() {
        println!("{}. {}", idx + 1, item);
    }
}

/// JSON shape of `compose --format json`
#[derive(Serialize)]
struct ComposeOutput<'a> {
    style: &'a str,
    label: &'a str,
    sections: Vec<PromptSection>,
    text: String,
    char_count: usize,
}

async fn cmd_compose(config: &Config, catalog: StyleCatalog, args: ComposeArgs) -> Result<()> {
    let mut session = ComposerSession::new(catalog);
    session.select_style(&config.default_style);

    if let Some(path) = &args.input {
        let input = load_input(path)?;
        if let Some(style) = &input.style {
            session.select_style(style);
        }
        session.set_fields(input.fields);
    }
    if let Some(style) = &args.style {
        session.select_style(style);
    }

    let examples = match &args.examples_file {
        Some(path) => Some(
            fs::read_to_string(path).context(format!("Failed to read examples from {}", path.display()))?,
        ),
        None => args.examples.clone(),
    };
    let flags = [
        (Field::TaskSummary, args.task.clone()),
        (Field::Tone, args.tone.clone()),
        (Field::Audience, args.audience.clone()),
        (Field::SystemOverride, args.system.clone()),
        (Field::UserOverride, args.user.clone()),
        (Field::Examples, examples),
        (Field::ConstraintsOverride, args.constraints.clone()),
        (Field::OutputFormatOverride, args.output_format.clone()),
    ];
    for (field, value) in flags {
        if let Some(value) = value {
            session.set_field(field, value);
        }
    }

    let preview = session.preview();
    match args.format {
        OutputFormat::Plain => print!("{}", preview.text),
        OutputFormat::Markdown => print!("{}", session.markdown_document()),
        OutputFormat::Json => {
            let style = session.active_style();
            let output = ComposeOutput {
                style: &style.id,
                label: &style.label,
                sections: session.sections(),
                text: preview.text.clone(),
                char_count: preview.char_count,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if args.stats {
        eprintln!("{}", preview.style_label.dimmed());
        eprintln!("{}", preview.length_label.dimmed());
    }

    if args.copy {
        match CommandClipboard::from_command_line(&config.clipboard_command) {
            Some(clipboard) => {
                let ok = session.copy(&clipboard).await;
                let label = session.copy_status().label();
                if ok {
                    eprintln!("{} {}", "✓".green(), label);
                } else {
                    eprintln!("{} {}", "✗".red(), label);
                }
            }
            None => warn!("No clipboard command configured, skipping copy"),
        }
    }

    if let Some(dir) = args.export {
        let dir = dir.unwrap_or_else(|| config.export_dir.clone());
        let mut downloader = DirectoryDownloader::new(&dir);
        if session.export(&mut downloader) {
            let path = dir.join(session.export_filename());
            eprintln!("{} {} {}", "✓".green(), session.export_status().label(), path.display());
        } else {
            eprintln!("{} Export to {} failed", "✗".red(), dir.display());
        }
    }

    Ok(())
}

fn load_input(path: &Path) -> Result<ComposerInput> {
    let content = fs::read_to_string(path).context(format!("Failed to read input file {}", path.display()))?;
    let input: ComposerInput =
        serde_yaml::from_str(&content).context(format!("Failed to parse input file {}", path.display()))?;
    info!("Loaded prompt input from {}", path.display());
    Ok(input)
}

fn cmd_theme(config: &Config, name: Option<&str>) -> Result<()> {
    let mut controller = ThemeController::new(FilePreferences::new(&config.preferences_file));
    let theme = match name {
        Some(name) => controller.apply_theme(name),
        None => controller.load_initial_theme(),
    };
    println!("{}", theme);
    Ok(())
}
