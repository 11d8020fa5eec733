//! CLI entry point for settings-model
//!
//! Prints the demo settings (optionally loaded from a file) and, with the
//! `gtk` feature, opens them in a settings window.

use clap::{Parser, Subcommand};
use colored::*;
use settings_model::config::SettingsFile;
use settings_model::settings::{
    BooleanSetting, FileSetting, SettingType, SettingsRegistry, StringSetting,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "settings-model")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the settings and their current values
    Show {
        /// Settings file to load values from
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print the JSON document instead of a listing
        #[arg(long)]
        json: bool,
    },

    /// Edit the settings in a GTK4 window
    #[cfg(feature = "gtk")]
    Gui {
        /// Settings file to load from and save to on Apply
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file, json } => show_settings(file.as_deref(), json)?,
        #[cfg(feature = "gtk")]
        Commands::Gui { file } => run_gui(file.as_deref())?,
    }

    Ok(())
}

/// The settings this binary demonstrates
fn demo_registry() -> anyhow::Result<SettingsRegistry> {
    let mut dark_mode = BooleanSetting::new("dark_mode");
    dark_mode.with_label("Dark mode").with_tip("Use the dark colour scheme");

    let mut autosave = BooleanSetting::with_value("autosave", true);
    autosave.with_label("Autosave");

    let mut author = StringSetting::new("author");
    author.with_label("Author").with_tip("Name written into exported files");

    let mut export_path = FileSetting::new("export_path");
    export_path
        .with_label("Export file")
        .with_tip("Where exports are written");

    let mut window_state = StringSetting::new("window_state");
    window_state.hide();

    let mut registry = SettingsRegistry::new();
    registry.register(dark_mode)?;
    registry.register(autosave)?;
    registry.register(author)?;
    registry.register(export_path)?;
    registry.register(window_state)?;

    Ok(registry)
}

/// Expands `~` and wraps the path as a settings file
fn settings_file(path: &Path) -> anyhow::Result<SettingsFile> {
    let expanded = shellexpand::tilde(
        path.to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(SettingsFile::new(expanded.into_owned()))
}

/// Builds the demo registry and loads `file` into it when it exists
fn load_registry(file: Option<&Path>) -> anyhow::Result<(SettingsRegistry, Option<SettingsFile>)> {
    let mut registry = demo_registry()?;

    let file = file.map(settings_file).transpose()?;
    if let Some(file) = &file {
        if file.exists() {
            let loaded = file.load_into(&mut registry)?;
            eprintln!(
                "{} Loaded {} setting{} from {}",
                "✓".green(),
                loaded,
                if loaded == 1 { "" } else { "s" },
                file.path().display()
            );
        } else {
            eprintln!(
                "{} {} does not exist, using defaults",
                "→".cyan(),
                file.path().display()
            );
        }
    }

    Ok((registry, file))
}

/// Print every setting, or the JSON document
fn show_settings(file: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let (registry, _) = load_registry(file)?;

    if json {
        println!("{}", registry.to_json_string()?);
        return Ok(());
    }

    for setting in registry.iter() {
        let kind = format!("{:<7}", setting.kind().to_string()).magenta();
        let id = setting.id().cyan().bold();
        let value = match registry.string_value(setting.id()) {
            Some(text) if text.is_empty() => "(unset)".dimmed().to_string(),
            Some(text) => text,
            None => registry
                .bool_value(setting.id())
                .map(|b| b.to_string())
                .unwrap_or_default(),
        };
        let hidden = if setting.is_hidden() {
            " [hidden]".dimmed().to_string()
        } else {
            String::new()
        };

        println!("{} {} = {}{}", kind, id, value, hidden);
    }

    println!("\n{} Total: {} settings", "✓".green(), registry.len());

    Ok(())
}

#[cfg(feature = "gtk")]
fn run_gui(file: Option<&Path>) -> anyhow::Result<()> {
    use settings_model::ui::gtk::App;

    let (registry, file) = load_registry(file)?;
    let registry = App::new(registry, file)
        .run()
        .map_err(|e| anyhow::anyhow!("Settings were not saved: {}", e))?;

    println!("{}", registry.to_json_string()?);
    Ok(())
}
