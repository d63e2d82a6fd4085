//! CLI entry point for sway-keybind-help
//!
//! Opens the cheat-sheet window by default, or prints the bindings
//! to the terminal with `list`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::info;

use sway_keybind_help::config::{ConfigPaths, DEFAULT_KEYBINDINGS, DEFAULT_MAIN_CONFIG};
use sway_keybind_help::instance::InstanceLock;
use sway_keybind_help::logging;
use sway_keybind_help::ui::{App, Controller};

#[derive(Parser)]
#[command(name = "sway-keybind-help")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the main sway config (source of $mod)
    #[arg(short, long, global = true, default_value = DEFAULT_MAIN_CONFIG)]
    config: PathBuf,

    /// Path to the keybindings file
    #[arg(short, long, global = true, default_value = DEFAULT_KEYBINDINGS)]
    keybindings: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the cheat-sheet window (default)
    Gui,

    /// Print all keybindings to the terminal
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let paths = ConfigPaths::new(&cli.config, &cli.keybindings)?;

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => run_gui(&paths),
        Commands::List { json } => list_keybindings(&paths, json),
    }
}

/// Load the files, claim the instance lock and show the window
fn run_gui(paths: &ConfigPaths) -> anyhow::Result<()> {
    let controller = load_controller(paths)?;

    let Some(lock) = InstanceLock::acquire(InstanceLock::default_path())? else {
        // Another instance owns the window
        return Ok(());
    };
    lock.install_panic_cleanup();

    info!(bindings = controller.binding_count(), "opening cheat-sheet");
    let exit_code = App::new(controller).run();

    drop(lock);

    if exit_code != glib::ExitCode::SUCCESS {
        anyhow::bail!("GTK application exited with an error");
    }

    Ok(())
}

/// List all keybindings in the config
fn list_keybindings(paths: &ConfigPaths, json: bool) -> anyhow::Result<()> {
    let controller = load_controller(paths)?;

    if json {
        let output = serde_json::to_string_pretty(&controller)
            .context("Failed to serialise keybindings")?;
        println!("{}", output);
        return Ok(());
    }

    println!(
        "{}",
        format!("Keybindings from: {}\n", paths.keybindings.display()).bold()
    );
    println!("{}\n", controller.modifier_summary().yellow());

    for binding in controller.bindings() {
        println!(
            "{} {} {}",
            format!("{:<24}", binding.binding).cyan().bold(),
            binding.command.green(),
            format!("# {}", binding.description).dimmed(),
        );
    }

    println!("\n{} Total: {} bindings", "✓".green(), controller.binding_count());

    Ok(())
}

fn load_controller(paths: &ConfigPaths) -> anyhow::Result<Controller> {
    Controller::load(paths).with_context(|| {
        format!(
            "Failed to load keybindings from {}",
            paths.keybindings.display()
        )
    })
}
