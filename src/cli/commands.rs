use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::StorageService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::menu::Session;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::Catalog;
use crate::infrastructure::RealFileSystem;

pub fn execute_command(cli: &Cli, settings: &Settings) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Menu) => _menu(settings),
        Some(Commands::Show { file }) => _show(file, settings),
        Some(Commands::Words { file }) => _words(file),
        Some(Commands::Sorted { file }) => _sorted(file),
        Some(Commands::Config { command }) => _config(command, settings),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

fn storage() -> StorageService {
    StorageService::new(Arc::new(RealFileSystem))
}

#[instrument(skip(settings))]
fn _menu(settings: &Settings) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(storage(), settings.clone(), stdin.lock(), stdout.lock());
    session.run()
}

#[instrument(skip(settings))]
fn _show(file: &Path, settings: &Settings) -> CliResult<()> {
    let catalog = load(file)?;
    debug!("show: {} categories", catalog.len());
    if catalog.is_empty() {
        output::info("No categories.");
    } else {
        output::header("Categories:");
        output::info(&catalog.render(settings.words_per_line));
    }
    Ok(())
}

#[instrument]
fn _words(file: &Path) -> CliResult<()> {
    let catalog = load(file)?;
    for word in catalog.all_words_sorted() {
        output::info(&word);
    }
    Ok(())
}

#[instrument]
fn _sorted(file: &Path) -> CliResult<()> {
    let mut catalog = load(file)?;
    output::info(&catalog.render_all_sorted());
    Ok(())
}

fn _config(command: &ConfigCommands, settings: &Settings) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn load(file: &Path) -> CliResult<Catalog> {
    let mut catalog = Catalog::new();
    storage().load_catalog(&mut catalog, file)?;
    Ok(catalog)
}
