//! Interactive terminal front end: an auth gate followed by the two-mode
//! ledger menu (data entry and visualization).

mod auth_menu;
mod entry;
pub mod output;
mod visualize;

use dialoguer::{theme::ColorfulTheme, Select};
use thiserror::Error;

use crate::auth::{AccountDirectory, AuthError};
use crate::config::{Config, ConfigManager};
use crate::core::services::ServiceError;
use crate::core::utils::{accounts_file_in, app_data_dir};
use crate::errors::StoreError;
use crate::session::Session;
use crate::store::JsonStore;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("input error: {0}")]
    Input(#[from] dialoguer::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// What the gate loop should do after an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    Continue,
    Quit,
}

/// Runs the session gate loop: anonymous visitors get the auth menu,
/// authenticated ones the ledger menu. One interaction per iteration;
/// non-input failures end the interaction, not the process.
pub fn run_cli() -> CliResult<()> {
    let base = app_data_dir();
    let config = ConfigManager::new()?.load()?;
    let mut store = JsonStore::new(config.data_dir.clone())?;
    let mut provider = AccountDirectory::new(accounts_file_in(&base));
    let mut session = Session::new();

    output::section("TrackME");
    loop {
        let outcome = if session.is_authenticated() {
            ledger_menu(&mut store, &mut session, &config)
        } else {
            auth_menu::run(&mut provider, &mut session)
        };
        match outcome {
            Ok(GateAction::Continue) => {}
            Ok(GateAction::Quit) => break,
            Err(err @ CliError::Input(_)) => return Err(err),
            Err(err) => output::error(err),
        }
    }
    Ok(())
}

fn ledger_menu(
    store: &mut JsonStore,
    session: &mut Session,
    config: &Config,
) -> CliResult<GateAction> {
    let theme = ColorfulTheme::default();
    let choice = Select::with_theme(&theme)
        .with_prompt("Menu")
        .items(&["Data Entry", "Data Visualization", "Logout", "Quit"])
        .default(0)
        .interact()?;

    match choice {
        0 => entry::run(store, session, config)?,
        1 => visualize::run(&*store, config)?,
        2 => {
            session.clear();
            output::info("Logged out.");
        }
        _ => return Ok(GateAction::Quit),
    }
    Ok(GateAction::Continue)
}
