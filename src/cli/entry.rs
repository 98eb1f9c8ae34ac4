use chrono::Local;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::config::Config;
use crate::core::services::EntryService;
use crate::domain::{Month, Period, EXPENSE_CATEGORIES, INCOME_CATEGORIES};
use crate::session::Session;
use crate::store::DocumentStore;

use super::{output, CliResult};

/// Data Entry mode: pick a period, fill one non-negative amount per fixed
/// category, and save both documents under the derived period key.
pub fn run(store: &mut dyn DocumentStore, session: &Session, config: &Config) -> CliResult<()> {
    let Some(user) = session.user() else {
        // The gate only routes authenticated sessions here.
        return Ok(());
    };
    let theme = ColorfulTheme::default();
    output::section(format!("Data Entry in {}", config.currency));

    let years = Period::selectable_years(Local::now().date_naive());
    let year_labels: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    let year = years[Select::with_theme(&theme)
        .with_prompt("Select Year")
        .items(&year_labels)
        .default(0)
        .interact()?];

    let month_names: Vec<&str> = Month::ALL.iter().map(|m| m.name()).collect();
    let month = Month::ALL[Select::with_theme(&theme)
        .with_prompt("Select Month")
        .items(&month_names)
        .default(0)
        .interact()?];

    let period = Period::new(year, month);
    let incomes = prompt_amounts(&theme, "Income", &INCOME_CATEGORIES)?;
    let expenses = prompt_amounts(&theme, "Expenses", &EXPENSE_CATEGORIES)?;

    EntryService::save_entry(store, user, &period, &incomes, &expenses)?;
    output::success("Data Saved.");
    Ok(())
}

/// Prompts one bounded integer per category. `u64` input keeps the amounts
/// non-negative without any further validation.
fn prompt_amounts(
    theme: &ColorfulTheme,
    heading: &str,
    categories: &[&'static str],
) -> CliResult<Vec<(&'static str, i64)>> {
    output::section(heading);
    let mut amounts = Vec::with_capacity(categories.len());
    for name in categories {
        let amount: u64 = Input::with_theme(theme)
            .with_prompt(format!("{name}:"))
            .default(0)
            .interact_text()?;
        amounts.push((*name, amount as i64));
    }
    Ok(amounts)
}
