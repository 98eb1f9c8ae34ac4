use dialoguer::{theme::ColorfulTheme, Select};

use crate::config::Config;
use crate::core::services::{EntryService, FlowDiagram, FlowService};
use crate::store::{Collection, DocumentStore};

use super::{output, CliResult};

/// Data Visualization mode: pick a stored period and print its totals plus a
/// text rendering of the money flow.
pub fn run(store: &dyn DocumentStore, config: &Config) -> CliResult<()> {
    output::section("Data Visualization");
    let periods = EntryService::list_periods(store)?;
    if periods.is_empty() {
        output::info("No saved periods yet.");
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    let period = &periods[Select::with_theme(&theme)
        .with_prompt("Select Date")
        .items(&periods)
        .default(0)
        .interact()?];

    let incomes = EntryService::period_data(store, Collection::Incomes, period)?;
    let expenses = EntryService::period_data(store, Collection::Expenses, period)?;

    let summary = FlowService::summarize(&incomes, &expenses);
    output::metric("Total Income", summary.total_income, &config.currency);
    output::metric("Total Expense", summary.total_expense, &config.currency);
    output::metric("Remaining Budget", summary.remaining, &config.currency);

    render_flow(&FlowService::diagram(&incomes, &expenses), &config.currency);
    Ok(())
}

/// Prints each link as `source -> target : value`, incomes first.
fn render_flow(diagram: &FlowDiagram, currency: &str) {
    println!();
    for link in &diagram.links {
        println!(
            "{:>16} -> {:<16} {:>8} {}",
            diagram.labels[link.source], diagram.labels[link.target], link.value, currency
        );
    }
}
