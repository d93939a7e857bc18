use std::{borrow::Cow, process};

use clap::Parser;
use tabsplit_application::{DraftPolicy, ExpenseDraft, ExpenseStore, LedgerProcessor};
use tabsplit_domain::{DebtSimplifier, ExpenseId};
use tabsplit_infrastructure::JsonExpenseStore;
use tabsplit_presentation::{
    ExpensePresenter, LedgerPresenter,
    error_presenter::{
        format_draft_error, format_ledger_error, format_store_error, format_validation_error,
    },
    text_table::combine_vertically,
};

mod cli;
mod config;

use cli::{Cli, Command};
use config::CliConfig;

type CliResult<T> = Result<T, Cow<'static, str>>;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut config = CliConfig::from_env()?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    tracing::debug!(store = %config.store_path.display(), "Using expense store");

    let store = JsonExpenseStore::new(&config.store_path);
    match cli.command.unwrap_or(Command::Report) {
        Command::Report => print_report(&store, &config),
        Command::List => print_expenses(&store, &config),
        Command::Add(args) => add_expense(&store, ExpenseDraft::from(args), &config),
        Command::Remove { id } => remove_expense(&store, ExpenseId::new(id)),
        Command::Clear => {
            store
                .clear_expenses()
                .map_err(|err| format_store_error(&err))?;
            println!("{}", tabsplit_i18n::EXPENSES_CLEARED);
            Ok(())
        }
    }
}

fn print_report(store: &JsonExpenseStore, config: &CliConfig) -> CliResult<()> {
    let processor = LedgerProcessor::new(store)
        .with_simplifier(DebtSimplifier::with_tolerance(config.tolerance));
    let report = processor
        .build_report()
        .map_err(|err| format_ledger_error(&err))?;

    if report.statistics.expense_count == 0 {
        println!("{}", tabsplit_i18n::NO_EXPENSES);
        return Ok(());
    }

    let view = LedgerPresenter::render(&report, config.display_scale);
    let transfers = view
        .transfer_table
        .as_deref()
        .unwrap_or(tabsplit_i18n::ALL_SETTLED);
    let sections = [
        view.statistics_table.as_str(),
        view.balance_table.as_str(),
        transfers,
        view.payer_table.as_deref().unwrap_or_default(),
    ];

    if let Some(output) = combine_vertically(&sections) {
        println!("{output}");
    }
    Ok(())
}

fn print_expenses(store: &JsonExpenseStore, config: &CliConfig) -> CliResult<()> {
    let records = LedgerProcessor::new(store)
        .recent_expenses()
        .map_err(|err| format_ledger_error(&err))?;

    println!(
        "{}",
        ExpensePresenter::render_list(&records, config.display_scale)
    );
    Ok(())
}

fn add_expense(
    store: &JsonExpenseStore,
    draft: ExpenseDraft,
    config: &CliConfig,
) -> CliResult<()> {
    let policy = DraftPolicy {
        require_receipt: config.require_receipt,
    };
    let record = draft
        .submit(policy)
        .map_err(|err| format_draft_error(&err))?;

    record
        .share()
        .map_err(|err| format_validation_error(&err))?;

    let id = record.id.clone();
    store
        .add_expense(record)
        .map_err(|err| format_store_error(&err))?;
    println!("{}", tabsplit_i18n::expense_added(&id));
    Ok(())
}

fn remove_expense(store: &JsonExpenseStore, id: ExpenseId) -> CliResult<()> {
    let removed = store
        .remove_expense(&id)
        .map_err(|err| format_store_error(&err))?;
    if !removed {
        return Err(tabsplit_i18n::expense_not_found(&id).into());
    }
    println!("{}", tabsplit_i18n::expense_removed(&id));
    Ok(())
}

fn init_tracing(verbose: bool) -> CliResult<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| format!("Failed to initialize logging: {err}").into())
}
