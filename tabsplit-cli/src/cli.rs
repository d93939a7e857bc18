use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tabsplit_application::ExpenseDraft;

/// Top-level CLI parser for the `tabsplit` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tabsplit",
    version,
    about = "Shared expense ledger with simplified settling transfers"
)]
pub struct Cli {
    /// Defaults to `report`.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Expense file (overrides TABSPLIT_STORE; other TABSPLIT_* settings are still validated)
    #[arg(short, long, global = true)]
    pub store: Option<PathBuf>,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print statistics, balances and the transfers that settle them.
    Report,
    /// List expenses, newest first.
    List,
    /// Record a new expense.
    Add(AddArgs),
    /// Delete one expense by id.
    Remove {
        id: String,
    },
    /// Delete every expense.
    Clear,
}

#[derive(Clone, Debug, Args)]
pub struct AddArgs {
    #[arg(short, long)]
    pub description: String,

    /// Positive decimal amount, e.g. 42.50
    #[arg(short, long)]
    pub amount: String,

    #[arg(short, long)]
    pub payer: String,

    /// Comma separated names, e.g. "Ana, Luis"
    #[arg(short = 'i', long)]
    pub participants: String,

    /// Receipt image reference
    #[arg(short, long)]
    pub receipt: Option<String>,
}

impl From<AddArgs> for ExpenseDraft {
    fn from(args: AddArgs) -> Self {
        Self {
            description: args.description,
            amount: args.amount,
            payer: args.payer,
            participants: args.participants,
            receipt: args.receipt,
        }
    }
}
