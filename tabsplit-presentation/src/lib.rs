#![warn(clippy::uninlined_format_args)]

pub mod error_presenter;
pub mod expense_presenter;
pub mod ledger_presenter;
pub mod text_table;

pub use expense_presenter::ExpensePresenter;
pub use ledger_presenter::{DEFAULT_DISPLAY_SCALE, LedgerPresenter, LedgerView};
