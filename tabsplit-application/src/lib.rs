#![warn(clippy::uninlined_format_args)]

pub mod draft;
pub mod error;
pub mod ledger_processor;
pub mod model;
pub mod ports;
pub mod statistics;

pub use draft::{DraftPolicy, ExpenseDraft, parse_participants};
pub use error::{DraftError, ExpenseStoreError, LedgerError, StatisticsError};
pub use ledger_processor::LedgerProcessor;
pub use model::{ExpenseStatistics, LedgerReport, PayerTotal};
pub use ports::{ExpenseSource, ExpenseStore};
pub use statistics::payer_totals;
