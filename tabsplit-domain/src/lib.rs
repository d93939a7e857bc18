#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::ExpenseValidationError;
pub use model::{
    BalanceSheet, ExpenseId, ExpenseRecord, Money, PersonBalance, PersonId, ReceiptRef,
    SimplifiedDebt, net_balances, total_net,
};
pub use services::{
    BalanceAggregator, DEFAULT_SETTLEMENT_TOLERANCE, DebtSimplifier, residual_balances,
};
