pub mod balance_aggregator;
pub mod debt_simplifier;

pub use balance_aggregator::BalanceAggregator;
pub use debt_simplifier::{DEFAULT_SETTLEMENT_TOLERANCE, DebtSimplifier, residual_balances};
