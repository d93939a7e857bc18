use crate::{
    error::LedgerError,
    model::{ExpenseStatistics, LedgerReport},
    ports::ExpenseSource,
    statistics::payer_totals,
};
use tabsplit_domain::{
    BalanceAggregator, DEFAULT_SETTLEMENT_TOLERANCE, DebtSimplifier, ExpenseRecord, total_net,
};

/// Builds ledger reports from the current expense collection.
#[derive(Clone, Copy)]
pub struct LedgerProcessor<'a> {
    source: &'a dyn ExpenseSource,
    simplifier: DebtSimplifier,
}

impl<'a> LedgerProcessor<'a> {
    pub fn new(source: &'a dyn ExpenseSource) -> Self {
        Self {
            source,
            simplifier: DebtSimplifier::default(),
        }
    }

    pub fn with_simplifier(mut self, simplifier: DebtSimplifier) -> Self {
        self.simplifier = simplifier;
        self
    }

    pub fn build_report(&self) -> Result<LedgerReport, LedgerError> {
        let records = self.source.load_expenses()?;
        tracing::debug!(record_count = records.len(), "Loaded expense records");
        self.report_for(&records)
    }

    pub fn report_for(&self, records: &[ExpenseRecord]) -> Result<LedgerReport, LedgerError> {
        let sheet = BalanceAggregator.aggregate(records)?;
        debug_assert!(
            total_net(&sheet).is_none_or(|total| total.abs() <= DEFAULT_SETTLEMENT_TOLERANCE)
        );

        let statistics = ExpenseStatistics::from_records(records)?;
        let payer_totals = payer_totals(records)?;
        let debts = self.simplifier.simplify(&sheet);

        Ok(LedgerReport {
            balances: sheet.into_values().collect(),
            debts,
            statistics,
            payer_totals,
        })
    }

    /// All expenses, newest first. Equal timestamps are ordered by id.
    pub fn recent_expenses(&self) -> Result<Vec<ExpenseRecord>, LedgerError> {
        let mut records = self.source.load_expenses()?;
        records.sort_by(|lhs, rhs| {
            rhs.created_at
                .cmp(&lhs.created_at)
                .then_with(|| lhs.id.cmp(&rhs.id))
        });
        Ok(records)
    }
}
