use tabsplit_domain::{Money, PersonBalance, PersonId, SimplifiedDebt};

/// Summary figures over an expense collection. All zero when it is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseStatistics {
    pub total_spent: Money,
    pub expense_count: usize,
    pub average_expense: Money,
    pub largest_expense: Money,
    pub smallest_expense: Money,
    /// Distinct payers and participants.
    pub person_count: usize,
}

/// Total amount a person has paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayerTotal {
    pub payer: PersonId,
    pub total: Money,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerReport {
    /// In `PersonId` order.
    pub balances: Vec<PersonBalance>,
    /// In settlement order.
    pub debts: Vec<SimplifiedDebt>,
    pub statistics: ExpenseStatistics,
    pub payer_totals: Vec<PayerTotal>,
}

impl LedgerReport {
    pub fn is_settled(&self) -> bool {
        self.debts.is_empty()
    }
}
