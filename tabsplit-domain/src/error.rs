use crate::model::{ExpenseId, Money, PersonId};

/// Input contract violations raised while folding expense records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("expense must have at least one participant")]
    EmptyParticipants { expense_id: ExpenseId },
    #[error("expense amount must be positive")]
    NonPositiveAmount { expense_id: ExpenseId, amount: Money },
    #[error("expense share is not representable")]
    ShareOverflow { expense_id: ExpenseId },
    #[error("accumulated balance is not representable")]
    BalanceOverflow { person: PersonId },
}

impl ExpenseValidationError {
    /// Offending record, when the error is attributable to a single one.
    pub fn expense_id(&self) -> Option<&ExpenseId> {
        match self {
            Self::EmptyParticipants { expense_id }
            | Self::NonPositiveAmount { expense_id, .. }
            | Self::ShareOverflow { expense_id } => Some(expense_id),
            Self::BalanceOverflow { .. } => None,
        }
    }
}
