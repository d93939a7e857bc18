use std::path::PathBuf;
use tabsplit_domain::{ExpenseValidationError, PersonId};

#[derive(Debug, thiserror::Error)]
pub enum ExpenseStoreError {
    #[error("failed to access expense store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("expense store at {} is corrupt: {detail}", path.display())]
    Corrupt { path: PathBuf, detail: String },
    #[error("expense store lock was poisoned")]
    Poisoned,
}

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Source(#[from] ExpenseStoreError),
    #[error(transparent)]
    Validation(#[from] ExpenseValidationError),
    #[error(transparent)]
    Statistics(#[from] StatisticsError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatisticsError {
    #[error("total amount spent is not representable")]
    TotalOverflow,
    #[error("amount paid by {payer} is not representable")]
    PayerTotalOverflow { payer: PersonId },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("description is required")]
    MissingDescription,
    #[error("amount must be a positive number (got '{0}')")]
    InvalidAmount(String),
    #[error("payer is required")]
    MissingPayer,
    #[error("at least one participant is required")]
    MissingParticipants,
    #[error("a receipt must be attached")]
    MissingReceipt,
}
