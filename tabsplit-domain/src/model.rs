use crate::error::ExpenseValidationError;
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::{
    borrow::Borrow,
    collections::BTreeMap,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

/// Identifier of a person taking part in shared expenses.
///
/// Ordering is lexicographic on the identifier; every ordered output of the
/// engine (balance sheets, tie-breaks between equal amounts) follows it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ExpenseId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque reference to a receipt image. Never interpreted by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptRef(String);

impl ReceiptRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Currency-agnostic decimal amount.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn new(mantissa: i64, scale: u32) -> Self {
        Self(Decimal::new(mantissa, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub const fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn signum(self) -> i64 {
        if self.0.is_zero() {
            0
        } else if self.0.is_sign_negative() {
            -1
        } else {
            1
        }
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds half away from zero to `scale` decimal places.
    pub fn round_dp(self, scale: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Splits the amount into `parts` equal shares.
    ///
    /// Returns `None` for zero parts or when the quotient is not representable.
    pub fn checked_split(self, parts: usize) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        self.0.checked_div(Decimal::from(parts)).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Self)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A single shared expense: paid by one person, split evenly among the participants.
///
/// `participants` may include the payer and may repeat a person; every entry is one share.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub payer: PersonId,
    pub participants: Vec<PersonId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ReceiptRef>,
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    pub fn new<P>(
        id: impl Into<ExpenseId>,
        description: impl Into<String>,
        amount: Money,
        payer: impl Into<PersonId>,
        participants: impl IntoIterator<Item = P>,
        created_at: DateTime<Utc>,
    ) -> Self
    where
        P: Into<PersonId>,
    {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            payer: payer.into(),
            participants: participants.into_iter().map(Into::into).collect(),
            receipt: None,
            created_at,
        }
    }

    pub fn with_receipt(mut self, receipt: ReceiptRef) -> Self {
        self.receipt = Some(receipt);
        self
    }

    /// Amount owed by each participant entry.
    pub fn share(&self) -> Result<Money, ExpenseValidationError> {
        if self.participants.is_empty() {
            return Err(ExpenseValidationError::EmptyParticipants {
                expense_id: self.id.clone(),
            });
        }
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount {
                expense_id: self.id.clone(),
                amount: self.amount,
            });
        }
        self.amount
            .checked_split(self.participants.len())
            .ok_or_else(|| ExpenseValidationError::ShareOverflow {
                expense_id: self.id.clone(),
            })
    }

    /// Payer followed by every participant entry, duplicates included.
    pub fn involved_people(&self) -> impl Iterator<Item = &PersonId> + '_ {
        std::iter::once(&self.payer).chain(self.participants.iter())
    }
}

/// Derived position of one person against everyone else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonBalance {
    pub person: PersonId,
    /// Amount this person owes each other person.
    pub owes: BTreeMap<PersonId, Money>,
    /// Amount each other person owes this person.
    pub owed_by: BTreeMap<PersonId, Money>,
    /// `owed_by` total minus `owes` total. Positive: is owed money.
    pub net: Money,
}

impl PersonBalance {
    pub fn new(person: PersonId) -> Self {
        Self {
            person,
            owes: BTreeMap::new(),
            owed_by: BTreeMap::new(),
            net: Money::ZERO,
        }
    }

    pub fn total_owes(&self) -> Money {
        self.owes.values().sum()
    }

    pub fn total_owed_by(&self) -> Money {
        self.owed_by.values().sum()
    }

    pub fn is_settled(&self, tolerance: Money) -> bool {
        self.net.abs() <= tolerance
    }
}

/// Balances keyed by person, iterated in `PersonId` order.
pub type BalanceSheet = BTreeMap<PersonId, PersonBalance>;

pub fn net_balances(sheet: &BalanceSheet) -> BTreeMap<PersonId, Money> {
    sheet
        .iter()
        .map(|(person, balance)| (person.clone(), balance.net))
        .collect()
}

/// Sum of all nets in `PersonId` order, `None` when a partial sum is not representable.
pub fn total_net(sheet: &BalanceSheet) -> Option<Money> {
    sheet
        .values()
        .try_fold(Money::ZERO, |total, balance| total.checked_add(balance.net))
}

/// One settling transfer: `debtor` pays `amount` to `creditor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifiedDebt {
    pub debtor: PersonId,
    pub creditor: PersonId,
    pub amount: Money,
}

impl SimplifiedDebt {
    pub fn new(debtor: impl Into<PersonId>, creditor: impl Into<PersonId>, amount: Money) -> Self {
        Self {
            debtor: debtor.into(),
            creditor: creditor.into(),
            amount,
        }
    }
}
