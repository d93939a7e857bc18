use crate::model::{BalanceSheet, Money, PersonId, SimplifiedDebt};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Remainders at or below this are considered settled (1e-9).
///
/// Shares come from decimal division, so sums may differ from zero in the
/// last representable digits. This is far below any currency's minor unit.
pub const DEFAULT_SETTLEMENT_TOLERANCE: Money =
    Money::from_decimal(Decimal::from_parts(1, 0, 0, false, 9));

/// Greedy debt simplification service.
///
/// Matches the largest remaining debtor with the largest remaining creditor
/// until one side is exhausted. Produces at most `debtors + creditors - 1`
/// transfers; this is a heuristic and not a minimum-transfer solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebtSimplifier {
    tolerance: Money,
}

struct Outstanding {
    person: PersonId,
    owed: Money,
}

impl Default for DebtSimplifier {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_SETTLEMENT_TOLERANCE,
        }
    }
}

impl DebtSimplifier {
    pub fn with_tolerance(tolerance: Money) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    pub fn tolerance(&self) -> Money {
        self.tolerance
    }

    /// Settling transfers for the nets of a balance sheet
    pub fn simplify(&self, balances: &BalanceSheet) -> Vec<SimplifiedDebt> {
        self.simplify_nets(
            balances
                .values()
                .map(|balance| (balance.person.clone(), balance.net)),
        )
    }

    /// Settling transfers for raw `(person, net)` pairs
    ///
    /// Each person is expected at most once. Output order is debtor-major,
    /// following the cursor walk: debtors and creditors are visited by
    /// remaining amount descending, ties broken by `PersonId` ascending.
    pub fn simplify_nets<I>(&self, nets: I) -> Vec<SimplifiedDebt>
    where
        I: IntoIterator<Item = (PersonId, Money)>,
    {
        let mut debtors = Vec::new();
        let mut creditors = Vec::new();
        for (person, net) in nets {
            if net.abs() <= self.tolerance {
                continue;
            }
            if net.is_negative() {
                debtors.push(Outstanding { person, owed: -net });
            } else {
                creditors.push(Outstanding { person, owed: net });
            }
        }

        sort_largest_first(&mut debtors);
        sort_largest_first(&mut creditors);

        let mut debts = Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
        let mut debtor_idx = 0;
        let mut creditor_idx = 0;

        while debtor_idx < debtors.len() && creditor_idx < creditors.len() {
            let debtor = &mut debtors[debtor_idx];
            let creditor = &mut creditors[creditor_idx];

            let amount = debtor.owed.min(creditor.owed);
            debts.push(SimplifiedDebt {
                debtor: debtor.person.clone(),
                creditor: creditor.person.clone(),
                amount,
            });

            debtor.owed -= amount;
            creditor.owed -= amount;

            if debtor.owed <= self.tolerance {
                debtor_idx += 1;
            }
            if creditor.owed <= self.tolerance {
                creditor_idx += 1;
            }
        }

        let unmatched_debt = unsettled_total(&debtors[debtor_idx..]);
        let unmatched_credit = unsettled_total(&creditors[creditor_idx..]);
        let exceeds_tolerance = |total: Option<Money>| total.is_none_or(|t| t > self.tolerance);
        if exceeds_tolerance(unmatched_debt) || exceeds_tolerance(unmatched_credit) {
            tracing::warn!(
                unmatched_debt = %describe_total(unmatched_debt),
                unmatched_credit = %describe_total(unmatched_credit),
                tolerance = %self.tolerance,
                "Net balances do not sum to zero; remainder left unsettled"
            );
        }

        tracing::debug!(
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            transfer_count = debts.len(),
            "Simplified debts"
        );

        debts
    }
}

fn unsettled_total(outstanding: &[Outstanding]) -> Option<Money> {
    outstanding
        .iter()
        .try_fold(Money::ZERO, |total, entry| total.checked_add(entry.owed))
}

fn describe_total(total: Option<Money>) -> String {
    total.map_or_else(|| "overflow".to_owned(), |total| total.to_string())
}

fn sort_largest_first(outstanding: &mut [Outstanding]) {
    outstanding.sort_by(|lhs, rhs| {
        rhs.owed
            .cmp(&lhs.owed)
            .then_with(|| lhs.person.cmp(&rhs.person))
    });
}

/// Nets left after every debtor pays its transfers.
///
/// Equivalently, `nets` minus the nets implied by replaying `debts` from zero.
/// A complete settlement leaves every entry within the simplifier tolerance.
pub fn residual_balances<I>(nets: I, debts: &[SimplifiedDebt]) -> BTreeMap<PersonId, Money>
where
    I: IntoIterator<Item = (PersonId, Money)>,
{
    let mut residual: BTreeMap<PersonId, Money> = nets.into_iter().collect();
    for debt in debts {
        *residual.entry(debt.debtor.clone()).or_insert(Money::ZERO) += debt.amount;
        *residual.entry(debt.creditor.clone()).or_insert(Money::ZERO) -= debt.amount;
    }
    residual
}
