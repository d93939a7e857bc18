use crate::text_table::{Alignment, TextTableBuilder};
use std::borrow::Cow;
use tabsplit_application::{ExpenseStatistics, LedgerReport, PayerTotal};
use tabsplit_domain::{Money, PersonBalance, SimplifiedDebt};
use tabsplit_i18n as i18n;

pub const DEFAULT_DISPLAY_SCALE: u32 = 2;

pub struct LedgerPresenter;

pub struct LedgerView {
    pub statistics_table: String,
    pub balance_table: String,
    /// `None` when everyone is settled.
    pub transfer_table: Option<String>,
    /// `None` when nothing has been paid.
    pub payer_table: Option<String>,
}

impl LedgerPresenter {
    pub fn render(report: &LedgerReport, display_scale: u32) -> LedgerView {
        let transfer_table = (!report.debts.is_empty())
            .then(|| Self::build_transfer_table(&report.debts, display_scale));
        let payer_table = (!report.payer_totals.is_empty())
            .then(|| Self::build_payer_table(&report.payer_totals, display_scale));

        LedgerView {
            statistics_table: Self::build_statistics_table(&report.statistics, display_scale),
            balance_table: Self::build_balance_table(&report.balances, display_scale),
            transfer_table,
            payer_table,
        }
    }

    pub fn build_balance_table(balances: &[PersonBalance], display_scale: u32) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::PERSON),
                Cow::Borrowed(i18n::OWES),
                Cow::Borrowed(i18n::OWED_BY),
                Cow::Borrowed(i18n::NET),
            ]);

        for balance in balances {
            builder = builder.row([
                Cow::Borrowed(balance.person.as_str()),
                Cow::Owned(format_amount(balance.total_owes(), display_scale)),
                Cow::Owned(format_amount(balance.total_owed_by(), display_scale)),
                Cow::Owned(format_signed_amount(balance.net, display_scale)),
            ]);
        }

        builder.build()
    }

    pub fn build_transfer_table(debts: &[SimplifiedDebt], display_scale: u32) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ]);

        for debt in debts {
            builder = builder.row([
                Cow::Borrowed(debt.debtor.as_str()),
                Cow::Borrowed(debt.creditor.as_str()),
                Cow::Owned(format_amount(debt.amount, display_scale)),
            ]);
        }

        builder.build()
    }

    pub fn build_statistics_table(statistics: &ExpenseStatistics, display_scale: u32) -> String {
        let money = |amount: Money| Cow::Owned(format_amount(amount, display_scale));

        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::STATISTIC), Cow::Borrowed(i18n::VALUE)])
            .rows([
                [Cow::Borrowed(i18n::TOTAL_SPENT), money(statistics.total_spent)],
                [
                    Cow::Borrowed(i18n::EXPENSE_COUNT),
                    Cow::Owned(statistics.expense_count.to_string()),
                ],
                [
                    Cow::Borrowed(i18n::AVERAGE_EXPENSE),
                    money(statistics.average_expense),
                ],
                [
                    Cow::Borrowed(i18n::LARGEST_EXPENSE),
                    money(statistics.largest_expense),
                ],
                [
                    Cow::Borrowed(i18n::SMALLEST_EXPENSE),
                    money(statistics.smallest_expense),
                ],
                [
                    Cow::Borrowed(i18n::PERSON_COUNT),
                    Cow::Owned(statistics.person_count.to_string()),
                ],
            ])
            .build()
    }

    pub fn build_payer_table(totals: &[PayerTotal], display_scale: u32) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::PERSON), Cow::Borrowed(i18n::PAID)])
            .rows(totals.iter().map(|total| {
                [
                    Cow::Borrowed(total.payer.as_str()),
                    Cow::Owned(format_amount(total.total, display_scale)),
                ]
            }))
            .build()
    }
}

/// Rounds half away from zero and pads to exactly `scale` decimal places.
pub fn format_amount(amount: Money, scale: u32) -> String {
    let rounded = amount.round_dp(scale);
    let rounded = if rounded.is_zero() {
        Money::ZERO.as_decimal()
    } else {
        rounded.as_decimal()
    };
    format!("{rounded:.prec$}", prec = scale as usize)
}

/// Like [`format_amount`] with an explicit `+` on positive values.
///
/// Values that round to zero print unsigned.
pub fn format_signed_amount(amount: Money, scale: u32) -> String {
    let rounded = amount.round_dp(scale);
    let sign = if rounded.is_positive() { "+" } else { "" };
    format!("{sign}{}", format_amount(rounded, scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tabsplit_domain::PersonId;

    fn balance(person: &str, owes: &[(&str, i64)], owed_by: &[(&str, i64)]) -> PersonBalance {
        let mut balance = PersonBalance::new(PersonId::from(person));
        for &(creditor, amount) in owes {
            balance.owes.insert(PersonId::from(creditor), Money::from_i64(amount));
        }
        for &(debtor, amount) in owed_by {
            balance.owed_by.insert(PersonId::from(debtor), Money::from_i64(amount));
        }
        balance.net = balance.total_owed_by() - balance.total_owes();
        balance
    }

    #[fixture]
    fn report() -> LedgerReport {
        LedgerReport {
            balances: vec![
                balance("A", &[], &[("C", 30)]),
                balance("B", &[], &[]),
                balance("C", &[("A", 30)], &[]),
            ],
            debts: vec![SimplifiedDebt::new("C", "A", Money::from_i64(30))],
            statistics: ExpenseStatistics {
                total_spent: Money::from_i64(180),
                expense_count: 3,
                average_expense: Money::from_i64(60),
                largest_expense: Money::from_i64(90),
                smallest_expense: Money::from_i64(30),
                person_count: 3,
            },
            payer_totals: vec![PayerTotal {
                payer: PersonId::from("A"),
                total: Money::from_i64(180),
            }],
        }
    }

    #[rstest]
    #[case::rounds_half_away_from_zero(Money::new(12345, 3), 2, "12.35")]
    #[case::pads_fraction(Money::from_i64(7), 2, "7.00")]
    #[case::negative(Money::new(-10005, 3), 2, "-10.01")]
    #[case::whole_units(Money::new(1, 1), 0, "0")]
    #[case::thirds(Money::from_i64(100).checked_split(3).unwrap(), 2, "33.33")]
    fn formats_amounts(#[case] amount: Money, #[case] scale: u32, #[case] expected: &str) {
        assert_eq!(format_amount(amount, scale), expected);
    }

    #[rstest]
    #[case::positive(Money::from_i64(30), "+30.00")]
    #[case::negative(Money::from_i64(-30), "-30.00")]
    #[case::zero(Money::ZERO, "0.00")]
    #[case::negative_dust(Money::new(-1, 9), "0.00")]
    fn formats_signed_amounts(#[case] amount: Money, #[case] expected: &str) {
        assert_eq!(format_signed_amount(amount, 2), expected);
    }

    #[rstest]
    fn render_builds_every_table(report: LedgerReport) {
        let view = LedgerPresenter::render(&report, DEFAULT_DISPLAY_SCALE);

        let balance_rows: Vec<&str> = view.balance_table.lines().skip(2).collect();
        assert_eq!(balance_rows.len(), 3);
        assert!(balance_rows[0].starts_with('A'));
        assert!(balance_rows[0].ends_with("+30.00"));
        assert!(balance_rows[1].ends_with("0.00"));
        assert!(balance_rows[2].ends_with("-30.00"));

        let transfers = view.transfer_table.expect("transfer table");
        let transfer_rows: Vec<&str> = transfers.lines().skip(2).collect();
        assert_eq!(transfer_rows.len(), 1);
        assert!(transfer_rows[0].starts_with("C"));
        assert!(transfer_rows[0].contains('A'));
        assert!(transfer_rows[0].ends_with("30.00"));

        assert!(view.statistics_table.contains("180.00"));
        assert!(view.statistics_table.contains(i18n::TOTAL_SPENT));
        assert!(view.payer_table.expect("payer table").contains("180.00"));
    }

    #[rstest]
    fn settled_report_has_no_transfer_table(mut report: LedgerReport) {
        report.debts.clear();
        report.payer_totals.clear();

        let view = LedgerPresenter::render(&report, DEFAULT_DISPLAY_SCALE);

        assert!(view.transfer_table.is_none());
        assert!(view.payer_table.is_none());
    }
}
