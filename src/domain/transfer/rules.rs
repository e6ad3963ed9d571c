use rust_decimal::{Decimal, dec};
use tracing::debug;

use crate::domain::{
    account::AccountOption,
    props::{Advisory, AccountNumber, Amount},
    transfer::{draft::TransferDraft, error::RuleViolation},
};

pub const MIN_TRANSFER: Decimal = dec!(1);
pub const HIGH_AMOUNT_THRESHOLD: Decimal = dec!(5000);
pub const DAILY_LIMIT: Decimal = dec!(10000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FromAccount,
    Destination,
    Amount,
    Description,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Valid,
    /// Valid, but carries a non-blocking flag the user should see.
    Advisory(Advisory),
    Rejected(RuleViolation),
}

/// Outcome of one rule for one field, recomputed on every input change
/// and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCheck {
    pub field: Field,
    pub verdict: Verdict,
}

impl FieldCheck {
    pub fn is_valid(&self) -> bool {
        !self.is_rejected()
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.verdict, Verdict::Rejected(_))
    }

    pub fn advisory(&self) -> Option<Advisory> {
        match &self.verdict {
            Verdict::Advisory(a) => Some(a.clone()),
            _ => None,
        }
    }

    /// The inline message for the field, empty when there is nothing to show.
    pub fn message(&self) -> String {
        match &self.verdict {
            Verdict::Valid => String::new(),
            Verdict::Advisory(a) => a.to_string(),
            Verdict::Rejected(v) => v.to_string(),
        }
    }
}

/// Checks every field of the draft against the selected account snapshot.
/// Pure function of its arguments; each field gets its own verdict so the
/// form can surface messages independently.
pub fn validate(draft: &TransferDraft, selected: Option<&AccountOption>) -> Vec<FieldCheck> {
    debug!("Validating transfer draft for {:?}", draft.from_account_id);

    vec![
        FieldCheck {
            field: Field::FromAccount,
            verdict: check_from_account(selected),
        },
        FieldCheck {
            field: Field::Destination,
            verdict: check_destination(&draft.to_account_number, selected),
        },
        FieldCheck {
            field: Field::Amount,
            verdict: check_amount(&draft.amount, selected),
        },
        // Free text, always fine.
        FieldCheck {
            field: Field::Description,
            verdict: Verdict::Valid,
        },
    ]
}

fn check_from_account(selected: Option<&AccountOption>) -> Verdict {
    match selected {
        Some(account) if !account.id.is_empty() => Verdict::Valid,
        _ => Verdict::Rejected(RuleViolation::MissingSelection),
    }
}

fn check_destination(input: &str, selected: Option<&AccountOption>) -> Verdict {
    let Some(destination) = AccountNumber::from_input(input) else {
        return Verdict::Rejected(RuleViolation::MalformedNumber);
    };

    // Self-transfer is only detectable when the source's own number is known.
    if let Some(own) = selected.and_then(|a| a.number.as_ref()) {
        if own == &destination {
            return Verdict::Rejected(RuleViolation::SelfTransfer);
        }
    }

    Verdict::Valid
}

// Ordering matters for the message the user sees: positive, minimum unit,
// daily ceiling, then balance.
fn check_amount(input: &str, selected: Option<&AccountOption>) -> Verdict {
    let Some(Amount(amount)) = Amount::parse(input) else {
        return Verdict::Rejected(RuleViolation::AmountNotPositive);
    };

    if amount <= Decimal::ZERO {
        return Verdict::Rejected(RuleViolation::AmountNotPositive);
    }

    if amount < MIN_TRANSFER {
        return Verdict::Rejected(RuleViolation::BelowMinimumUnit);
    }

    if amount > DAILY_LIMIT {
        return Verdict::Rejected(RuleViolation::ExceedsDailyLimit);
    }

    if let Some(account) = selected {
        if amount > account.display_balance {
            return Verdict::Rejected(RuleViolation::InsufficientBalance);
        }
    }

    if amount > HIGH_AMOUNT_THRESHOLD {
        return Verdict::Advisory(Advisory::HighAmount);
    }

    Verdict::Valid
}

/// The aggregate gate: submittable only while no field is rejected.
pub fn submittable(checks: &[FieldCheck]) -> bool {
    checks.iter().all(FieldCheck::is_valid)
}

#[cfg(test)]
mod tests {
    use rust_decimal::{Decimal, dec};

    use crate::domain::{
        account::AccountOption,
        props::{AccountId, AccountNumber, Advisory},
        transfer::{
            draft::TransferDraft,
            error::RuleViolation,
            rules::{Field, FieldCheck, Verdict, submittable, validate},
        },
    };

    fn account(balance: Decimal) -> AccountOption {
        AccountOption::new(
            AccountId("acc-1".to_owned()),
            balance,
            AccountNumber::from_input("123456789012"),
        )
    }

    fn draft(amount: &str) -> TransferDraft {
        TransferDraft::default()
            .with_from_account(AccountId("acc-1".to_owned()))
            .with_destination("210987654321")
            .with_amount(amount)
    }

    fn verdict_of(checks: &[FieldCheck], field: Field) -> Verdict {
        checks
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.verdict.clone())
            .unwrap_or_else(|| panic!("no check for {:?}", field))
    }

    #[test]
    fn valid_draft_passes_every_field() {
        let checks = validate(&draft("4000").with_description("Rent"), Some(&account(dec!(5000))));

        assert!(submittable(&checks));
        assert_eq!(verdict_of(&checks, Field::Amount), Verdict::Valid);
        assert_eq!(verdict_of(&checks, Field::Description), Verdict::Valid);
    }

    #[test]
    fn missing_selection_rejects_from_account() {
        let checks = validate(&draft("4000"), None);

        assert!(!submittable(&checks));
        assert_eq!(
            verdict_of(&checks, Field::FromAccount),
            Verdict::Rejected(RuleViolation::MissingSelection)
        );
    }

    #[test]
    fn empty_account_id_counts_as_missing_selection() {
        let snapshot = AccountOption::new(AccountId(String::new()), dec!(5000), None);
        let checks = validate(&draft("4000"), Some(&snapshot));

        assert_eq!(
            verdict_of(&checks, Field::FromAccount),
            Verdict::Rejected(RuleViolation::MissingSelection)
        );
    }

    #[test]
    fn destination_accepts_digits_with_whitespace() {
        let checks = validate(
            &draft("100").with_destination("2109 8765 4321"),
            Some(&account(dec!(5000))),
        );

        assert_eq!(verdict_of(&checks, Field::Destination), Verdict::Valid);
    }

    #[test]
    fn destination_rejects_wrong_length_or_letters() {
        let acc = account(dec!(5000));

        for bad in ["21098765432", "2109876543210", "21098765432a", ""] {
            let checks = validate(&draft("100").with_destination(bad), Some(&acc));
            assert_eq!(
                verdict_of(&checks, Field::Destination),
                Verdict::Rejected(RuleViolation::MalformedNumber),
                "destination {:?} should be malformed",
                bad
            );
        }
    }

    #[test]
    fn self_transfer_rejected_regardless_of_amount() {
        let acc = account(dec!(5000));

        for amount in ["100", "0", "99999"] {
            let checks = validate(
                &draft(amount).with_destination("1234 5678 9012"),
                Some(&acc),
            );
            assert_eq!(
                verdict_of(&checks, Field::Destination),
                Verdict::Rejected(RuleViolation::SelfTransfer)
            );
        }
    }

    #[test]
    fn self_transfer_not_detectable_without_own_number() {
        let snapshot = AccountOption::new(AccountId("acc-1".to_owned()), dec!(5000), None);
        let checks = validate(&draft("100").with_destination("123456789012"), Some(&snapshot));

        assert_eq!(verdict_of(&checks, Field::Destination), Verdict::Valid);
    }

    #[test]
    fn amount_must_be_positive() {
        let acc = account(dec!(5000));

        for bad in ["0", "-5", "abc", ""] {
            let checks = validate(&draft(bad), Some(&acc));
            assert_eq!(
                verdict_of(&checks, Field::Amount),
                Verdict::Rejected(RuleViolation::AmountNotPositive),
                "amount {:?}",
                bad
            );
        }
    }

    #[test]
    fn amount_below_minimum_unit() {
        let checks = validate(&draft("0.50"), Some(&account(dec!(5000))));

        assert_eq!(
            verdict_of(&checks, Field::Amount),
            Verdict::Rejected(RuleViolation::BelowMinimumUnit)
        );
    }

    #[test]
    fn amount_of_exactly_one_is_valid() {
        let checks = validate(&draft("1"), Some(&account(dec!(5000))));

        assert_eq!(verdict_of(&checks, Field::Amount), Verdict::Valid);
    }

    // Scenario from the form rules: balance 5000, amount 4000.
    #[test]
    fn plain_amount_has_no_advisory() {
        let checks = validate(&draft("4000"), Some(&account(dec!(5000))));

        assert_eq!(verdict_of(&checks, Field::Amount), Verdict::Valid);
    }

    #[test]
    fn high_amount_is_flagged_not_rejected() {
        let checks = validate(&draft("5500"), Some(&account(dec!(20000))));

        assert!(submittable(&checks));
        assert_eq!(
            verdict_of(&checks, Field::Amount),
            Verdict::Advisory(Advisory::HighAmount)
        );
    }

    #[test]
    fn threshold_amount_itself_is_not_flagged() {
        let checks = validate(&draft("5000"), Some(&account(dec!(20000))));

        assert_eq!(verdict_of(&checks, Field::Amount), Verdict::Valid);
    }

    #[test]
    fn daily_limit_is_inclusive() {
        let checks = validate(&draft("10000"), Some(&account(dec!(20000))));

        assert_eq!(
            verdict_of(&checks, Field::Amount),
            Verdict::Advisory(Advisory::HighAmount)
        );
    }

    #[test]
    fn over_daily_limit_rejected() {
        let checks = validate(&draft("10500"), Some(&account(dec!(20000))));

        assert_eq!(
            verdict_of(&checks, Field::Amount),
            Verdict::Rejected(RuleViolation::ExceedsDailyLimit)
        );
    }

    // 10500 breaks both the ceiling and a 5000 balance; the ceiling wins.
    #[test]
    fn daily_limit_reported_before_balance() {
        let checks = validate(&draft("10500"), Some(&account(dec!(5000))));

        assert_eq!(
            verdict_of(&checks, Field::Amount),
            Verdict::Rejected(RuleViolation::ExceedsDailyLimit)
        );
    }

    #[test]
    fn amount_over_balance_rejected() {
        let checks = validate(&draft("6000"), Some(&account(dec!(5000))));

        assert_eq!(
            verdict_of(&checks, Field::Amount),
            Verdict::Rejected(RuleViolation::InsufficientBalance)
        );
    }

    #[test]
    fn amount_equal_to_balance_is_valid() {
        let checks = validate(&draft("5000"), Some(&account(dec!(5000))));

        assert_eq!(verdict_of(&checks, Field::Amount), Verdict::Valid);
    }

    #[test]
    fn flipping_one_field_flips_the_gate() {
        let acc = account(dec!(5000));
        let good = draft("4000");
        assert!(submittable(&validate(&good, Some(&acc))));

        let bad_amount = good.clone().with_amount("0");
        assert!(!submittable(&validate(&bad_amount, Some(&acc))));

        let bad_destination = good.with_destination("123");
        assert!(!submittable(&validate(&bad_destination, Some(&acc))));
    }

    #[test]
    fn each_field_reports_its_own_message() {
        let checks = validate(
            &TransferDraft::default().with_destination("12").with_amount("-1"),
            None,
        );

        let rejected: Vec<String> = checks
            .iter()
            .filter(|c| c.is_rejected())
            .map(FieldCheck::message)
            .collect();

        assert_eq!(
            rejected,
            vec![
                "Select an account to transfer from".to_owned(),
                "Account number must be exactly 12 digits".to_owned(),
                "Enter a positive amount".to_owned(),
            ]
        );
    }
}
