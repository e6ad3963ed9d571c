use tracing::debug;

use crate::{
    csv::{CsvDecisionRecord, CsvIntakeRecord, Decision, IntakeKind},
    domain::{
        account::AccountOption,
        cashier::{self, CashierViolation},
        props::{AccountId, AccountNumber, Advisory},
    },
    session::{FieldEdit, FormSession},
};

// Replays one recorded intake row through the same path the form would
// take: transfers go through a full session (submit gate plus
// confirmation), deposits and withdrawals through the cashier rules.
pub fn decide(record: CsvIntakeRecord) -> CsvDecisionRecord {
    let CsvIntakeRecord {
        kind,
        account_id,
        balance,
        number,
        to,
        amount,
        description,
    } = record;

    let account = AccountOption::new(
        AccountId(account_id.clone()),
        balance,
        number.as_deref().and_then(AccountNumber::from_input),
    );
    let amount_input = amount.unwrap_or_default();

    let (decision, message) = match kind {
        IntakeKind::Transfer => decide_transfer(
            account,
            to.unwrap_or_default(),
            amount_input,
            description.unwrap_or_default(),
        ),
        IntakeKind::Deposit => from_cashier(cashier::check_deposit(&amount_input)),
        IntakeKind::Withdrawal => {
            from_cashier(cashier::check_withdrawal(&amount_input, balance))
        }
    };

    CsvDecisionRecord {
        account: account_id,
        kind,
        decision,
        message,
    }
}

fn decide_transfer(
    account: AccountOption,
    to: String,
    amount: String,
    description: String,
) -> (Decision, String) {
    let id = account.id.clone();

    let mut session = FormSession::new(vec![account]);
    session.apply(FieldEdit::SelectAccount(id));
    session.apply(FieldEdit::Destination(to));
    session.apply(FieldEdit::Amount(amount));
    session.apply(FieldEdit::Description(description));

    match session.submit() {
        Ok(pending) => {
            debug!("Confirming:\n{}", pending.confirmation().render());
            let advisories = pending.advisories().to_vec();

            let submission = pending.confirm();
            if let Ok(payload) = serde_json::to_string(&submission) {
                debug!("Form payload: {}", payload);
            }

            match advisories.first() {
                Some(advisory) => (Decision::Advisory, advisory.to_string()),
                None => (Decision::Accepted, String::new()),
            }
        }
        Err(checks) => {
            // One message column in the output, so the per-field messages
            // get joined here; the library itself keeps them separate.
            let message = checks
                .iter()
                .filter(|c| c.is_rejected())
                .map(|c| c.message())
                .collect::<Vec<String>>()
                .join("; ");

            (Decision::Rejected, message)
        }
    }
}

fn from_cashier(result: Result<Option<Advisory>, CashierViolation>) -> (Decision, String) {
    match result {
        Ok(None) => (Decision::Accepted, String::new()),
        Ok(Some(advisory)) => (Decision::Advisory, advisory.to_string()),
        Err(violation) => (Decision::Rejected, violation.to_string()),
    }
}
