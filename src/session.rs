use serde::Serialize;

use crate::{
    domain::{
        account::AccountOption,
        props::{AccountId, AccountNumber, Advisory, Amount},
        transfer::{
            draft::TransferDraft,
            rules::{self, FieldCheck},
        },
    },
    view::confirm::ConfirmationView,
};

/// One edit to one field of the form, the keyboard/selection event stream
/// reduced to values.
#[derive(Debug, Clone)]
pub enum FieldEdit {
    SelectAccount(AccountId),
    Destination(String),
    Amount(String),
    Description(String),
}

/// The interactive binding around the pure rules: holds the account
/// snapshot list and the current draft, recomputes every check after each
/// edit. One session per form; dropped on navigation, and the draft with it.
pub struct FormSession {
    accounts: Vec<AccountOption>,
    draft: TransferDraft,
}

impl FormSession {
    pub fn new(accounts: Vec<AccountOption>) -> Self {
        FormSession {
            accounts,
            draft: TransferDraft::default(),
        }
    }

    pub fn selected_account(&self) -> Option<&AccountOption> {
        self.draft
            .from_account_id
            .as_ref()
            .and_then(|id| self.accounts.iter().find(|a| &a.id == id))
    }

    /// Applies one field edit and returns the fresh check list.
    pub fn apply(&mut self, edit: FieldEdit) -> Vec<FieldCheck> {
        let draft = self.draft.clone();
        self.draft = match edit {
            FieldEdit::SelectAccount(id) => draft.with_from_account(id),
            FieldEdit::Destination(input) => draft.with_destination(input),
            FieldEdit::Amount(input) => draft.with_amount(input),
            FieldEdit::Description(input) => draft.with_description(input),
        };

        self.checks()
    }

    /// Current checks, always recomputed from the draft, never cached.
    pub fn checks(&self) -> Vec<FieldCheck> {
        rules::validate(&self.draft, self.selected_account())
    }

    /// The aggregate submit gate. Re-runs every rule against the latest
    /// draft; an approval from an earlier keystroke cannot go stale.
    pub fn submit(&self) -> Result<PendingTransfer, Vec<FieldCheck>> {
        let checks = self.checks();
        if !rules::submittable(&checks) {
            return Err(checks);
        }

        // The checks just passed, so all three extractions succeed; the
        // fallthrough keeps the gate total without panicking.
        let (Some(account), Some(destination), Some(Amount(amount))) = (
            self.selected_account(),
            AccountNumber::from_input(&self.draft.to_account_number),
            Amount::parse(&self.draft.amount),
        ) else {
            return Err(checks);
        };

        let advisories = checks.iter().filter_map(FieldCheck::advisory).collect();
        let confirmation =
            ConfirmationView::new(account, &destination, amount, &self.draft.description);
        let submission = Submission {
            from_account_id: account.id.clone(),
            to_account_number: destination,
            amount: Amount(amount),
            description: self.draft.description.trim().to_owned(),
        };

        Ok(PendingTransfer {
            confirmation,
            advisories,
            submission,
        })
    }
}

/// The double-confirmation gate: carries the read-only summary and hands
/// out the submission only through the explicit second action. Dropping it
/// cancels the transfer.
#[derive(Debug)]
pub struct PendingTransfer {
    confirmation: ConfirmationView,
    advisories: Vec<Advisory>,
    submission: Submission,
}

impl PendingTransfer {
    pub fn confirmation(&self) -> &ConfirmationView {
        &self.confirmation
    }

    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub fn confirm(self) -> Submission {
        self.submission
    }
}

/// The fields of the form post the server owns. The engine never sends it
/// anywhere itself.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Submission {
    pub from_account_id: AccountId,
    pub to_account_number: AccountNumber,
    pub amount: Amount,
    pub description: String,
}
