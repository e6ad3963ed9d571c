use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::props::{AccountId, AccountNumber};

/// Client-visible snapshot of a selectable source account, as the
/// server-rendered page exposes it. Read-only from the engine's side;
/// the server stays authoritative over the real balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountOption {
    pub id: AccountId,
    pub display_balance: Decimal,
    /// The account's own number, when determinable from its display label.
    /// `None` disables the self-transfer check.
    pub number: Option<AccountNumber>,
}

impl AccountOption {
    pub fn new(id: AccountId, display_balance: Decimal, number: Option<AccountNumber>) -> Self {
        AccountOption {
            id,
            display_balance,
            number,
        }
    }
}
