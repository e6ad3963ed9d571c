use derive_more::Display;
use rust_decimal::{Decimal, dec};
use tracing::debug;

use crate::domain::props::{Advisory, Amount};

pub const DEPOSIT_CEILING: Decimal = dec!(100000);
pub const LARGE_DEPOSIT_THRESHOLD: Decimal = dec!(50000);
pub const SUBSTANTIAL_DEPOSIT_THRESHOLD: Decimal = dec!(10000);

// A withdrawal above this share of the balance gets the confirm-amount flag.
pub const LARGE_WITHDRAWAL_RATIO: Decimal = dec!(0.8);

#[derive(Debug, Clone, PartialEq, Display)]
pub enum CashierViolation {
    #[display("Enter a positive amount")]
    AmountNotPositive,
    #[display("Deposit cannot exceed Rs 100,000")]
    ExceedsDepositCeiling,
    #[display("Amount exceeds available balance")]
    InsufficientBalance,
}

impl std::error::Error for CashierViolation {}

/// Deposit intake rule. `Ok(None)` is plain valid, `Ok(Some(_))` is valid
/// with a non-blocking advisory.
pub fn check_deposit(input: &str) -> Result<Option<Advisory>, CashierViolation> {
    let amount = require_positive(input)?;

    if amount > DEPOSIT_CEILING {
        return Err(CashierViolation::ExceedsDepositCeiling);
    }

    if amount > LARGE_DEPOSIT_THRESHOLD {
        return Ok(Some(Advisory::LargeDeposit));
    }

    if amount > SUBSTANTIAL_DEPOSIT_THRESHOLD {
        return Ok(Some(Advisory::SubstantialDeposit));
    }

    Ok(None)
}

/// Withdrawal intake rule against the selected account's display balance.
pub fn check_withdrawal(
    input: &str,
    balance: Decimal,
) -> Result<Option<Advisory>, CashierViolation> {
    let amount = require_positive(input)?;
    debug!("Checking withdrawal of {} against {}", amount, balance);

    if amount > balance {
        return Err(CashierViolation::InsufficientBalance);
    }

    if amount > balance * LARGE_WITHDRAWAL_RATIO {
        return Ok(Some(Advisory::LargeWithdrawal));
    }

    Ok(None)
}

fn require_positive(input: &str) -> Result<Decimal, CashierViolation> {
    match Amount::parse(input) {
        Some(Amount(amount)) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(CashierViolation::AmountNotPositive),
    }
}
