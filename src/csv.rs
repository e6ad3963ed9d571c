use color_eyre::eyre::{Result, eyre};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recorded intake attempt. Destination, amount and description stay
/// raw strings so the rules see exactly what the user typed.
#[derive(Debug, Serialize, Deserialize)]
pub struct CsvIntakeRecord {
    #[serde(rename = "type")]
    pub kind: IntakeKind,
    #[serde(rename = "account")]
    pub account_id: String,
    pub balance: Decimal,
    pub number: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum IntakeKind {
    Transfer,
    Deposit,
    Withdrawal,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CsvDecisionRecord {
    pub account: String,
    #[serde(rename = "type")]
    pub kind: IntakeKind,
    pub decision: Decision,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Accepted,
    Advisory,
    Rejected,
}

pub fn read_input<D: serde::de::DeserializeOwned>(
    file_path: &str,
) -> Result<impl Iterator<Item = Result<D>>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(file_path)
        .map_err(|e| eyre!("Could not read input file: {}", e))?;

    Ok(reader
        .into_deserialize()
        .map(|r| r.map_err(|ee| eyre!("Error parsing row: {}", ee))))
}
