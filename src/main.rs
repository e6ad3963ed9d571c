#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

use std::io;

use ::csv::WriterBuilder;
use color_eyre::eyre::Result;
use tracing::debug;

use crate::cli::CliArgs;

pub(crate) mod cli;
mod csv;
mod domain;
mod intake;
mod session;
mod view;

fn main() -> Result<()> {
    let cli_args = CliArgs::load()?;

    let rows = csv::read_input::<csv::CsvIntakeRecord>(&cli_args.intake_file_path)?;

    let mut csv_writer = WriterBuilder::new().from_writer(io::stdout());
    for row_result in rows {
        match row_result {
            Ok(row) => {
                let _ = csv_writer.serialize(intake::decide(row));
            }
            Err(e) => debug!("Error parsing row: {}", e),
        }
    }
    csv_writer.flush()?;

    Ok(())
}
