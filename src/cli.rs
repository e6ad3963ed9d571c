use std::env;

use color_eyre::eyre::{OptionExt, Result};

/// The harness takes a single argument: the CSV of recorded intake rows.
pub struct CliArgs {
    pub intake_file_path: String,
}

impl CliArgs {
    pub fn load() -> Result<Self> {
        let intake_file_path = env::args()
            .nth(1)
            .ok_or_eyre("Input file not passed")?;

        Ok(CliArgs { intake_file_path })
    }
}
