use std::io::Write;

use crate::error::CliError;

use super::CommandResult;

pub const BANNER: &str = concat!("VWAPer version ", env!("CARGO_PKG_VERSION"));

pub fn run<W: Write>(out: &mut W) -> Result<CommandResult, CliError> {
    writeln!(out, "{BANNER}")?;
    Ok(CommandResult::empty())
}
