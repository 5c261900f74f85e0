use certlens::decoder::Decoder;
use certlens_pkcs::KeyRecord;
use clap::Args;

use crate::error::Result;
use crate::output::Render;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the private key file (PEM or DER format). If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config, render: &Render) -> Result<()> {
    let material = read_input(config.file.as_deref())?;
    let record: KeyRecord = material.decode()?;
    print!("{}", render.key(&record)?);
    Ok(())
}
