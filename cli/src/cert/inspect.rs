use certlens::decoder::Decoder;
use certlens_x509::CertificateRecord;
use clap::Args;

use crate::error::Result;
use crate::output::Render;
use crate::utils::read_input;

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the certificate file (PEM or DER format). If not specified, reads from stdin
    file: Option<String>,
}

pub(crate) fn execute(config: Config, render: &Render) -> Result<()> {
    let material = read_input(config.file.as_deref())?;
    let record: CertificateRecord = material.decode()?;
    print!("{}", render.certificate(&record)?);
    Ok(())
}
