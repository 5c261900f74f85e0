use certlens_inventory::summarize_certificates;
use chrono::Utc;
use clap::Args;

use crate::error::Result;
use crate::output::Render;

#[derive(Args)]
pub(crate) struct Config {
    /// Directory to scan
    dir: String,

    /// Descend into subdirectories
    #[arg(short, long)]
    recursive: bool,
}

pub(crate) fn execute(config: Config, render: &Render) -> Result<()> {
    let summaries = summarize_certificates(&config.dir, config.recursive, Utc::now())?;
    print!("{}", render.certificate_summaries(&summaries)?);
    Ok(())
}
