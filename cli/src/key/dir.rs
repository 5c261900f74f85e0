use certlens_inventory::summarize_keys;
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
    let summaries = summarize_keys(&config.dir, config.recursive)?;
    print!("{}", render.key_summaries(&summaries)?);
    Ok(())
}
