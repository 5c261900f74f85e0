pub(crate) mod dir;
pub(crate) mod inspect;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum KeyCommands {
    /// Inspect a single private key
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
    /// Summarise every private key in a directory
    Dir {
        #[command(flatten)]
        config: dir::Config,
    },
}
