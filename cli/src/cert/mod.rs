pub(crate) mod dir;
pub(crate) mod inspect;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum CertCommands {
    /// Inspect a single certificate
    Inspect {
        #[command(flatten)]
        config: inspect::Config,
    },
    /// Summarise every certificate in a directory
    Dir {
        #[command(flatten)]
        config: dir::Config,
    },
}
