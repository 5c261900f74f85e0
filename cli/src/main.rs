use std::process::ExitCode;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;

mod cert;
mod color;
mod error;
mod key;
mod output;
mod table;
mod utils;

use error::Result;

use cert::CertCommands;
use color::ColorConfig;
use key::KeyCommands;
use output::{OutputFormat, Render};

#[derive(Parser)]
#[command(name = "certlens")]
#[command(about = "Classify private keys and X.509 certificates, including post-quantum ones", long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Disable coloured output
    #[arg(short = 'c', long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Certificate operations
    Cert {
        #[command(subcommand)]
        command: CertCommands,
    },
    /// Private key operations
    Key {
        #[command(subcommand)]
        command: KeyCommands,
    },
}

fn run(cli: Cli) -> Result<()> {
    let render = Render::new(cli.format, ColorConfig::detect(cli.no_color));
    debug!("rendering as {:?} with {:?}", render.format, render.colors);

    match cli.command {
        Commands::Cert { command } => match command {
            CertCommands::Inspect { config } => cert::inspect::execute(config, &render)?,
            CertCommands::Dir { config } => cert::dir::execute(config, &render)?,
        },
        Commands::Key { command } => match command {
            KeyCommands::Inspect { config } => key::inspect::execute(config, &render)?,
            KeyCommands::Dir { config } => key::dir::execute(config, &render)?,
        },
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
