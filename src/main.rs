/// quijy main: parse flags, load config, dispatch one subcommand.
use clap::Parser; // trait import enables QuijyCli::parse()

use quijy::cli::{Command, QuijyCli};
use quijy::commands::{self, Session};
use quijy::config::QuijyConfig;

fn main() -> anyhow::Result<()> {
    let args = QuijyCli::parse();
    let config = QuijyConfig::load(args.config.as_deref())?;
    let session = Session::new(config, args.precision, args.chop, args.out);

    match args.cmd {
        Command::Kron { mats } => commands::kron::kron_cmd(&mats, &session),
        Command::Kronpow { mat, pwr } => commands::kron::kronpow_cmd(&mat, pwr, &session),
        Command::Eyepad { mat, dims, inds, sparse, dense, check } => {
            let sparse = match (sparse, dense) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::eyepad::eyepad_cmd(&mat, &dims, &inds, sparse, check, &session)
        }
        Command::Qonvert { data, qtype, sparse, normalize } => {
            commands::qonvert::qonvert_cmd(&data, qtype, sparse, normalize, &session)
        }
        Command::Info { mat } => commands::info::info_cmd(&mat, &session),
    }
}
