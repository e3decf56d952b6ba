use std::process::ExitCode;

use clap::Parser;
use emoji_catalog_prepare::{run, Args};

fn main() -> ExitCode
{
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
