mod args;
mod art;
mod election;

use clap::Parser;
use log::{info, LevelFilter};

use std::error::Error;
use std::io;

use crate::args::Args;

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    info!("args: {:?}", args);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let res = election::run_election(&args, &mut stdin.lock(), &mut stdout.lock());

    if let Err(e) = res {
        eprintln!("An error occured: {}", e);
        let mut source = e.source();
        while let Some(s) = source {
            eprintln!("  caused by: {}", s);
            source = s.source();
        }
        std::process::exit(1);
    }
}
