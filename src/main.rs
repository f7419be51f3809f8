use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

use eight_puzzle::{cli::Args, render, solve, Error};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let (start, goal) = args.boards(&mut input, &mut out)?;
    let verdict = solve(&start, &goal, &args.config());

    render::write_verdict(&mut out, &verdict, !args.no_color)?;
    out.flush()?;
    Ok(())
}
