use clap::Parser;

/// Print an error message and exit with the given code.
macro_rules! fatal_error {
    ($code:expr, $($arg:tt)*) => {{
        eprintln!("{} {}", "ERROR:".red().bold(), format!($($arg)*));
        std::process::exit($code)
    }};
}

mod commands;
use commands::Command;

/// Command line interface for the 24-puzzle solver.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    args.command.run();
}
